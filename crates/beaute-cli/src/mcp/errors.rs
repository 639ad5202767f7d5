//! Error handling utilities for MCP server

use beaute_core::BeauteError;
use rmcp::ErrorData;

/// Converts studio errors to MCP errors. Caller mistakes become invalid
/// params; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &BeauteError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        BeauteError::InvalidInput { .. }
        | BeauteError::FileSystem { .. }
        | BeauteError::WizardClosed
        | BeauteError::GenerationInProgress => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
