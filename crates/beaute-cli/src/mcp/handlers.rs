//! MCP tool handlers implementation

use std::sync::Arc;

use beaute_core::{
    book_visits,
    display::{CreateResult, LatestPlan, OperationStatus, Products, Timeline},
    params as core, recommended_products, scheduled_visits, PlanStudio,
};
use log::debug;
use rmcp::{
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        Prompt, PromptArgument, PromptMessage, PromptMessageContent, PromptMessageRole,
    },
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::{errors::to_mcp_error, prompts::prompt_templates};

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Passes (de)serialization and the JSON schema straight through to the
/// wrapped core type.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

pub type UpdateDraft = McpParams<core::UpdateDraft>;
pub type PlanImages = McpParams<core::PlanImages>;

pub type McpResult = Result<CallToolResult, McpError>;

/// Markdown output of a handler.
pub type McpText = Result<String, McpError>;

/// Wraps handler output as a successful tool result.
pub fn text_result(text: McpText) -> McpResult {
    text.map(|text| CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    studio: Arc<PlanStudio>,
}

impl McpHandlers {
    pub fn new(studio: Arc<PlanStudio>) -> Self {
        Self { studio }
    }

    pub async fn show_draft(&self) -> McpText {
        debug!("show_draft");

        let draft = self
            .studio
            .load_draft()
            .await
            .map_err(|e| to_mcp_error("Failed to load draft", &e))?;
        Ok(draft.to_string())
    }

    pub async fn update_draft(&self, params: &UpdateDraft) -> McpText {
        debug!("update_draft: {params:?}");

        let result = self
            .studio
            .update_draft(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update draft", &e))?;
        Ok(result.to_string())
    }

    pub async fn clear_draft(&self) -> McpText {
        debug!("clear_draft");

        let persistence = self
            .studio
            .clear_draft()
            .await
            .map_err(|e| to_mcp_error("Failed to clear draft", &e))?;
        let status = OperationStatus::for_persistence(
            persistence,
            "Cleared the plan draft. The next wizard starts from the defaults",
        );
        Ok(status.to_string())
    }

    /// Opens the wizard (keeping an open one) and makes the given images
    /// the only ones attached, so each call describes its own request.
    async fn compose(&self, images: &PlanImages) -> Result<(), McpError> {
        self.studio
            .open_wizard()
            .await
            .map_err(|e| to_mcp_error("Failed to open the plan wizard", &e))?;
        self.studio
            .replace_images(images.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to attach images", &e))?;
        Ok(())
    }

    pub async fn build_prompt(&self, images: &PlanImages) -> McpText {
        debug!("build_prompt: {images:?}");

        self.compose(images).await?;
        self.studio
            .prompt()
            .map_err(|e| to_mcp_error("Failed to build prompt", &e))
    }

    pub async fn generate_plan(&self, images: &PlanImages) -> McpText {
        debug!("generate_plan: {images:?}");

        self.compose(images).await?;
        let plan = self
            .studio
            .generate()
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;

        Ok(match plan {
            Some(plan) => CreateResult::new(plan).to_string(),
            None => OperationStatus::warning(
                "The plan wizard was closed before the plan arrived; the result was discarded"
                    .to_string(),
            )
            .to_string(),
        })
    }

    pub async fn latest_plan(&self) -> McpText {
        debug!("latest_plan");

        let plan = self
            .studio
            .latest_plan()
            .await
            .map_err(|e| to_mcp_error("Failed to load latest plan", &e))?;
        Ok(LatestPlan(plan).to_string())
    }

    pub fn list_recommendations(&self) -> McpText {
        debug!("list_recommendations");

        let products = Products(recommended_products());
        Ok(format!("# Recommended home care\n\n{products}"))
    }

    pub fn show_timeline(&self) -> McpText {
        debug!("show_timeline");

        Ok(format!("# Plan timeline\n\n{}", Timeline(scheduled_visits())))
    }

    pub fn book_visits(&self) -> McpText {
        debug!("book_visits");

        Ok(book_visits(&scheduled_visits()).to_string())
    }

    /// List all available prompts
    pub fn list_prompts(&self) -> ListPromptsResult {
        debug!("list_prompts");

        let prompts = prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    template.name,
                    Some(template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.to_string(),
                                description: Some(arg.description.to_string()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        ListPromptsResult {
            next_cursor: None,
            prompts,
        }
    }

    /// Get a specific prompt by name and apply arguments
    pub fn get_prompt(&self, request: &GetPromptRequestParam) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let template = prompt_templates()
            .into_iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let value_of = |name: &str| {
            request
                .arguments
                .as_ref()
                .and_then(|args| args.get(name))
                .and_then(|value| match value {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
        };

        let text = template.render(value_of).map_err(|missing| {
            McpError::invalid_params(
                format!("Required arguments missing: {}", missing.join(", ")),
                None,
            )
        })?;

        Ok(GetPromptResult {
            description: Some(template.description.to_string()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(text),
            }],
        })
    }
}
