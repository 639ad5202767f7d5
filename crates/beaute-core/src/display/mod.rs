//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context: collections, operation results and
//! confirmation messages. Everything is formatted as markdown so the CLI can
//! render it and the MCP server can return it unchanged.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Draft, Result) │───▶│ (Products, ...) │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Products, Timeline)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, LatestPlan)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`money`]: Yen amounts
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use beaute_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Cleared the plan draft".to_string());
//! assert_eq!(success.to_string(), "Success: Cleared the plan draft\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod money;
pub mod results;
pub mod status;

pub use collections::{Products, Timeline};
pub use datetime::LocalDateTime;
pub use money::Yen;
pub use results::{CreateResult, LatestPlan, UpdateResult};
pub use status::OperationStatus;
