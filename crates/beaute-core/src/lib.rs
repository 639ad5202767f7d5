//! Core library for the BeauteOS plan workflow.
//!
//! A user describes a beauty goal, picks a monthly budget and service
//! categories, optionally attaches a goal image and a current-state image,
//! and receives a generated care plan. The non-image fields are kept as a
//! draft across sessions; the plan text comes from a [`PlanResponder`]
//! (mocked by default).
//!
//! # Architecture
//!
//! - **Models** ([`models`]): the draft, categories, plan results, products
//! - **Prompt** ([`prompt`]): the request description sent to the responder
//! - **Store** ([`store`]): best-effort persistence over SQLite or memory
//! - **Workflow** ([`workflow`]): the wizard and its image slots
//! - **Studio** ([`studio`]): the facade driving one workflow instance
//! - **Display** ([`display`]): markdown formatting for terminal and MCP
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//!
//! use beaute_core::{params::UpdateDraft, store::MemoryStorage, PlanStudioBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let studio = PlanStudioBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .with_mock_delay(Duration::ZERO)
//!     .build()
//!     .await?;
//!
//! let update = UpdateDraft {
//!     goal_text: Some("Clear skin before summer".to_string()),
//!     select: vec!["clinic".to_string()],
//!     ..UpdateDraft::default()
//! };
//! println!("{}", studio.update_draft(&update).await?);
//!
//! if let Some(plan) = studio.generate().await? {
//!     println!("{plan}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod prompt;
pub mod responder;
pub mod store;
pub mod studio;
pub mod workflow;

// Re-export commonly used types
pub use catalog::{book_visits, recommended_products, scheduled_visits};
pub use db::Database;
pub use display::{
    CreateResult, LatestPlan, LocalDateTime, OperationStatus, Products, Timeline, UpdateResult,
    Yen,
};
pub use error::{BeauteError, Result};
pub use models::{CategoryId, CategorySet, PlanDraft, PlanResult, Product, ScheduledVisit};
pub use params::{DraftEdit, PlanImages, UpdateDraft};
pub use prompt::{build_prompt, PlanRequest};
pub use responder::{MockResponder, PlanResponder, ResponderError};
pub use store::{Persistence, RecordStorage};
pub use studio::{PlanStudio, PlanStudioBuilder};
pub use workflow::{SlotKind, WorkflowStatus};
