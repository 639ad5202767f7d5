//! Data models for the plan workflow.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures apart from
//! presentation.
//!
//! # Examples
//!
//! ```rust
//! use beaute_core::models::{CategoryId, PlanDraft};
//!
//! let mut draft = PlanDraft::default();
//! draft.selected_categories.set(CategoryId::Clinic, true);
//! draft.selected_categories.set(CategoryId::Hair, false);
//! assert_eq!(
//!     draft.selected_categories.joined_labels(),
//!     "Beauty/esthetic salon, Cosmetic clinic"
//! );
//! ```

pub mod category;
pub mod draft;
pub mod product;
pub mod result;
pub mod visit;


pub use category::CategoryId;
pub use draft::{CategorySet, PlanDraft, DEFAULT_GOAL_TEXT, DEFAULT_MONTHLY_BUDGET};
pub use product::Product;
pub use result::PlanResult;
pub use visit::ScheduledVisit;
