//! Parameter structures for BeauteOS operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework derives beyond serde and, behind the `schema` feature,
//! schemars.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers define their own wrappers and convert with `.into()`:
//!
//! ```ignore
//! // In the CLI
//! #[derive(Args)]
//! pub struct DraftSetArgs {
//!     #[arg(long)]
//!     pub budget: Option<u64>,
//!     // ...
//! }
//!
//! impl From<DraftSetArgs> for UpdateDraft { /* ... */ }
//!
//! // In the MCP server
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(transparent)]
//! struct UpdateDraftRequest(beaute_core::params::UpdateDraft);
//! ```

use std::{path::PathBuf, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    display::Yen,
    error::{BeauteError, Result},
    models::CategoryId,
    workflow::PlanWizard,
};

/// Parameters for editing the plan draft.
///
/// Every field is optional; only the given ones change. Categories are
/// given by id (`hair`, `nail`, `relax`, `esthe`, `clinic`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateDraft {
    /// New goal text, free form
    pub goal_text: Option<String>,
    /// New monthly budget in JPY
    pub monthly_budget: Option<u64>,
    /// Category ids to select
    #[serde(default)]
    pub select: Vec<String>,
    /// Category ids to deselect
    #[serde(default)]
    pub deselect: Vec<String>,
    /// Switch the image auto-crop on or off
    pub auto_crop: Option<bool>,
}

/// One validated change to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    GoalText(String),
    MonthlyBudget(u64),
    Category(CategoryId, bool),
    AutoCrop(bool),
}

impl DraftEdit {
    /// Applies the change to the wizard's draft.
    pub fn apply(&self, wizard: &mut PlanWizard) {
        match self {
            DraftEdit::GoalText(text) => wizard.set_goal_text(text.as_str()),
            DraftEdit::MonthlyBudget(budget) => wizard.set_monthly_budget(*budget),
            DraftEdit::Category(category, selected) => wizard.set_category(*category, *selected),
            DraftEdit::AutoCrop(enabled) => wizard.set_auto_crop(*enabled),
        }
    }

    /// Human readable description of the change.
    pub fn describe(&self) -> String {
        match self {
            DraftEdit::GoalText(text) => format!("Set goal to \"{text}\""),
            DraftEdit::MonthlyBudget(budget) => {
                format!("Set monthly budget to {}", Yen(*budget))
            }
            DraftEdit::Category(category, true) => format!("Selected {category}"),
            DraftEdit::Category(category, false) => format!("Deselected {category}"),
            DraftEdit::AutoCrop(true) => "Enabled auto-crop".to_string(),
            DraftEdit::AutoCrop(false) => "Disabled auto-crop".to_string(),
        }
    }
}

fn parse_categories(field: &str, ids: &[String]) -> Result<Vec<CategoryId>> {
    ids.iter()
        .map(|id| {
            CategoryId::from_str(id).map_err(|_| {
                BeauteError::invalid_input(
                    field,
                    format!(
                        "Invalid category: {id}. Must be one of 'hair', 'nail', 'relax', \
                         'esthe' or 'clinic'"
                    ),
                )
            })
        })
        .collect()
}

impl UpdateDraft {
    /// Validates the parameters and returns the changes in application
    /// order: goal, budget, selections, deselections, auto-crop.
    ///
    /// # Errors
    ///
    /// * `BeauteError::InvalidInput` - When a category id is unknown
    /// * `BeauteError::InvalidInput` - When a category is both selected and
    ///   deselected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use beaute_core::{
    ///     models::CategoryId,
    ///     params::{DraftEdit, UpdateDraft},
    /// };
    ///
    /// let params = UpdateDraft {
    ///     monthly_budget: Some(20000),
    ///     select: vec!["nail".to_string()],
    ///     ..UpdateDraft::default()
    /// };
    /// let edits = params.validate()?;
    /// assert_eq!(
    ///     edits,
    ///     vec![
    ///         DraftEdit::MonthlyBudget(20000),
    ///         DraftEdit::Category(CategoryId::Nail, true),
    ///     ]
    /// );
    ///
    /// let invalid = UpdateDraft {
    ///     select: vec!["spa".to_string()],
    ///     ..UpdateDraft::default()
    /// };
    /// assert!(invalid.validate().is_err());
    /// # beaute_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<Vec<DraftEdit>> {
        let select = parse_categories("select", &self.select)?;
        let deselect = parse_categories("deselect", &self.deselect)?;

        if let Some(both) = select.iter().find(|c| deselect.contains(c)) {
            return Err(BeauteError::invalid_input(
                "deselect",
                format!("'{}' cannot be both selected and deselected", both.as_str()),
            ));
        }

        let mut edits = Vec::new();
        if let Some(text) = &self.goal_text {
            edits.push(DraftEdit::GoalText(text.clone()));
        }
        if let Some(budget) = self.monthly_budget {
            edits.push(DraftEdit::MonthlyBudget(budget));
        }
        edits.extend(select.into_iter().map(|c| DraftEdit::Category(c, true)));
        edits.extend(deselect.into_iter().map(|c| DraftEdit::Category(c, false)));
        if let Some(enabled) = self.auto_crop {
            edits.push(DraftEdit::AutoCrop(enabled));
        }
        Ok(edits)
    }
}

/// Reference images for a plan request, given as file paths.
///
/// Images are attached to the open wizard only; they are never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanImages {
    /// Path to an image of the look the user wants to reach
    pub goal_image: Option<String>,
    /// Path to an image of the user's current state
    pub current_image: Option<String>,
}

impl PlanImages {
    pub fn is_empty(&self) -> bool {
        self.goal_image.is_none() && self.current_image.is_none()
    }

    pub fn goal_path(&self) -> Option<PathBuf> {
        self.goal_image.as_ref().map(PathBuf::from)
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        self.current_image.as_ref().map(PathBuf::from)
    }
}
