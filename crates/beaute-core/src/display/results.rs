//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{PlanDraft, PlanResult};

/// Wrapper type for displaying a freshly generated plan.
///
/// # Examples
///
/// ```rust
/// use beaute_core::{display::CreateResult, models::PlanResult};
///
/// let result = CreateResult::new(PlanResult::new("Weekly home care"));
/// let output = format!("{}", result);
/// assert!(output.starts_with("Generated a new plan."));
/// assert!(output.contains("Weekly home care"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PlanResult> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated a new plan.")?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Lists the changes made, then the updated resource. A change list that
/// stayed empty reads as "nothing to update".
///
/// # Examples
///
/// ```rust
/// use beaute_core::{display::UpdateResult, models::PlanDraft};
///
/// let changes = vec!["Set monthly budget to ￥20,000".to_string()];
/// let result = UpdateResult::with_changes(PlanDraft::default(), changes);
/// assert!(result.to_string().contains("Changes made:"));
/// ```
#[derive(Debug)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
    /// Whether the update reached the draft store
    pub stored: bool,
}

impl<T> UpdateResult<T> {
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self {
            resource,
            changes,
            stored: true,
        }
    }

    /// Marks the update as kept in memory only.
    pub fn not_stored(mut self) -> Self {
        self.stored = false;
        self
    }
}

impl fmt::Display for UpdateResult<PlanDraft> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            writeln!(f, "Nothing to update.")?;
        } else {
            writeln!(f, "Updated plan draft.")?;
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        if !self.stored {
            writeln!(f)?;
            writeln!(f, "Warning: the draft could not be saved and will not be restored.")?;
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// The latest plan, or a notice that none has been generated.
pub struct LatestPlan(pub Option<PlanResult>);

impl fmt::Display for LatestPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(plan) => write!(f, "{plan}"),
            None => writeln!(f, "No plan yet."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_result_lists_changes() {
        let result = UpdateResult::with_changes(
            PlanDraft::default(),
            vec!["Selected Nail/eyelash salon".to_string()],
        );
        let output = result.to_string();
        assert!(output.starts_with("Updated plan draft.\n"));
        assert!(output.contains("- Selected Nail/eyelash salon"));
        assert!(output.contains("# Plan draft"));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let output = UpdateResult::with_changes(PlanDraft::default(), Vec::new()).to_string();
        assert!(output.starts_with("Nothing to update.\n"));
    }

    #[test]
    fn test_update_result_not_stored_warns() {
        let result = UpdateResult::with_changes(PlanDraft::default(), vec!["x".to_string()])
            .not_stored();
        assert!(result.to_string().contains("Warning: the draft could not be saved"));
    }

    #[test]
    fn test_latest_plan() {
        assert_eq!(LatestPlan(None).to_string(), "No plan yet.\n");

        let plan = PlanResult::new("Budget allocation");
        let output = LatestPlan(Some(plan)).to_string();
        assert!(output.contains("# AI plan (latest)"));
        assert!(output.contains("Budget allocation"));
    }
}
