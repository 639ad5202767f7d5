//! Formatting a plan request for the responder.

use std::fmt;

use crate::models::PlanDraft;

/// Instructions appended to every request.
const PLAN_INSTRUCTIONS: &str = "\
Produce an 8-week plan covering
- Salon visits (type / frequency / duration)
- Home care (frequency / duration)
- Booking candidates (week / time slot)
- Allocation within the budget
- When both images are present, reflect the differences in texture, contours and skin/hair condition";

/// A draft snapshot combined with the presence of the transient images.
///
/// Built only for a generation call, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub draft: PlanDraft,
    pub has_goal_image: bool,
    pub has_current_image: bool,
}

impl PlanRequest {
    pub fn new(draft: PlanDraft, has_goal_image: bool, has_current_image: bool) -> Self {
        Self {
            draft,
            has_goal_image,
            has_current_image,
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl fmt::Display for PlanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draft = &self.draft;
        writeln!(f, "Goal: {}", draft.goal_text)?;
        writeln!(f, "Budget: {} JPY/month", draft.monthly_budget)?;
        writeln!(f, "Categories: {}", draft.selected_categories.joined_labels())?;
        writeln!(f, "Goal image attached: {}", yes_no(self.has_goal_image))?;
        writeln!(f, "Current image attached: {}", yes_no(self.has_current_image))?;
        writeln!(
            f,
            "Auto-crop: {}",
            if draft.auto_crop_enabled { "enabled" } else { "disabled" }
        )?;
        writeln!(f)?;
        write!(f, "{PLAN_INSTRUCTIONS}")
    }
}

/// Builds the request description sent to the responder.
///
/// The output is deterministic for a given input: categories are listed in
/// enumeration order and an empty selection leaves an empty
/// `Categories:` segment.
///
/// # Examples
///
/// ```rust
/// use beaute_core::{models::PlanDraft, prompt::build_prompt};
///
/// let prompt = build_prompt(&PlanDraft::default(), true, false);
/// assert!(prompt.contains("Budget: 50000 JPY/month"));
/// assert!(prompt.contains("Categories: Hair salon, Beauty/esthetic salon"));
/// assert!(prompt.contains("Goal image attached: yes"));
/// assert!(prompt.contains("Current image attached: no"));
/// ```
pub fn build_prompt(draft: &PlanDraft, has_goal_image: bool, has_current_image: bool) -> String {
    PlanRequest::new(draft.clone(), has_goal_image, has_current_image).to_string()
}
