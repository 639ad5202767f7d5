//! Display implementations for domain models.
//!
//! Output is markdown, rendered rich or plain by the CLI and passed through
//! as-is by the MCP server.

use std::fmt;

use super::{datetime::LocalDateTime, money::Yen};
use crate::models::{CategoryId, PlanDraft, PlanResult, Product, ScheduledVisit};

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PlanDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan draft")?;
        writeln!(f)?;
        writeln!(f, "- **Goal**: {}", self.goal_text)?;
        writeln!(f, "- **Monthly budget**: {}", Yen(self.monthly_budget))?;

        if self.selected_categories.is_empty() {
            writeln!(f, "- **Categories**: none")?;
        } else {
            writeln!(
                f,
                "- **Categories**: {}",
                self.selected_categories.joined_labels()
            )?;
        }

        let crop = if self.auto_crop_enabled {
            "enabled"
        } else {
            "disabled"
        };
        writeln!(f, "- **Auto-crop**: {crop}")
    }
}

impl fmt::Display for PlanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# AI plan (latest)")?;
        writeln!(f)?;
        writeln!(f, "- Generated: {}", LocalDateTime(&self.generated_at))?;
        writeln!(f)?;
        // Keep the responder's line breaks.
        for line in self.text.lines() {
            writeln!(f, "{line}  ")?;
        }
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.name, Yen(u64::from(self.price)))?;
        writeln!(f)?;
        writeln!(f, "{}", self.reason)?;
        writeln!(f)?;
        if let Some(basis) = self.basis.as_deref().filter(|_| self.personalized) {
            writeln!(f, "- **Personalized**: {basis}")?;
        }
        writeln!(f, "- **Link**: {}", self.href)?;
        writeln!(f)
    }
}

impl fmt::Display for ScheduledVisit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** ({} min): {}",
            self.date, self.duration_minutes, self.title
        )
    }
}
