//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    /// Substituted when an optional argument is not given
    pub fallback: &'static str,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
    pub arguments: Vec<PromptTemplateArg>,
}

impl PromptTemplate {
    /// Fills the `{name}` placeholders. Returns the names of required
    /// arguments that are missing.
    pub fn render(
        &self,
        value_of: impl Fn(&str) -> Option<String>,
    ) -> Result<String, Vec<&'static str>> {
        let missing: Vec<&'static str> = self
            .arguments
            .iter()
            .filter(|arg| arg.required && value_of(arg.name).is_none())
            .map(|arg| arg.name)
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let mut text = self.template.to_string();
        for arg in &self.arguments {
            let value = value_of(arg.name).unwrap_or_else(|| arg.fallback.to_string());
            text = text.replace(&format!("{{{}}}", arg.name), &value);
        }
        Ok(text)
    }
}

/// Predefined prompt templates for plan creation
pub fn prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "plan",
        description: "Build an 8-week beauty care plan with BeauteOS's MCP tools",
        template: r#"You are **BeauteOS Planner**, helping a user turn a beauty goal into a realistic care plan.

# Goal
{goal}

# Budget
{budget}

# Step 1: Review the Draft
Use `show_draft` to see what the user already entered. The draft is kept between sessions, so it may hold an earlier goal.

# Step 2: Update the Draft
Use `update_draft` to record the goal above:
- **goal_text**: the goal in the user's words
- **monthly_budget**: the budget in JPY, if one was given
- **select** / **deselect**: category ids among `hair`, `nail`, `relax`, `esthe`, `clinic`
- **auto_crop**: leave it on unless the user asks otherwise

Pick categories that fit the goal. Skin goals usually need `esthe` and sometimes `clinic`; hair goals need `hair`.

# Step 3: Check the Request
Use `build_prompt` to see exactly what will be sent. If the user shared images, pass their paths as `goal_image` and `current_image`.

# Step 4: Generate
Use `generate_plan` with the same image paths. Only one generation runs at a time; wait for it instead of calling again.

# Step 5: Present
Summarize the plan for the user, then use `list_recommendations` to suggest home care products that fit it. Point out which products are personalized from salon records."#,
        arguments: vec![
            PromptTemplateArg {
                name: "goal",
                description: "What the user wants to achieve",
                required: true,
                fallback: "",
            },
            PromptTemplateArg {
                name: "budget",
                description: "Monthly budget in JPY",
                required: false,
                fallback: "Not specified; keep the budget stored in the draft.",
            },
        ],
    }]
}
