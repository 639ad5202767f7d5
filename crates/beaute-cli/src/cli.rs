//! Command handlers and their clap argument wrappers
//!
//! Each wrapper carries the clap derives and converts into a core parameter
//! type with `From`, keeping clap out of `beaute-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → PlanStudio
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use beaute_core::{
    book_visits,
    display::{CreateResult, LatestPlan, OperationStatus, Products, Timeline},
    params::{PlanImages, UpdateDraft},
    recommended_products, scheduled_visits, PlanStudio,
};
use clap::{Args, Subcommand};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Edit the plan draft
///
/// Only the given options change; every change is saved immediately.
#[derive(Args)]
pub struct DraftSetArgs {
    /// What you want to achieve, in your own words
    #[arg(short, long)]
    pub goal: Option<String>,
    /// Monthly budget in JPY
    #[arg(short, long)]
    pub budget: Option<u64>,
    /// Categories to select (hair, nail, relax, esthe, clinic)
    #[arg(short, long, value_delimiter = ',')]
    pub select: Vec<String>,
    /// Categories to deselect
    #[arg(short, long, value_delimiter = ',')]
    pub deselect: Vec<String>,
    /// Switch the image auto-crop on or off
    #[arg(long)]
    pub auto_crop: Option<bool>,
}

impl From<DraftSetArgs> for UpdateDraft {
    fn from(val: DraftSetArgs) -> Self {
        UpdateDraft {
            goal_text: val.goal,
            monthly_budget: val.budget,
            select: val.select,
            deselect: val.deselect,
            auto_crop: val.auto_crop,
        }
    }
}

/// Reference images for the request. Neither is stored.
#[derive(Args)]
pub struct ImageArgs {
    /// Image of the look you want to reach
    #[arg(long)]
    pub goal_image: Option<PathBuf>,
    /// Image of your current state
    #[arg(long)]
    pub current_image: Option<PathBuf>,
}

impl From<ImageArgs> for PlanImages {
    fn from(val: ImageArgs) -> Self {
        PlanImages {
            goal_image: val.goal_image.map(|p| p.display().to_string()),
            current_image: val.current_image.map(|p| p.display().to_string()),
        }
    }
}

#[derive(Subcommand)]
pub enum DraftCommands {
    /// Show the stored draft
    #[command(alias = "s")]
    Show,
    /// Change draft fields
    #[command(alias = "e")]
    Set(DraftSetArgs),
    /// Forget the stored draft; the next run starts from the defaults
    #[command(alias = "c")]
    Clear,
}

/// Runs CLI commands against one studio.
pub struct Cli {
    studio: PlanStudio,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(studio: PlanStudio, renderer: TerminalRenderer) -> Self {
        Self { studio, renderer }
    }

    pub async fn handle_draft_command(&self, command: DraftCommands) -> Result<()> {
        match command {
            DraftCommands::Show => self.show_draft().await,
            DraftCommands::Set(args) => self.set_draft(args.into()).await,
            DraftCommands::Clear => self.clear_draft().await,
        }
    }

    pub async fn show_draft(&self) -> Result<()> {
        let draft = self
            .studio
            .load_draft()
            .await
            .context("Failed to load draft")?;
        self.renderer.render(&draft.to_string())
    }

    async fn set_draft(&self, params: UpdateDraft) -> Result<()> {
        debug!("draft set: {params:?}");
        let result = self
            .studio
            .update_draft(&params)
            .await
            .context("Failed to update draft")?;
        self.renderer.render(&result.to_string())
    }

    async fn clear_draft(&self) -> Result<()> {
        let persistence = self
            .studio
            .clear_draft()
            .await
            .context("Failed to clear draft")?;
        let status = OperationStatus::for_persistence(persistence, "Cleared the plan draft");
        self.renderer.render(&status.to_string())
    }

    /// Opens the wizard on the stored draft and attaches the given images.
    async fn compose(&self, images: &PlanImages) -> Result<()> {
        self.studio
            .open_wizard()
            .await
            .context("Failed to open the plan wizard")?;
        self.studio
            .attach_images(images)
            .await
            .context("Failed to attach images")?;
        Ok(())
    }

    pub async fn show_prompt(&self, images: PlanImages) -> Result<()> {
        self.compose(&images).await?;
        let prompt = self.studio.prompt().context("Failed to build prompt")?;
        self.renderer.render(&format!("{prompt}\n"))
    }

    pub async fn generate(&self, images: PlanImages) -> Result<()> {
        self.compose(&images).await?;
        let plan = self
            .studio
            .generate()
            .await
            .context("Failed to generate plan")?;

        match plan {
            Some(plan) => self.renderer.render(&CreateResult::new(plan).to_string()),
            None => {
                let status = OperationStatus::warning(
                    "The plan wizard was closed before the plan arrived".to_string(),
                );
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub async fn show_latest(&self) -> Result<()> {
        let plan = self
            .studio
            .latest_plan()
            .await
            .context("Failed to load latest plan")?;
        self.renderer.render(&LatestPlan(plan).to_string())
    }

    pub fn recommend(&self) -> Result<()> {
        let products = Products(recommended_products());
        self.renderer
            .render(&format!("# Recommended home care\n\n{products}"))
    }

    pub fn timeline(&self, book: bool) -> Result<()> {
        let visits = scheduled_visits();
        let mut output = format!("# Plan timeline\n\n{}", Timeline(visits.clone()));
        if book {
            output.push('\n');
            output.push_str(&book_visits(&visits).to_string());
        }
        self.renderer.render(&output)
    }
}
