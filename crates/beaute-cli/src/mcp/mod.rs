//! MCP server implementation for BeauteOS
//!
//! Exposes the plan workflow as Model Context Protocol tools so an AI
//! assistant can edit the draft, attach images, generate a plan and suggest
//! products on the user's behalf.
//!
//! The studio is shared without an outer lock: it serializes its own state,
//! so a second `generate_plan` while one is running is refused instead of
//! queued.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use beaute_core::PlanStudio;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use handlers::{McpResult, PlanImages, UpdateDraft};
use handlers::{text_result, McpHandlers};

/// MCP server for BeauteOS
#[derive(Clone)]
pub struct BeauteMcpServer {
    studio: Arc<PlanStudio>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BeauteMcpServer {
    pub fn new(studio: PlanStudio) -> Self {
        Self {
            studio: Arc::new(studio),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.studio.clone())
    }

    #[tool(
        name = "show_draft",
        description = "Show the stored plan draft: goal text, monthly budget in JPY, selected service categories and whether image auto-crop is enabled. The draft persists between sessions; images are never stored."
    )]
    async fn show_draft(&self) -> McpResult {
        text_result(self.handlers().show_draft().await)
    }

    #[tool(
        name = "update_draft",
        description = "Change plan draft fields. All fields are optional: goal_text (free text), monthly_budget (JPY, non-negative integer), select / deselect (lists of category ids: hair, nail, relax, esthe, clinic), auto_crop (boolean). Every change is saved immediately. Returns the list of changes and the updated draft."
    )]
    async fn update_draft(&self, Parameters(params): Parameters<UpdateDraft>) -> McpResult {
        text_result(self.handlers().update_draft(&params).await)
    }

    #[tool(
        name = "clear_draft",
        description = "Forget the stored plan draft and go back to the defaults (wedding goal, 50,000 JPY, hair and esthetic salons, auto-crop on). Later prompts and generations use the defaults."
    )]
    async fn clear_draft(&self) -> McpResult {
        text_result(self.handlers().clear_draft().await)
    }

    #[tool(
        name = "build_prompt",
        description = "Show the exact request that generate_plan would send, built from the draft and the optional image paths goal_image and current_image. Only the images passed in this call are attached; omitted ones are detached."
    )]
    async fn build_prompt(&self, Parameters(params): Parameters<PlanImages>) -> McpResult {
        text_result(self.handlers().build_prompt(&params).await)
    }

    #[tool(
        name = "generate_plan",
        description = "Generate an 8-week care plan from the draft and the optional image paths goal_image and current_image. Only one generation runs at a time: a call made while another is in progress fails instead of waiting. Only the images passed in this call are attached. On success the plan becomes the latest plan and the attached images are released."
    )]
    async fn generate_plan(&self, Parameters(params): Parameters<PlanImages>) -> McpResult {
        text_result(self.handlers().generate_plan(&params).await)
    }

    #[tool(
        name = "latest_plan",
        description = "Show the most recently generated plan with its generation time, including plans from earlier sessions."
    )]
    async fn latest_plan(&self) -> McpResult {
        text_result(self.handlers().latest_plan().await)
    }

    #[tool(
        name = "list_recommendations",
        description = "List recommended home care products with price, reason and purchase link. Personalized entries name the salon records they are based on."
    )]
    async fn list_recommendations(&self) -> McpResult {
        text_result(self.handlers().list_recommendations())
    }

    #[tool(
        name = "show_timeline",
        description = "List the salon visits scheduled on the plan timeline with date, duration and salon."
    )]
    async fn show_timeline(&self) -> McpResult {
        text_result(self.handlers().show_timeline())
    }

    #[tool(
        name = "book_visits",
        description = "Book every visit on the timeline in one click. Booking is a mock: it confirms without making a reservation."
    )]
    async fn book_visits(&self) -> McpResult {
        text_result(self.handlers().book_visits())
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BeauteMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "beaute".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"BeauteOS turns a beauty goal into an 8-week care plan that mixes salon visits and home care within a monthly budget.

## Core Concepts
- **Draft**: goal text, monthly budget (JPY), service categories and the auto-crop switch. Saved on every change and restored in later sessions.
- **Categories**: hair (Hair salon), nail (Nail/eyelash salon), relax (Relaxation salon), esthe (Beauty/esthetic salon), clinic (Cosmetic clinic).
- **Images**: an optional goal image and current-state image, given as file paths. They only live in the open wizard and are never stored.
- **Latest plan**: the most recent generated plan.

## Workflow
1. `show_draft` to see what is already entered
2. `update_draft` to record the user's goal, budget and categories
3. `build_prompt` to review the request
4. `generate_plan` to produce the plan (one at a time)
5. `list_recommendations` to suggest matching products
6. `show_timeline` and `book_visits` for the scheduled salon visits

## Tool Categories
- **Draft**: show_draft, update_draft, clear_draft
- **Plan**: build_prompt, generate_plan, latest_plan
- **Products**: list_recommendations
- **Visits**: show_timeline, book_visits"#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(self.handlers().list_prompts())
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(&request)
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: BeauteMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting BeauteOS MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
