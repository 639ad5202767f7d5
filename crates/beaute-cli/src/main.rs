//! BeauteOS CLI Application
//!
//! Command-line interface and MCP server for the BeauteOS plan workflow.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use beaute_core::PlanStudioBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, BeauteMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        responder_delay_ms,
        timeout_secs,
        command,
    } = Args::parse();

    let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));
    let studio = PlanStudioBuilder::new()
        .with_database_path(database_file)
        .with_mock_delay(Duration::from_millis(responder_delay_ms))
        .with_timeout(timeout)
        .build()
        .await
        .context("Failed to initialize plan studio")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("BeauteOS started");

    match command {
        Some(Draft { command }) => Cli::new(studio, renderer).handle_draft_command(command).await,
        Some(Prompt(images)) => Cli::new(studio, renderer).show_prompt(images.into()).await,
        Some(Generate(images)) => Cli::new(studio, renderer).generate(images.into()).await,
        Some(Last) => Cli::new(studio, renderer).show_latest().await,
        Some(Recommend) => Cli::new(studio, renderer).recommend(),
        Some(Timeline { book }) => Cli::new(studio, renderer).timeline(book),
        Some(Serve) => {
            info!("Starting BeauteOS MCP server");
            run_stdio_server(BeauteMcpServer::new(studio))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(studio, renderer).show_draft().await,
    }
}
