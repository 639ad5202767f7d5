use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DraftCommands, ImageArgs};

/// Command-line interface for BeauteOS plan creation
///
/// Describe a beauty goal, a monthly budget and the kinds of salons you want
/// to use, optionally attach a goal image and a current-state image, and get
/// an AI generated care plan. The draft is kept between runs; images are
/// not. The `serve` command exposes the same workflow to AI assistants over
/// MCP (Model Context Protocol).
#[derive(Parser)]
#[command(version, about, name = "beaute")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/beaute/beaute.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Artificial latency of the mock plan responder, in milliseconds
    #[arg(long, global = true, default_value_t = 600)]
    pub responder_delay_ms: u64,

    /// Give up on the plan responder after this many seconds (0 waits
    /// indefinitely)
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the BeauteOS CLI
///
/// Without a command the stored draft is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show, edit or clear the plan draft
    #[command(alias = "d")]
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
    /// Print the request that would be sent to the plan responder
    #[command(alias = "p")]
    Prompt(ImageArgs),
    /// Generate a plan from the draft and the given images
    #[command(alias = "g")]
    Generate(ImageArgs),
    /// Show the most recently generated plan
    #[command(alias = "l")]
    Last,
    /// List recommended home care products
    #[command(alias = "r")]
    Recommend,
    /// Show the scheduled salon visits
    #[command(alias = "t")]
    Timeline {
        /// Book every listed visit in one click (mocked)
        #[arg(long)]
        book: bool,
    },
    /// Start the MCP server
    Serve,
}
