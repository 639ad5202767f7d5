//! Terminal rendering for the markdown the core Display types produce.
//!
//! Rich output styles headers and `Warning:` lines itself and hands every
//! other line to termimad; plain output is written unchanged.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER: &str = "\x1b[35m";
const WARNING: &str = "\x1b[33;1m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Magenta);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    /// Render markdown text into `out`.
    pub fn render_to(&self, out: &mut impl Write, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return out.write_all(markdown.as_bytes());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                // Headers keep their hash marks.
                writeln!(out, "{HEADER}{line}{RESET}")?;
            } else if let Some(rest) = line.strip_prefix("Warning:") {
                writeln!(out, "{WARNING}Warning:{RESET}{}", self.skin.inline(rest))?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
