//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Configure termimad skin for better appearance
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.strikeout.set_fg(Color::DarkGrey);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            print!("{}", self.format_rich(markdown));
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Styles markdown for the terminal.
    ///
    /// Headers keep their hash marks; fenced code lines are printed with the
    /// inline code style and the fences themselves are dropped.
    fn format_rich(&self, markdown: &str) -> String {
        let mut out = String::new();
        let mut in_code = false;
        for line in markdown.lines() {
            if line.starts_with("```") {
                in_code = !in_code;
                continue;
            }
            let styled = if in_code {
                self.skin.inline_code.apply_to(line).to_string()
            } else if line.starts_with('#') {
                format!("\x1b[34m{line}\x1b[0m")
            } else {
                self.skin.inline(&strip_underline_tags(line)).to_string()
            };
            out.push_str(&styled);
            out.push('\n');
        }
        out
    }
}

/// termimad has no underline markup, so `<u>` tags are dropped in rich mode.
fn strip_underline_tags(line: &str) -> String {
    line.replace("<u>", "").replace("</u>", "")
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
