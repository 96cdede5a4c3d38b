//! Terminal context and output-mode resolution.

use std::io::IsTerminal;

/// How results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// Plain text, stable for scripts and logs
    #[default]
    Plain,
    /// Human-friendly tables and colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// `--json` beats everything; `--format plain` and `TERM=dumb` force
    /// plain; otherwise pretty on a TTY and plain elsewhere.
    pub fn resolve(json: bool, format: Option<&str>, is_tty: bool, term_is_dumb: bool) -> Self {
        if json {
            return Self::Json;
        }
        if format == Some("plain") || term_is_dumb {
            return Self::Plain;
        }
        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Terminal and environment context for rendering decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub is_tty: bool,
    pub color: bool,
    pub unicode: bool,
    pub mode: OutputMode,
}

impl UiContext {
    pub fn from_env(json: bool, format: Option<&str>, no_color: bool, ascii: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            is_tty,
            color: is_tty && !no_color && !no_color_env && !term_is_dumb,
            unicode: !ascii,
            mode: OutputMode::resolve(json, format, is_tty, term_is_dumb),
        }
    }

    /// Whether interactive prompts are possible.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}
