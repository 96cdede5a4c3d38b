//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Header line for a command.
///
/// Pretty mode: "Livepos · command (context)"; plain mode: "livepos command".
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    if ctx.mode.is_pretty() {
        let title = styled("Livepos", styles::bold(), ctx.color);
        match context {
            Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
            None => format!("{} \u{00B7} {}", title, command),
        }
    } else {
        format!("livepos {}", command)
    }
}

/// Badge plus message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let text = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        text
    } else {
        format!("{} {}", text, message)
    }
}

/// Key-value pair: "Key: value" pretty, "key=value" plain.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", label, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Hint line pointing at a follow-up action.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Bordered table in pretty mode, tab-separated rows otherwise.
pub fn table(ctx: &UiContext, headers: &[String], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(ASCII_MARKDOWN);
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        let header_cells: Vec<&str> = headers.iter().map(String::as_str).collect();
        table.set_header(header_cells);
        for row in rows {
            table.add_row(row);
        }
        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print an error with an optional hint to stderr.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    if ctx.mode.is_pretty() {
        eprintln!("{}", badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            eprintln!("{}", hint(ctx, h));
        }
    } else {
        eprintln!("error={}", message);
        if let Some(h) = error_hint {
            eprintln!("hint={}", h);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::context::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "files", None), "livepos files");
    }

    #[test]
    fn test_kv_plain_is_machine_friendly() {
        assert_eq!(kv(&plain_ctx(), "Total profit", "150"), "total_profit=150");
    }

    #[test]
    fn test_table_plain_is_tab_separated() {
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        let headers = vec!["H1".to_string(), "H2".to_string()];
        assert_eq!(table(&plain_ctx(), &headers, &rows), "a\tb");
    }

    #[test]
    fn test_table_pretty_includes_headers() {
        let rows = vec![vec!["a".to_string()]];
        let headers = vec!["H1".to_string()];
        let rendered = table(&pretty_ctx(), &headers, &rows);
        assert!(rendered.contains("H1"));
        assert!(rendered.contains('a'));
    }
}
