//! UI primitives for the Livepos CLI.
//!
//! - **Context**: TTY/color/unicode detection and output-mode resolution
//! - **Theme**: badges and style tokens
//! - **Render**: headers, badges, key-values, generic tables
//! - **Tables**: domain tables (order list, counts, size pivot)

mod context;
pub mod render;
pub mod tables;
pub mod theme;

pub use context::{OutputMode, UiContext};
pub use render::{badge, header, hint, kv, print_error, table};
pub use theme::Badge;
