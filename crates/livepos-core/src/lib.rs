//! # Livepos Core
//!
//! Core library for Livepos - an order-entry ledger for live-streamed sales
//! sessions.
//!
//! This crate provides the domain logic independent of any interaction
//! surface: the ledger state machine, vocabulary history, per-item price
//! book, CSV session persistence, and on-demand summaries.
//!
//! ## Architecture
//!
//! - **ledger**: The ordered, newest-first order ledger
//! - **order**: Order record data model and CSV row shapes
//! - **vocab**: Default and learned vocabularies for item/color/size input
//! - **price_book**: Per-item cost/price lookup with computed profit
//! - **session**: The session state struct tying the pieces together
//! - **store**: CSV save/load/list for session files
//! - **summary**: Pivot and totals views derived from a ledger snapshot

pub mod error;
pub mod ledger;
pub mod order;
pub mod price_book;
pub mod session;
pub mod store;
pub mod summary;
pub mod vocab;

pub use error::{PosError, Result};
pub use ledger::Ledger;
pub use order::{OrderField, OrderRecord};
pub use price_book::{PriceBook, PriceEntry};
pub use session::Session;
pub use store::SessionStore;
pub use vocab::{VocabKind, VocabularyStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
