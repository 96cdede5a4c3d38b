//! Command handlers for the Livepos CLI.

pub mod live;
pub mod sessions;
