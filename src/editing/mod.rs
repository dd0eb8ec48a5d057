//! Drawing state and point editing
//!
//! The document holds the committed polylines plus the line currently being
//! drawn; the selection tracks which committed line and point the user is
//! working with.

pub mod document;
pub mod selection;

pub use document::Document;
pub use selection::{Selection, SelectionPlugin};
