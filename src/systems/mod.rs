//! Cross-cutting systems

pub mod ui_interaction;
