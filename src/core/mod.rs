//! Application shell: CLI, logging, settings, cursor tracking, app wiring

pub mod app;
pub mod cli;
pub mod cursor;
pub mod logger;
pub mod settings;
