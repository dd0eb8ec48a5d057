//! Exporting the drawing
//!
//! Two targets: the KuMir Drafter («Чертёжник») pen-plotter command text, and
//! an SVG image of the committed lines.

pub mod plotter;
pub mod svg;

use std::path::Path;

use anyhow::{Context, Result};

pub use plotter::{format_commands, plot_commands, PenCommand};

/// Writes exported text to disk
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)
        .with_context(|| format!("failed to write export to {}", path.display()))
}
