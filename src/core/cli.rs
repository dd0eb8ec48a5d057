//! Command line arguments for the application

use std::path::PathBuf;

use anyhow::{ensure, Result};
use bevy::prelude::*;
use clap::Parser;

/// Command line arguments for grid and export configuration
#[derive(Parser, Debug, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// size of a grid cell in world units
    #[arg(long = "cell-size", default_value_t = 20.0)]
    pub cell_size: f32,

    /// where to write the exported plotter command text
    #[arg(long = "plot-out", default_value = "plot.txt")]
    pub plot_out: PathBuf,

    /// where to write the exported SVG image
    #[arg(long = "svg-out", default_value = "drawing.svg")]
    pub svg_out: PathBuf,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CliArgs {
    /// Rejects configurations the editor cannot work with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.cell_size.is_finite() && self.cell_size > 0.0,
            "cell size must be a positive number, got {}",
            self.cell_size
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_cell_size(cell_size: f32) -> CliArgs {
        CliArgs {
            cell_size,
            plot_out: PathBuf::from("plot.txt"),
            svg_out: PathBuf::from("drawing.svg"),
            debug: false,
        }
    }

    #[test]
    fn default_args_validate() {
        let args = CliArgs::parse_from(["gridpen"]);
        assert!(args.validate().is_ok());
        assert_eq!(args.cell_size, 20.0);
    }

    #[test]
    fn rejects_non_positive_cell_size() {
        assert!(args_with_cell_size(0.0).validate().is_err());
        assert!(args_with_cell_size(-5.0).validate().is_err());
        assert!(args_with_cell_size(f32::NAN).validate().is_err());
    }
}
