// A grid-snapped line editor made with the Bevy game engine.

use anyhow::Result;
use clap::Parser;

use gridpen::core::app::create_app;
use gridpen::core::cli::CliArgs;
use gridpen::core::logger::init_custom_logger;

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    init_custom_logger(cli_args.debug);

    let mut app = create_app(cli_args)?;
    app.run();
    Ok(())
}
