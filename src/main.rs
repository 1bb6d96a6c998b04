use anyhow::Result;
use clap::Parser;

use garden_advisor::cli::{Cli, Commands};
use garden_advisor::utils::{AppError, logger, report_error};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.debug);

    if let Err(err) = run(cli) {
        if let Some(app_err) = err.downcast_ref::<AppError>() {
            report_error(app_err);
            std::process::exit(1);
        }
        return Err(err);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // No subcommand starts the prompt loop
    cli.command
        .unwrap_or(Commands::Interactive)
        .execute(cli.config.as_deref())
}
