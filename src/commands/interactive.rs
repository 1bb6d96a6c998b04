use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::core::resolver::AdviceResolver;
use crate::utils::{AppError, AppResult, OutputStyle, prompt_plant_type, prompt_season};
use anyhow::Result;

pub fn handle_interactive_command(config: &Config) -> Result<()> {
    let resolver = AdviceResolver::new(config.general.recommendation_limit);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match run_shell(&mut stdin.lock(), &mut stdout, &resolver) {
        Ok(()) => Ok(()),
        Err(AppError::InputClosed) => {
            tracing::debug!("input closed during interactive session");
            writeln!(stdout)?;
            println!("⏹️  {}", OutputStyle::muted("Input closed, exiting."));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Prompt for a season and plant type, then write the report
pub fn run_shell<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, resolver: &AdviceResolver) -> AppResult<()> {
    let season = prompt_season(reader, writer)?;
    let plant_type = prompt_plant_type(reader, writer)?;

    let report = resolver.report(season.as_str(), plant_type.as_str());
    writeln!(writer, "{}", OutputStyle::render_report(&report))?;
    Ok(())
}
