use crate::cli::AdviseArgs;
use crate::commands::resolver_for;
use crate::config::Config;
use crate::core::data::{PlantType, Season};
use crate::core::resolver::normalize;
use crate::utils::{AppResult, OutputStyle};
use anyhow::Result;

pub fn handle_advise_command(config: &Config, args: &AdviseArgs) -> Result<()> {
    println!("{}", render_advice(config, args)?);
    Ok(())
}

fn render_advice(config: &Config, args: &AdviseArgs) -> AppResult<String> {
    let season = normalize(&args.season);
    let plant_type = normalize(&args.plant_type);

    if Season::parse(&season).is_none() {
        tracing::warn!(season = %season, "unknown season");
    }
    if PlantType::parse(&plant_type).is_none() {
        tracing::warn!(plant_type = %plant_type, "unknown plant type");
    }

    let report = resolver_for(config, args.limit).report(&season, &plant_type);
    OutputStyle::format_report(&report, args.format.unwrap_or(config.general.format))
}
