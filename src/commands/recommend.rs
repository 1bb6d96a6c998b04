use crate::cli::RecommendArgs;
use crate::commands::resolver_for;
use crate::config::Config;
use crate::core::resolver::normalize;
use crate::utils::OutputStyle;
use anyhow::Result;

pub fn handle_recommend_command(config: &Config, args: &RecommendArgs) -> Result<()> {
    let season = normalize(&args.season);
    let line = resolver_for(config, args.limit).recommendations(&season);
    println!("{}", OutputStyle::plants(&line));
    Ok(())
}
