use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use anyhow::Result;
use crate::config::Config;
use crate::commands::{advise, configure, interactive, recommend, seasons};
use crate::utils::AppResult;

#[derive(Parser)]
#[command(name = "garden-advisor")]
#[command(about = "Seasonal gardening advice and plant recommendations")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, global = true, help = "Disable coloured output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Commands {
    /// Run the command. Config subcommands work on the file itself and never
    /// load it up front, so `config reset` can repair an invalid file.
    pub fn execute(self, config_path: Option<&Path>) -> Result<()> {
        match self {
            Commands::Advise(args) => advise::handle_advise_command(&load_config(config_path)?, &args)?,
            Commands::Recommend(args) => recommend::handle_recommend_command(&load_config(config_path)?, &args)?,
            Commands::Seasons => seasons::handle_seasons_command(),
            Commands::Interactive => interactive::handle_interactive_command(&load_config(config_path)?)?,
            Commands::Config(args) => configure::handle_config_command(config_path, args.command)?,
        }
        Ok(())
    }
}

fn load_config(config_path: Option<&Path>) -> AppResult<Config> {
    let config = Config::load_from(config_path)?;
    if !config.general.color {
        colored::control::set_override(false);
    }
    Ok(config)
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show advice and recommendations for a season and plant type
    Advise(AdviseArgs),

    /// List recommended plants for a season
    Recommend(RecommendArgs),

    /// List valid seasons and plant types
    Seasons,

    /// Prompt for a season and plant type (default)
    Interactive,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct AdviseArgs {
    #[arg(help = "Season (spring, summer, autumn, winter)")]
    pub season: String,

    #[arg(help = "Plant type (flower, vegetable, herb)")]
    pub plant_type: String,

    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..), help = "Maximum number of plants to recommend")]
    pub limit: Option<u64>,

    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct RecommendArgs {
    #[arg(help = "Season (spring, summer, autumn, winter)")]
    pub season: String,

    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..), help = "Maximum number of plants to recommend")]
    pub limit: Option<u64>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset {
        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_advise() {
        let cli = Cli::try_parse_from(["garden-advisor", "advise", "Summer", "herb", "--limit", "2", "-f", "json"]).unwrap();

        match cli.command {
            Some(Commands::Advise(args)) => {
                assert_eq!(args.season, "Summer");
                assert_eq!(args.plant_type, "herb");
                assert_eq!(args.limit, Some(2));
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            _ => panic!("expected advise command"),
        }
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(Cli::try_parse_from(["garden-advisor", "recommend", "summer", "--limit", "0"]).is_err());
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["garden-advisor", "--no-color", "-d"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["garden-advisor", "config", "path"]).unwrap();
        match cli.command {
            Some(Commands::Config(args)) => assert_eq!(args.command, Some(ConfigCommands::Path)),
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "garden-advisor", "advise", "winter", "herb", "--no-color", "--config", "custom.toml", "-d",
        ])
        .unwrap();

        assert!(cli.no_color);
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_config_reset_yes_flag() {
        let cli = Cli::try_parse_from(["garden-advisor", "config", "reset", "--yes"]).unwrap();
        match cli.command {
            Some(Commands::Config(args)) => assert_eq!(args.command, Some(ConfigCommands::Reset { yes: true })),
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn test_config_reset_repairs_invalid_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "[general]\nrecommendation_limit = 0\n").unwrap();

        let command = Commands::Config(ConfigArgs {
            command: Some(ConfigCommands::Reset { yes: true }),
        });
        command.execute(Some(&path)).unwrap();

        assert_eq!(Config::load_custom(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_still_blocks_lookups() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "[general]\nrecommendation_limit = 0\n").unwrap();

        assert!(Commands::Seasons.execute(Some(&path)).is_ok());

        let err = Commands::Recommend(RecommendArgs { season: "summer".to_string(), limit: None })
            .execute(Some(&path))
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<crate::utils::AppError>(), Some(crate::utils::AppError::Config(_))));
    }
}
