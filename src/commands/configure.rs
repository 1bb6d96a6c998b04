use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::{AppResult, OutputStyle, prompt_yes_no};
use anyhow::Result;

pub fn handle_config_command(config_path: Option<&Path>, command: Option<ConfigCommands>) -> Result<()> {
    let path = Config::effective_path(config_path);
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&Config::load_from(config_path)?),
        Some(ConfigCommands::Path) => handle_path_command(&path),
        Some(ConfigCommands::Reset { yes }) => {
            let stdin = io::stdin();
            reset_config(&path, yes, &mut stdin.lock(), &mut io::stdout())?;
            Ok(())
        }
        None => handle_config_help(&path),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    OutputStyle::print_header("⚙️  Garden Advisor Configuration");

    println!("General:");
    println!("  Recommendation limit: {}", config.general.recommendation_limit);
    println!("  Color: {}", config.general.color);
    println!("  Format: {:?}", config.general.format);

    Ok(())
}

fn handle_config_help(path: &Path) -> Result<()> {
    OutputStyle::print_header("⚙️  Configuration Management");
    println!("Available configuration commands:");
    println!("  garden-advisor config show    - Show current configuration");
    println!("  garden-advisor config path    - Print configuration file location");
    println!("  garden-advisor config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", path.display());
    Ok(())
}

fn handle_path_command(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

/// Overwrite `path` with the default configuration. Returns false if the user declined.
fn reset_config<R: BufRead, W: Write>(path: &Path, yes: bool, reader: &mut R, writer: &mut W) -> AppResult<bool> {
    let confirmed = yes
        || prompt_yes_no(
            reader,
            writer,
            &format!("Reset {} to defaults? This will overwrite your current settings.", path.display()),
        )?;

    if !confirmed {
        writeln!(writer, "Reset cancelled.")?;
        return Ok(false);
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "configuration reset");
    writeln!(writer, "✓ {}", OutputStyle::success("Configuration reset to defaults!"))?;
    Ok(true)
}
