use colored::*;

use crate::cli::OutputFormat;
use crate::core::data::{PlantType, Season};
use crate::core::resolver::AdviceReport;
use crate::utils::error::{AppError, AppResult};

pub const ADVICE_HEADER: &str = "--- Gardening Advice ---";
pub const RECOMMENDATIONS_HEADER: &str = "--- Recommendations ---";

pub struct OutputStyle;

impl OutputStyle {
    pub fn advice(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn plants(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    /// Render the two-section report shown after a lookup
    pub fn render_report(report: &AdviceReport) -> String {
        format!(
            "\n{}\n{}\n\n{}\n{}",
            Self::title(ADVICE_HEADER),
            Self::advice(&report.advice),
            Self::title(RECOMMENDATIONS_HEADER),
            Self::plants(&report.recommendations),
        )
    }

    pub fn format_report(report: &AdviceReport, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Text => Ok(Self::render_report(report)),
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .map_err(|e| AppError::Serialization(e.to_string())),
        }
    }

    pub fn print_options() {
        Self::print_header("🌱 Valid Options");
        Self::print_field_colored("Seasons", &Season::sorted_names().join(", "), Self::advice);
        Self::print_field_colored("Plant types", &PlantType::sorted_names().join(", "), Self::plants);
    }
}
