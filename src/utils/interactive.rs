use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::core::data::{PlantType, Season};
use crate::core::resolver::normalize;
use crate::utils::error::{AppError, AppResult};
use crate::utils::output::OutputStyle;

/// Read one line after printing `prompt`. Returns `InputClosed` at end of input.
pub fn prompt_input<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> AppResult<String> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(AppError::InputClosed);
    }

    Ok(input)
}

/// Prompt until the input parses, echoing the validation message on each miss
pub fn prompt_until_valid<T, R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> AppResult<T>
where
    T: FromStr<Err = AppError>,
    R: BufRead,
    W: Write,
{
    loop {
        let input = prompt_input(reader, writer, prompt)?;
        match input.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(err @ AppError::InvalidInput { .. }) => {
                tracing::debug!(input = input.trim(), "rejected interactive input");
                writeln!(writer, "{}", OutputStyle::warning(&err.to_string()))?;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Ask a yes/no question. Anything but `y`/`yes` counts as no, including end of input.
pub fn prompt_yes_no<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, prompt: &str) -> AppResult<bool> {
    match prompt_input(reader, writer, &format!("{} [y/N]: ", prompt)) {
        Ok(input) => Ok(matches!(normalize(&input).as_str(), "y" | "yes")),
        Err(AppError::InputClosed) => Ok(false),
        Err(err) => Err(err),
    }
}

pub fn prompt_season<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> AppResult<Season> {
    let prompt = format!("Enter season ({}): ", Season::ALL.map(Season::as_str).join(", "));
    prompt_until_valid(reader, writer, &prompt)
}

pub fn prompt_plant_type<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> AppResult<PlantType> {
    let prompt = format!("Enter plant type ({}): ", PlantType::ALL.map(PlantType::as_str).join(", "));
    prompt_until_valid(reader, writer, &prompt)
}
