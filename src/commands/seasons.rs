use crate::utils::OutputStyle;

pub fn handle_seasons_command() {
    OutputStyle::print_options();
}
