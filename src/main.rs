// file-manager - validate folder and file names, then create them
// Main CLI entry point

use clap::Parser;
use file_manager::cli::{Cli, CliDispatcher};
use file_manager::utils::error::UserError;
use file_manager::utils::logging;
use std::process;

fn main() {
    let cli = Cli::parse();

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(err) => exit_with(&UserError::from_error(&err)),
    };

    if let Err(err) = logging::init(&settings.log_level) {
        eprintln!("Error: {err:#}");
        process::exit(UserError::EXIT_CONFIG);
    }

    tracing::debug!(?settings, "settings loaded");

    if let Err(err) = CliDispatcher::execute(cli, &settings) {
        exit_with(&UserError::from_error(&err));
    }
}

fn exit_with(user_error: &UserError) -> ! {
    user_error.print();
    process::exit(user_error.exit_code)
}
