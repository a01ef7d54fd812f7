// CLI module for command-line interface

pub mod args;
pub mod create;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::utils::config::{Settings, SettingsOverrides};
use crate::utils::error::Result;
use crate::utils::logging::verbosity_level;

use self::create::CreateCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "file-manager")]
#[command(about = "Validate a folder name and a file name, then create the folder and an empty file inside it")]
#[command(long_about = r#"Validate a folder name and a file name, then create the folder
(if it does not exist yet) and an empty file inside it.

Names may contain letters, digits, '_', '-' and inner spaces; file names may
also contain '.' and must carry an extension. Reserved device names such as
CON or LPT1 are rejected. Existing files are never overwritten.

Examples:
  file-manager reports summary.txt        Create reports/summary.txt
  file-manager "reports summary.txt"      Same, passed as a single argument
  file-manager --dry-run logs app.log     Validate only, touch nothing
  file-manager --json data rows.csv       Print the result as JSON"#)]
#[command(version)]
pub struct Cli {
    /// <folder_name> <file_name>, or both in one whitespace-separated argument
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Directory the folder is created in (default: current directory)
    #[arg(long, env = "FILE_MANAGER_BASE_DIR", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Read settings from this TOML file instead of the default locations
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Validate and report without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Load settings with command-line values layered on top
    pub fn load_settings(&self) -> Result<Settings> {
        Settings::load(
            self.config.as_deref(),
            SettingsOverrides {
                base_dir: self.base_dir.clone(),
                log_level: verbosity_level(self.verbose).map(ToString::to_string),
            },
        )
    }
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the parsed command line with resolved settings
    pub fn execute(cli: Cli, settings: &Settings) -> Result<()> {
        let cmd = CreateCommand {
            args: cli.args,
            dry_run: cli.dry_run,
            json: cli.json,
        };
        cmd.run(&settings.base_dir).map(|_| ())
    }
}
