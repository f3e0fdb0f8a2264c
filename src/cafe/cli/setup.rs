use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cafe", bin_name = "cafe", version)]
#[command(about = "In-memory order desk for a small cafe", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json
    #[arg(
        long,
        global = true,
        env = "CAFE_CONFIG_DIR",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub config_dir: Option<PathBuf>,

    /// Verbose logging on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive order desk (the default)
    #[command(alias = "s")]
    Session,

    /// Print the menu and exit
    #[command(alias = "m")]
    Menu {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print the effective configuration as JSON
    Config,
}
