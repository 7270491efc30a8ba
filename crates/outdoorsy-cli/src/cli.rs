//! CLI definition using clap

use clap::{Parser, Subcommand};
use outdoorsy_types::{OutputFormat, SortKey};
use std::path::PathBuf;

use crate::ui::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "outdoorsy")]
#[command(version)]
#[command(about = "Import and view Outdoorsy customer and vehicle records")]
#[command(
    long_about = "Imports comma- or pipe-delimited customer files into a local SQLite \
database and displays them sorted by full name or vehicle type.\n\n\
Run without a command to use the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Database file, or directory to hold customers.db (default: ./customers.db)
    #[arg(long, global = true, env = "OUTDOORSY_DB")]
    pub db: Option<PathBuf>,

    /// Config file to use instead of the per-user one
    #[arg(long, global = true, env = "OUTDOORSY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (table, json). Uses config value if not specified.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// When to color messages
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a comma or pipe delimited file to the database
    Import {
        /// Path to the file
        file: PathBuf,

        /// The file's delimiter: comma or pipe
        #[arg(long, short = 'd')]
        delimiter: String,

        /// Skip lines that cannot be parsed instead of stopping at the first one
        #[arg(long)]
        skip_malformed: bool,
    },

    /// View the customer table
    View {
        /// Sort by full name or vehicle type. Uses config value if not specified.
        #[arg(long, short = 's')]
        sort: Option<SortKey>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the database file or directory
        #[arg(long)]
        set_db_path: Option<PathBuf>,

        /// Set the default sort order
        #[arg(long)]
        set_sort: Option<SortKey>,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Run the interactive menu
    Interactive,
}
