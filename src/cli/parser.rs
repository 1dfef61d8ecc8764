use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for hrdash
#[derive(Parser)]
#[command(
    name = "hrdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal HR dashboard: browse, filter, bookmark and analyse employees",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Directory source: an http(s) URL or a path to a JSON file with a `users` array
    #[arg(global = true, long = "source", value_name = "URL|FILE")]
    pub source: Option<String>,

    /// Seed for the synthetic department/performance data (reproducible output)
    #[arg(global = true, long = "seed")]
    pub seed: Option<u64>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Listing filters shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against name, email and department
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Department to include (repeat or comma-separate for several)
    #[arg(long = "dept", short = 'd', value_name = "DEPARTMENT")]
    pub departments: Vec<String>,

    /// Inclusive performance range, e.g. 4-5 or 3.5:5
    #[arg(long, short = 'r', value_name = "MIN-MAX")]
    pub range: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DetailTab {
    Overview,
    Performance,
    Projects,
    Feedback,
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Show the dashboard: headline stats and the (filtered) employee listing
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the detail view of one employee
    Show {
        /// Employee id
        id: i64,

        /// Panel to show
        #[arg(long, value_enum, default_value_t = DetailTab::Overview)]
        tab: DetailTab,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Bookmark an employee
    Bookmark {
        /// Employee id
        id: i64,
    },

    /// Remove a bookmark
    Unbookmark {
        /// Employee id
        id: i64,
    },

    /// Bookmark an employee, or remove the bookmark if already present
    Toggle {
        /// Employee id
        id: i64,
    },

    /// Show bookmarked employees
    Bookmarks {
        /// Remove bookmarks whose employee is no longer in the directory
        #[arg(long)]
        prune: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Promote an employee (+0.5 performance, capped at 5.0; not persisted)
    Promote {
        /// Employee id
        id: i64,
    },

    /// Department averages, performance distribution and bookmark trend
    Analytics {
        /// Print JSON instead of charts
        #[arg(long)]
        json: bool,
    },

    /// Export the (filtered) listing
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Interactive session: filters and promotions live until you quit
    Shell,

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
