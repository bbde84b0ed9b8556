use crate::export::ExportFormat;
use crate::models::{City, DayFilter, MonthFilter};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rbikeshare
/// Interactive explorer for US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "rbikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: popular times, stations, trip durations and user stats",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the city CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Without a command the interactive session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// City plus month/day filters, shared by `stats` and `export`.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    #[arg(long, value_enum, help = "City to analyze")]
    pub city: City,

    #[arg(
        long,
        default_value = "all",
        help = "Month filter: all, january, february, march, april, may or june"
    )]
    pub month: MonthFilter,

    #[arg(
        long,
        default_value = "all",
        help = "Day filter: all or a weekday name (monday - sunday)"
    )]
    pub day: DayFilter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session (default)
    Explore,

    /// Print the statistics once, without prompting
    Stats {
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(
            long,
            value_name = "ROWS",
            help = "Also print the first ROWS raw trips (text format only)"
        )]
        raw: Option<usize>,
    },

    /// Write the filtered trips to a CSV or JSON file
    Export {
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
