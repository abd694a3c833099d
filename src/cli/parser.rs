use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for wochenbericht
/// CLI application to fill in a weekly timesheet (Wochenbericht)
#[derive(Parser)]
#[command(
    name = "wochenbericht",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekly timesheet: working hours, breaks, tours and expenses, with signature and PDF export",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend today is this date (YYYY-MM-DD); drives the week rollover
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Show the current week with daily and weekly totals
    Show {
        /// Disable ANSI colours
        #[arg(long = "plain")]
        plain: bool,
    },

    /// Set a single field by its identifier
    ///
    /// Identifiers: name, from, to, and per day index 0..5:
    /// start-N, pause-N, end-N, tour-N, spesen-N
    Set {
        /// Field identifier (e.g. "start-0")
        field: String,
        /// New value; an empty string clears the field
        value: String,
    },

    /// Fill in one day of the week
    Day {
        /// Day: Montag..Samstag, mo..sa, monday..saturday or 0..5
        day: String,

        /// Start time (HH:MM)
        #[arg(long = "start")]
        start: Option<String>,
        /// Break in minutes
        #[arg(long = "pause")]
        pause: Option<String>,
        /// End time (HH:MM)
        #[arg(long = "end")]
        end: Option<String>,
        /// Tour label
        #[arg(long = "tour")]
        tour: Option<String>,
        /// Expenses, comma or dot as decimal separator (e.g. 12,50)
        #[arg(long = "spesen")]
        spesen: Option<String>,
    },

    /// Set the report header
    Header {
        /// Reporter name
        #[arg(long = "name")]
        name: Option<String>,
        /// Period start (free text)
        #[arg(long = "from")]
        from: Option<String>,
        /// Period end (free text)
        #[arg(long = "to")]
        to: Option<String>,
        /// Fill from/to with Monday and Saturday of the current week
        #[arg(long = "auto-period", conflicts_with_all = ["from", "to"])]
        auto_period: bool,
    },

    /// Clear every field and the signature of the current week
    Reset,

    /// Draw or clear the signature
    ///
    /// Strokes are lists of points in pad coordinates, e.g. "10,40 30,20 60,45".
    /// A script file may contain: down X,Y / move X,Y / up / leave /
    /// resize W,H[@RATIO] / clear, separated by newlines or ';'.
    Sign {
        /// One stroke (repeatable)
        #[arg(long = "stroke")]
        strokes: Vec<String>,
        /// Pointer script file
        #[arg(long = "script", value_name = "FILE")]
        script: Option<String>,
        /// Erase the signature
        #[arg(long = "clear", conflicts_with_all = ["strokes", "script"])]
        clear: bool,
    },

    /// Export the report as PDF (and share it) or as JSON
    Export {
        /// Export format: pdf, json
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        /// Output file path (default: <export_dir>/wochenbericht.pdf)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Only save the file, do not run the share command
        #[arg(long = "no-share")]
        no_share: bool,
    },

    /// Print the plain-text summary of the week
    Summary {
        /// Print a WhatsApp link with the summary pre-filled
        #[arg(long = "link")]
        link: bool,
    },

    /// Print the ISO week number
    Week {
        /// Date (YYYY-MM-DD), default today
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
