use crate::models::EventKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gymbook
#[derive(Parser, Debug)]
#[command(
    name = "gymbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Book gym lessons, track lesson credits and keep the coach calendar in plain CSV files",
    long_about = None
)]
pub struct Cli {
    /// Use another configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the directory holding the table files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Coach passphrase, required by coach commands
    #[arg(
        global = true,
        long = "passphrase",
        env = "GYMBOOK_PASSPHRASE",
        hide_env_values = true
    )]
    pub passphrase: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configuration and the table files
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Lessons booked on a day, with free hourly slots
    Day {
        /// Date (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Remaining lesson credits of a student
    Balance {
        /// Student name (exact match)
        name: String,
    },

    /// Book, list, edit and delete lessons (coach)
    Lesson {
        #[command(subcommand)]
        action: LessonCmd,
    },

    /// Manage the student roster (coach)
    Student {
        #[command(subcommand)]
        action: StudentCmd,
    },

    /// Manage lesson categories
    Category {
        #[command(subcommand)]
        action: CategoryCmd,
    },

    /// Booking requests and comments from students
    Request {
        #[command(subcommand)]
        action: RequestCmd,
    },

    /// Coach days off and appointments (coach)
    Event {
        #[command(subcommand)]
        action: EventCmd,
    },

    /// Calendar of lessons, coach events and holidays
    Calendar {
        #[arg(
            long,
            short,
            help = "Period to show: YYYY, YYYY-MM, YYYY-MM-DD or start:end (default: current month)"
        )]
        period: Option<String>,

        #[arg(long, help = "Print the calendar entries as JSON for the calendar widget")]
        json: bool,

        #[arg(long, value_name = "FILE", requires = "json", help = "Write the JSON to a file")]
        file: Option<String>,
    },

    /// Lessons per month and category (coach)
    Report,

    /// Export or restore all tables as a zip archive (coach)
    Backup {
        #[command(subcommand)]
        action: BackupCmd,
    },

    /// Delete every table file; they are recreated empty on the next run (coach)
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LessonCmd {
    /// Book a lesson
    Add {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Start time (HH:MM)
        time: String,
        /// Student name, as in the roster
        student: String,

        #[arg(long, short, help = "Category (default: the student's bound category)")]
        category: Option<String>,

        #[arg(long, short, default_value = "")]
        note: String,
    },

    /// List lessons
    List {
        #[arg(long, short, help = "Filter by YYYY, YYYY-MM, YYYY-MM-DD or start:end")]
        period: Option<String>,

        #[arg(long, short, help = "Only lessons of this student")]
        student: Option<String>,
    },

    /// Edit the lesson shown as #INDEX in `day DATE`
    Edit {
        date: String,
        index: usize,

        #[arg(long = "date", help = "Move the lesson to another date")]
        new_date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete lesson #INDEX of DATE, or every lesson of DATE
    Del {
        date: String,
        index: Option<usize>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum StudentCmd {
    /// Add a student
    Add {
        name: String,

        #[arg(long, short, default_value_t = 0, help = "Purchased lesson credits")]
        purchased: u32,

        #[arg(long, short, default_value = "", help = "Default category for bookings")]
        category: String,

        #[arg(long, short, default_value = "")]
        note: String,
    },

    /// List students with their balances
    List,

    /// Update the first student with this name
    Update {
        name: String,

        #[arg(long = "name", help = "Rename the student")]
        new_name: Option<String>,
        #[arg(long)]
        purchased: Option<u32>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },

    /// Remove the first student with this name
    Del {
        name: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCmd {
    /// Effective category list with colors
    List,
    /// Add a category label
    Add { label: String },
    /// Remove a label from the category table
    Del { label: String },
}

#[derive(Subcommand, Debug)]
pub enum RequestCmd {
    /// Leave a booking request or a comment for the coach
    Add {
        /// Wished date (YYYY-MM-DD)
        date: String,
        /// Wished time (HH:MM)
        time: String,
        /// Your name
        name: String,

        #[arg(long, short, default_value = "")]
        message: String,
    },

    /// Show every request (coach)
    List,

    /// Delete every request (coach)
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum EventCmd {
    /// Add a day off or an appointment
    Add {
        date: String,
        subject: String,

        #[arg(long, help = "Start time (HH:MM); omit for an all-day event")]
        time: Option<String>,

        #[arg(long, value_enum, default_value = "day-off")]
        kind: EventKind,

        #[arg(long, short, default_value = "")]
        note: String,
    },

    /// List coach events
    List {
        #[arg(long, short, help = "Filter by YYYY, YYYY-MM, YYYY-MM-DD or start:end")]
        period: Option<String>,
    },

    /// Delete event #INDEX of DATE
    Del { date: String, index: usize },
}

#[derive(Subcommand, Debug)]
pub enum BackupCmd {
    /// Write all tables into a zip archive
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Restore all tables from a zip archive, overwriting the current ones
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

impl Commands {
    /// Whether the command needs the coach passphrase.
    pub fn requires_coach(&self) -> bool {
        match self {
            Commands::Config { edit_config, .. } => *edit_config,
            Commands::Init
            | Commands::Day { .. }
            | Commands::Balance { .. }
            | Commands::Calendar { .. } => false,
            Commands::Request { action } => !matches!(action, RequestCmd::Add { .. }),
            Commands::Category { action } => !matches!(action, CategoryCmd::List),
            Commands::Lesson { .. }
            | Commands::Student { .. }
            | Commands::Event { .. }
            | Commands::Report
            | Commands::Backup { .. }
            | Commands::Reset { .. } => true,
        }
    }
}
