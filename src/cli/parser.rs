use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for qrattend
#[derive(Parser)]
#[command(
    name = "qrattend",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance client: scan employee QR badges and register check-ins/check-outs",
    long_about = None
)]
pub struct Cli {
    /// Override local store path (useful for tests or multiple accounts)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the backend base URL from the configuration file
    #[arg(global = true, long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Debug output (same as RUST_LOG=debug)
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the local store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (overrides $EDITOR/$VISUAL)")]
        editor: Option<String>,
    },

    /// Authenticate against the backend and store the session
    Login {
        #[arg(long, short = 'u')]
        username: String,

        /// Password; read from stdin when omitted
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Clear the stored session
    Logout {
        /// Also invalidate the token on the server
        #[arg(long)]
        remote: bool,
    },

    /// Show the stored session
    Session,

    /// List the projects visible to the logged-in user, grouped
    Projects {
        /// Show group headers only
        #[arg(long)]
        collapsed: bool,
    },

    /// Decode a QR payload and check it against a project (no submission)
    Scan {
        /// Project currently open
        #[arg(long, value_name = "ID")]
        project: String,

        /// Raw payload: 12 `|`-separated fields
        payload: String,
    },

    /// Validate a QR payload and register the attendance event
    Mark {
        /// Project currently open
        #[arg(long, value_name = "ID")]
        project: String,

        /// Attendance type: 1/in1, 2/out1, 3/in2, 4/out2
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        kind: String,

        /// Raw payload: 12 `|`-separated fields
        payload: String,

        /// Register at this moment instead of now ("dd/MM/yyyy HH:mm:ss")
        #[arg(long, value_name = "DATETIME")]
        at: Option<String>,
    },

    /// Show the attendance table of a project for one day
    Attendance {
        #[arg(long, value_name = "ID")]
        project: String,

        /// Day (YYYY-MM-DD); default today
        #[arg(long)]
        date: Option<String>,

        /// Filter by area id
        #[arg(long, default_value = "")]
        area: String,

        /// Filter by role (cargo) id
        #[arg(long, default_value = "")]
        role: String,

        /// Also write the rows to this file
        #[arg(long, value_name = "FILE")]
        export: Option<String>,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Overwrite the export file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
