use clap::{Parser, Subcommand};
use journalapp::export::ExportFormat;
use journalapp::model::Field;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Returns the version string, with the git hash and commit date when built from a checkout.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "journal",
    bin_name = "journal",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Role-gated journal report for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Debug logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Data directory (session and journal.toml); also JOURNAL_DATA
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with one of the demo accounts
    #[command(display_order = 1)]
    Login { username: String, password: String },

    /// End the current session
    #[command(display_order = 2)]
    Logout,

    /// Show the current role
    #[command(display_order = 3)]
    Whoami,

    /// Show one page of the journal
    #[command(alias = "ls", display_order = 10)]
    Show {
        /// Only rows whose date, account or description match
        #[arg(short, long)]
        filter: Option<String>,

        /// Sort by a column; repeat the same column to sort descending
        #[arg(short, long, value_name = "FIELD")]
        sort: Vec<Field>,

        /// Page to show (1-based)
        #[arg(short, long)]
        page: Option<usize>,

        /// Print the window as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the whole journal
    #[command(display_order = 11)]
    Export {
        /// xlsx or pdf
        format: ExportFormat,

        /// Output directory (default: export_dir from config, else the current directory)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Interactive session reading commands from stdin
    #[command(display_order = 20)]
    Shell,

    /// Print the resolved configuration
    #[command(display_order = 30)]
    Config,
}

/// One line typed into `journal shell`.
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Redraw the table
    Show,
    /// Set the filter; no text clears it
    Filter {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Sort by a column, again to flip direction
    Sort { field: Field },
    /// Go to a page
    Page { page: usize },
    /// Start editing a row of this page
    Edit { row: NonZeroUsize },
    /// Change a field of the row being edited
    Set {
        field: Field,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Save the edit
    Save,
    /// Discard the edit
    Cancel,
    /// Delete a row of this page
    Delete { row: NonZeroUsize },
    /// Export the whole journal
    Export { format: ExportFormat },
    Login { username: String, password: String },
    Logout,
    Whoami,
    /// List shell commands
    Help,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

pub const SHELL_HELP: &str = "\
Commands:
  show                 redraw the table
  filter [TEXT]        filter rows (no text clears the filter)
  sort FIELD           sort by date, account, description, debit or credit
  page N               go to page N
  edit ROW             edit row ROW of this page
  set FIELD VALUE      change a field of the row being edited
  save | cancel        finish the edit
  delete ROW           delete row ROW of this page
  export xlsx|pdf      export the whole journal
  login USER PASS      log in
  logout | whoami      session
  help                 this list
  quit | exit          leave the shell
";
