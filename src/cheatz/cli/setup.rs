use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("CHEATZ_GIT_HASH");
    const GIT_DATE: &str = env!("CHEATZ_GIT_DATE");
    const RELEASE: &str = env!("CHEATZ_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cheatz", bin_name = "cheatz", version = get_version())]
#[command(about = "Markdown table cheatsheets on the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty cheatsheet
    #[command(alias = "n")]
    Create {
        /// Name of the sheet (defaults to the configured default-name)
        name: Option<String>,

        /// Description shown under the heading
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List cheatsheets
    #[command(alias = "ls")]
    List {
        /// Only sheets whose name or description contains this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one or more cheatsheets
    #[command(alias = "v")]
    View {
        /// Indexes (1 3 2-4) or a name
        #[arg(required = true, num_args = 1..)]
        sheets: Vec<String>,
    },

    /// Rename a cheatsheet
    Rename {
        /// Index or name of the sheet
        sheet: String,

        /// New name
        name: String,
    },

    /// Set the description of a cheatsheet
    Describe {
        /// Index or name of the sheet
        sheet: String,

        /// New description (empty clears it)
        description: String,
    },

    /// Copy one or more cheatsheets
    #[command(alias = "dup")]
    Duplicate {
        #[arg(required = true, num_args = 1..)]
        sheets: Vec<String>,
    },

    /// Permanently delete one or more cheatsheets
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        sheets: Vec<String>,
    },

    /// Add a markdown table to a cheatsheet (from --file, stdin, or the editor)
    AddTable {
        /// Index or name of the sheet
        sheet: String,

        /// Read the table from this file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Edit one table of a cheatsheet in the editor
    EditTable {
        /// Index or name of the sheet
        sheet: String,

        /// Table position (1-based)
        table: usize,
    },

    /// Remove a table from a cheatsheet
    RemoveTable {
        /// Index or name of the sheet
        sheet: String,

        /// Table position (1-based)
        table: usize,
    },

    /// Move a table to another position
    MoveTable {
        /// Index or name of the sheet
        sheet: String,

        /// Current position (1-based)
        from: usize,

        /// New position (1-based)
        to: usize,
    },

    /// Edit a whole cheatsheet as markdown in the editor
    #[command(alias = "e")]
    Edit {
        #[arg(required = true, num_args = 1..)]
        sheet: Vec<String>,
    },

    /// Import markdown files or directories (or stdin) as cheatsheets
    Import {
        /// Replace the content of this sheet instead of creating new ones
        #[arg(long)]
        into: Option<String>,

        /// Files or directories to import (reads stdin when omitted)
        paths: Vec<PathBuf>,
    },

    /// Print cheatsheets as markdown (all of them when none are given)
    Export {
        /// Write a .tar.gz of markdown files to the current directory instead
        #[arg(long)]
        archive: bool,

        sheets: Vec<String>,
    },

    /// Copy cheatsheets as markdown to the system clipboard
    Copy {
        #[arg(required = true, num_args = 1..)]
        sheets: Vec<String>,
    },

    /// Print the storage path of one or more cheatsheets
    Path {
        #[arg(required = true, num_args = 1..)]
        sheets: Vec<String>,
    },

    /// Initialize the store
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (import-extensions, default-name)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Command groups for the top-level help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Sheet,
    Table,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Sheet => "Cheatsheet Commands:",
            CommandGroup::Table => "Table Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "create" | "list" | "view" | "rename" | "describe" | "duplicate" | "delete"
            | "edit" => Some(CommandGroup::Sheet),
            "add-table" | "edit-table" | "remove-table" | "move-table" => {
                Some(CommandGroup::Table)
            }
            "import" | "export" | "copy" | "path" => Some(CommandGroup::Data),
            "init" | "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Sheet,
            CommandGroup::Table,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

/// Top-level help with subcommands listed by group.
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("cheatz {version}\n"));
    output.push_str("Markdown table cheatsheets on the command line\n\n");
    output.push_str("Usage: cheatz [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();
    for group in CommandGroup::all() {
        let in_group: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();
        if in_group.is_empty() {
            continue;
        }

        output.push('\n');
        output.push_str(group.heading());
        output.push('\n');
        for sc in in_group {
            let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
            output.push_str(&format!("  {:<14} {}\n", sc.get_name(), about));
        }
    }

    output.push_str("\nOptions:\n");
    output.push_str("  -v, --verbose    Verbose output (debug logging)\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");
    output
}
