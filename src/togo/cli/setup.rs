use clap::{Parser, Subcommand};
use once_cell::sync::Lazy;
use std::path::PathBuf;

/// `0.3.0` for release builds, `0.3.0@abc1234 2024-01-15 14:30` otherwise.
static VERSION: Lazy<String> = Lazy::new(|| {
    let hash = env!("GIT_HASH");
    match (env!("IS_RELEASE"), hash) {
        ("true", _) | (_, "") => env!("CARGO_PKG_VERSION").to_string(),
        _ => format!(
            "{}@{} {}",
            env!("CARGO_PKG_VERSION"),
            hash,
            env!("GIT_COMMIT_DATE")
        ),
    }
});

#[derive(Parser, Debug)]
#[command(name = "togo", bin_name = "togo", version = VERSION.as_str())]
#[command(about = "Manage a todo.txt task list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Todo file to use (overrides config)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Archive file for completed todos (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub done_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List todos
    #[command(visible_aliases = ["l", "list"])]
    Ls {
        /// Only show todos containing any of these terms
        queries: Vec<String>,

        /// List the archive instead of the todo file
        #[arg(short, long)]
        done: bool,
    },

    /// Add a todo
    #[command(visible_alias = "a")]
    Add {
        /// Todo text, e.g. `2021-01-01 call mom +home @phone`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Mark a todo as done, or undone again
    #[command(visible_aliases = ["x", "complete"])]
    Do {
        /// Todo number as shown by `ls`
        position: usize,
    },

    /// Remove a todo
    #[command(visible_aliases = ["remove", "delete"])]
    Rm {
        /// Todo number as shown by `ls`
        position: usize,
    },

    /// Move all completed todos to the archive file
    #[command(visible_alias = "arch")]
    Archive,

    /// Get or set configuration
    Config {
        /// Configuration key (todo-file, done-file, prepend-date, priority)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create an empty todo file
    Init,
}
