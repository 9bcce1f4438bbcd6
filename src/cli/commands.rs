//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "journ")]
#[command(about = "Terminal journal with private, per-user entries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create an account
    Signup {
        /// Username (case-sensitive)
        username: String,

        /// Password (prompted twice when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in as an existing user
    Login {
        /// Username (case-sensitive)
        username: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log out of the current session
    Logout,

    /// Show the logged-in username
    Whoami,

    /// Add a journal entry
    Add {
        /// Entry title
        title: String,

        /// Entry content (opens the configured editor when omitted)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// List your entries
    List,

    /// Search your entries by keyword
    Search {
        /// Case-insensitive keyword matched against title and content
        keyword: String,
    },

    /// Delete one entry by its number from 'journ list'
    Delete {
        /// Entry number as shown by 'journ list' (starting at 1)
        number: usize,
    },

    /// Delete your account and every entry it owns
    DeleteAccount {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
