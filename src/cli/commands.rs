//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devj")]
#[command(about = "Developer journal: daily markdown entries with public sync", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Heading style for new entries (pound, underline)
        #[arg(short, long, default_value = "pound")]
        style: String,
    },

    /// Create today's entry
    New,

    /// Open the latest entry in the editor
    Edit,

    /// Print the public journal as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Send the public journal to a sync server
    Sync {
        /// Server URL (must be https; default: config url)
        #[arg(long, env = "DEVJ_URL")]
        url: Option<String>,

        /// User name (default: config user)
        #[arg(short, long, env = "DEVJ_USER")]
        user: Option<String>,

        /// Password
        #[arg(short, long, env = "DEVJ_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Write a journal JSON document out as entry directories
    Unpack {
        /// JSON document produced by 'devj export'
        file: PathBuf,

        /// Destination directory (default: current directory)
        #[arg(long, default_value = ".")]
        into: PathBuf,
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
