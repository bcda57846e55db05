pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "threader")]
#[command(about = "Re-posts linked articles as reply threads", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/threader/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read posts as JSON lines from stdin and thread every linked article
    Listen,
    /// Thread a single article under an existing post
    Convert {
        /// URL of the article
        url: String,

        /// Id of the post the thread replies to
        #[arg(long)]
        reply_to: String,

        /// Screen name used in the intro
        #[arg(long)]
        author: Option<String>,
    },
    /// Print the segments a text would be split into
    Chunk {
        /// Text file to split (default: stdin)
        path: Option<PathBuf>,
    },
}
