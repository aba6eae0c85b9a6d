mod cmd_locate;
mod cmd_reference;
mod cmd_show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scribe", version, about = "Inspect bot conversation transcripts")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the activities of a transcript file
    Show {
        /// Path to a .transcript file
        path: PathBuf,
        /// Print the parsed activities as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the conversation reference derived from one activity
    Reference {
        /// Path to a .transcript file
        path: PathBuf,
        /// Zero-based activity index
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Resolve the transcript path for a test
    Locate {
        /// Test class or module name (only the last segment is used)
        #[arg(long = "class")]
        class_name: String,
        /// Test name
        #[arg(long = "test")]
        test_name: String,
        /// Transcripts root (overrides TRANSCRIPTS_ROOT_FOLDER)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Show { path, json } => cmd_show::execute(&path, json),
        Command::Reference { path, index } => cmd_reference::execute(&path, index),
        Command::Locate {
            class_name,
            test_name,
            root,
        } => cmd_locate::execute(&class_name, &test_name, root),
    }
}
