//! CLI tool to tokenize and check text files.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use textscan_rs::{LexOptions, tokenize_with};

#[derive(Parser)]
#[command(name = "textscan")]
#[command(about = "Split text files into primitive tokens")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every token as `line:column<TAB>kind<TAB>text`
    Tokens {
        /// Leave out whitespace and newline tokens
        #[arg(long)]
        no_trivia: bool,

        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Check that file(s) tokenize without errors
    Check {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let (files, options, print) = match cli.command {
        Command::Tokens { no_trivia, files } => {
            (files, LexOptions::default().keep_trivia(!no_trivia), true)
        }
        Command::Check { files } => (files, LexOptions::default(), false),
    };

    let mut had_error = false;

    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                had_error = true;
                continue;
            }
        };

        tracing::debug!(path = %path.display(), bytes = content.len(), "scanning");

        match tokenize_with(&content, &options) {
            Ok(tokens) if print => {
                for token in &tokens {
                    println!("{}\t{}\t{:?}", token.start(), token.kind(), token.text());
                }
            }
            Ok(tokens) => {
                eprintln!("{}: ok ({} tokens)", path.display(), tokens.len());
            }
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Install a stderr subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}
