use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use crossterm::style::Stylize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use wordfreq_core::commands;
use wordfreq_core::core::types::{DEFAULT_RESULTS_PATH, DEFAULT_TOP};
use wordfreq_core::{CountOptions, Decoding};

/// Word frequency counts with a reviewable history of past runs.
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count the most frequent words in a file
    #[command(alias = "word_count")]
    WordCount {
        /// Filepath to count words from
        #[arg(long)]
        filepath: PathBuf,

        /// Filepath containing list of stopwords
        #[arg(long)]
        stopword_path: Option<PathBuf>,

        /// Whether or not different inflections count as the same word
        #[arg(long, action = ArgAction::Set, default_value = "false", value_parser = BoolishValueParser::new())]
        word_stems: bool,

        /// Enable saving results for later review
        #[arg(long, action = ArgAction::Set, default_value = "true", value_parser = BoolishValueParser::new())]
        save: bool,

        /// Path to the results file
        #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
        results_path: PathBuf,

        /// Number of words to report
        #[arg(long, default_value_t = DEFAULT_TOP)]
        top: usize,
    },
    /// Print previously saved results
    Review {
        /// Path to the results file
        #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
        results_path: PathBuf,
    },
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    // Usage errors exit here through clap, before any file is touched.
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Command::WordCount {
            filepath,
            stopword_path,
            word_stems,
            save,
            results_path,
            top,
        } => {
            let options = CountOptions {
                filepath,
                stopword_path,
                word_stems,
                save,
                results_path,
                top,
                decoding: Decoding::Lossy,
            };
            commands::word_count(&options, &mut out).map(|_| ())
        }
        Command::Review { results_path } => commands::review(&results_path, &mut out),
    };
    let result = result.and_then(|()| out.flush().map_err(Into::into));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
