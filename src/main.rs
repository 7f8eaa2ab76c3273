//! Command-line front end for the bigram spell corrector.
//!
//! # Startup
//!
//! 1. Read the configuration (confy) and apply command-line overrides
//! 2. Load the persisted model, or train one from the corpus and save it
//! 3. Build the candidate index and run the requested command
//!
//! Results go to stdout (JSON for corrections); status goes to the log on
//! stderr, controlled by `-v` or `RUST_LOG`.

use bigram_autocorrect::bootstrap;
use bigram_autocorrect::config::Config;
use bigram_autocorrect::corrector::Corrector;
use bigram_autocorrect::dictionary;
use bigram_autocorrect::shared::SharedCorrector;
use bigram_autocorrect::store;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Interactive command that rebuilds the model and swaps it in.
const RELOAD_COMMAND: &str = ":reload";

#[derive(Parser, Debug)]
#[command(name = "bigram-autocorrect")]
#[command(about = "Context-aware spell corrector trained on a text corpus")]
#[command(version)]
struct Args {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Persisted model file
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Directory of plain-text training files
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// Largest edit distance considered for a correction
    #[arg(long)]
    max_distance: Option<i32>,

    /// Write the effective configuration (file values plus overrides) back to the config file
    #[arg(long)]
    save_config: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Correct the given text, or every stdin line when none is given
    Correct {
        text: Vec<String>,
    },
    /// Show ranked candidates for one token
    Suggest {
        token: String,

        /// Preceding word used as context
        #[arg(long)]
        after: Option<String>,

        /// Maximum number of candidates to print
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
    /// Retrain from the corpus and overwrite the saved model
    Train,
    /// Build the model from plain-text count files and save it
    Import {
        /// `word count` lines
        #[arg(long)]
        unigrams: PathBuf,

        /// `word1 word2 count` lines
        #[arg(long)]
        bigrams: Option<PathBuf>,
    },
    /// Write the model as plain-text count files
    Export {
        #[arg(long)]
        unigrams: PathBuf,

        #[arg(long)]
        bigrams: PathBuf,
    },
    /// Print statistics of the saved model (never trains)
    Stats,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::load(args.config.as_deref());
    if let Some(model) = args.model {
        config.model_path = model;
    }
    if let Some(corpus) = args.corpus {
        config.corpus_dir = corpus;
    }
    if let Some(max_distance) = args.max_distance {
        config.max_edit_distance = max_distance;
    }

    if args.save_config {
        if let Err(err) = config.save(args.config.as_deref()) {
            log::error!("Failed to save config: {err}");
        }
    }

    match args.command.unwrap_or(Command::Correct { text: Vec::new() }) {
        Command::Correct { text } => {
            let corrector = bootstrap::build_corrector(&config)?;
            if text.is_empty() {
                run_interactive(SharedCorrector::new(corrector), &config)?;
            } else {
                print_json(&corrector.respond(&text.join(" ")))?;
            }
        }
        Command::Suggest {
            token,
            after,
            limit,
        } => {
            let corrector = bootstrap::build_corrector(&config)?;
            let token = token.to_lowercase();
            let after = after.map(|word| word.to_lowercase());
            let suggestions = corrector.suggest(&token, after.as_deref());
            let suggestions: Vec<_> = suggestions.into_iter().take(limit).collect();
            print_json(&suggestions)?;
        }
        Command::Train => {
            let model = bootstrap::train_and_save(&config)?;
            println!(
                "Trained {} words, {} pairs",
                model.vocabulary_len(),
                model.bigram_len()
            );
        }
        Command::Import { unigrams, bigrams } => {
            let model = dictionary::load_files(&unigrams, bigrams.as_deref())?;
            store::save_to_disk(&model, &config.model_path)?;
            println!(
                "Imported {} words, {} pairs into {}",
                model.vocabulary_len(),
                model.bigram_len(),
                config.model_path.display()
            );
        }
        Command::Export { unigrams, bigrams } => {
            let model = store::load_from_disk(&config.model_path)?;
            dictionary::save_files(&model, &unigrams, &bigrams)?;
        }
        Command::Stats => {
            let model = store::load_from_disk(&config.model_path)?;
            println!("model:  {}", config.model_path.display());
            println!("words:  {}", model.vocabulary_len());
            println!("pairs:  {}", model.bigram_len());
            println!("tokens: {}", model.total_tokens());
        }
    }

    Ok(())
}

/// Correct stdin line by line until EOF. The `:reload` line rebuilds the
/// model and publishes it without interrupting correction.
fn run_interactive(shared: SharedCorrector, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == RELOAD_COMMAND {
            match bootstrap::load_or_train(config) {
                Ok(model) => {
                    shared.publish(Corrector::new(model, config.settings()));
                }
                Err(err) => log::error!("Reload failed, keeping current model: {err}"),
            }
            continue;
        }
        print_json(&shared.respond(&line))?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
