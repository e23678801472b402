//! ntle - CLI
//!
//! Terminal word-guessing game with a full-screen UI and a line mode.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use ntle::{
    commands::{SimpleGame, run_check, run_simple},
    config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, FetchPolicy, GameConfig},
    logging::{LogTarget, init_logging},
    word_source::{ConfiguredSource, DEFAULT_BASE_URL, HttpWordSource, ListWordSource},
    wordlists::{AcceptAll, Dictionary, WordList, loader::load_from_file},
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "ntle",
    about = "Guess the secret word in a limited number of tries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Guesses per game
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Where secret words come from
    #[arg(long, global = true, value_enum, default_value_t = SourceKind::Local)]
    source: SourceKind,

    /// Base URL of the random word service (remote source)
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    source_url: String,

    /// Secret word list file, one word per line (local source)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Dictionary of accepted guesses, one word per line
    #[arg(short = 'd', long, global = true, conflicts_with = "no_dictionary")]
    dictionary: Option<PathBuf>,

    /// Accept any guess of the right length
    #[arg(long, global = true)]
    no_dictionary: bool,

    /// Timeout for a single word fetch, in seconds
    #[arg(long, global = true, default_value_t = 5)]
    timeout_secs: u64,

    /// Retries after a failed word fetch
    #[arg(long, global = true, default_value_t = 3)]
    retries: u32,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log level or filter directives; RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen game (default)
    Play,

    /// Line-mode game without the TUI
    Simple,

    /// Show the feedback for one guess against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess to evaluate
        guess: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    /// Pick from the bundled answers or --words
    Local,
    /// Ask the random word service
    Remote,
}

fn build_dictionary(cli: &Cli) -> Result<Arc<dyn Dictionary>> {
    if cli.no_dictionary {
        return Ok(Arc::new(AcceptAll));
    }

    let words = match &cli.dictionary {
        Some(path) => WordList::from_words(
            load_from_file(path)
                .with_context(|| format!("failed to read dictionary {}", path.display()))?,
        ),
        None if cli.word_length == DEFAULT_WORD_LENGTH => WordList::embedded(),
        None => bail!(
            "no bundled dictionary for {}-letter words; pass --dictionary or --no-dictionary",
            cli.word_length
        ),
    };

    if words.count_of_length(cli.word_length) == 0 {
        bail!(
            "dictionary has no {}-letter words; pass another --dictionary or --no-dictionary",
            cli.word_length
        );
    }
    Ok(Arc::new(words))
}

fn build_source(cli: &Cli, policy: &FetchPolicy) -> Result<ConfiguredSource> {
    Ok(match cli.source {
        SourceKind::Remote => ConfiguredSource::Remote(
            HttpWordSource::new(cli.source_url.as_str(), policy.timeout())
                .context("failed to build HTTP client")?,
        ),
        SourceKind::Local => {
            let list = match &cli.words {
                Some(path) => ListWordSource::from_file(path)
                    .with_context(|| format!("failed to read word list {}", path.display()))?,
                None => ListWordSource::embedded(),
            };
            if list.count_of_length(cli.word_length) == 0 {
                bail!(
                    "no {}-letter secret words available; pass --words or --source remote",
                    cli.word_length
                );
            }
            ConfiguredSource::Local(list)
        }
    })
}

/// Validated settings shared by both game front ends
fn game_setup(
    cli: &Cli,
) -> Result<(GameConfig, FetchPolicy, Arc<dyn Dictionary>, ConfiguredSource)> {
    let config = GameConfig::new(cli.word_length, cli.max_attempts)?;
    let defaults = FetchPolicy::default();
    let policy = FetchPolicy::new(
        Duration::from_secs(cli.timeout_secs),
        cli.retries,
        defaults.initial_backoff(),
        defaults.max_backoff(),
    )?;
    let dictionary = build_dictionary(cli)?;
    let source = build_source(cli, &policy)?;

    tracing::info!(
        word_length = config.word_length(),
        max_attempts = config.max_attempts(),
        source = ?cli.source,
        "starting"
    );
    Ok((config, policy, dictionary, source))
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        // The TUI owns the screen
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    init_logging(&cli.log_level, &log_target).context("failed to set up logging")?;

    match command {
        Commands::Play => run_play_command(&cli).await,
        Commands::Simple => run_simple_command(&cli).await,
        Commands::Check { secret, guess } => {
            run_check(&secret, &guess, &mut io::stdout())?;
            Ok(())
        }
    }
}

async fn run_simple_command(cli: &Cli) -> Result<()> {
    let (config, policy, dictionary, source) = game_setup(cli)?;
    let game = SimpleGame {
        config,
        dictionary,
        policy,
    };

    run_simple(&game, &source, &mut io::stdin().lock(), &mut io::stdout()).await?;
    Ok(())
}

async fn run_play_command(cli: &Cli) -> Result<()> {
    use ntle::interactive::{App, run_tui};

    let (config, policy, dictionary, source) = game_setup(cli)?;
    let app = App::new(config, dictionary, source, policy);
    run_tui(app).await
}
