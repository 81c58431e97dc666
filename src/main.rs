//! Word Builder - CLI
//!
//! Word-building game with TUI and CLI modes, backed by a trie or suffix-array
//! dictionary index.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use word_builder::{
    commands::{BenchmarkConfig, lookup_fragment, run_benchmark, run_simple},
    core::{IndexType, WordIndex},
    engine::{Engine, EngineConfig},
    output::{print_benchmark_result, print_lookup_result},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_builder",
    about = "Build words one letter at a time, on either side",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Index: auto (default), trie, suffix-array
    #[arg(short, long, global = true, default_value = "auto")]
    index: String,

    /// Partitions of the embedded scan (default: available parallelism)
    #[arg(long, global = true)]
    workers: Option<usize>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show what the index knows about a fragment
    Lookup {
        /// Letters to look up
        fragment: String,

        /// Maximum words listed per match kind
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Benchmark transition latency over random games
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "50")]
        games: usize,

        /// Transitions per game
        #[arg(short = 's', long, default_value = "12")]
        max_steps: usize,

        /// Seed for the move generator
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the corpus based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": load a custom word list from file
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    use word_builder::wordlists::loader::load_from_file;

    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to load word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_words(&cli.wordlist)?;
    let index = IndexType::from_name(&cli.index, &words);
    tracing::info!("using {} index over {} words", index.name(), index.word_count());

    let config = cli.workers.map_or_else(EngineConfig::default, EngineConfig::with_workers);
    let engine = Engine::with_config(&index, config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(engine),
        Commands::Simple => run_simple(&engine).map_err(|e| anyhow::anyhow!(e)),
        Commands::Lookup { fragment, limit } => {
            run_lookup_command(&index, &fragment, limit, config.workers)
        }
        Commands::Benchmark {
            games,
            max_steps,
            seed,
        } => {
            run_benchmark_command(&engine, games, max_steps, seed);
            Ok(())
        }
    }
}

fn run_lookup_command(index: &IndexType, fragment: &str, limit: usize, workers: usize) -> Result<()> {
    let result = lookup_fragment(index, fragment, limit, workers).map_err(|e| anyhow::anyhow!(e))?;
    print_lookup_result(&result);
    Ok(())
}

fn run_benchmark_command(engine: &Engine<'_, IndexType>, games: usize, max_steps: usize, seed: u64) {
    println!(
        "Running benchmark: {games} games of up to {max_steps} transitions ({} index, {} workers)...",
        engine.dictionary().name(),
        engine.config().workers
    );

    let config = BenchmarkConfig {
        games,
        max_steps,
        seed,
        show_progress: true,
    };
    let result = run_benchmark(engine, &config);
    print_benchmark_result(&result);
}

fn run_play_command(engine: Engine<'_, IndexType>) -> Result<()> {
    use word_builder::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
