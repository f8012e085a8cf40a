use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use sufx::config::{AppConfig, InputSource, Mode, RunConfig};
use sufx::output;
use sufx::query::QueryExecutor;
use sufx::utils::Spinner;

#[derive(Parser)]
#[command(name = "sufx")]
#[command(about = "Exact-match queries over a reference sequence with suffix tries and suffix arrays")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a suffix trie and print the longest match length of each query
    Trie(InputArgs),
    /// Build a suffix array and print the insertion index of each query
    Array {
        #[command(flatten)]
        input: InputArgs,

        /// Also report whether each query occurs, and how often
        #[arg(long)]
        verify: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Reference sequence given literally
    #[arg(long, conflicts_with = "reference")]
    string: Option<String>,

    /// Reference sequence file (FASTA); the first record is indexed
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Query sequences
    #[arg(long, num_args = 1..)]
    query: Vec<String>,

    /// Config file (defaults to the user config file, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Terminal character appended before construction
    #[arg(long, value_parser = parse_sentinel)]
    sentinel: Option<u8>,

    /// Print structure statistics after the results
    #[arg(long)]
    stats: bool,

    /// Disable colored statistics
    #[arg(long)]
    no_color: bool,

    /// Print timing and size diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Accept one ASCII character, or `\0` for NUL
fn parse_sentinel(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        b"\\0" => Ok(0),
        _ => Err(format!("sentinel must be a single ASCII character, got {:?}", s)),
    }
}

impl InputArgs {
    fn into_run_config(self, mode: Mode, verify: bool) -> Result<RunConfig> {
        let mut app = AppConfig::load(self.config.as_deref())?;

        if let Some(sentinel) = self.sentinel {
            app.sentinel = sentinel;
            if mode == Mode::Trie {
                app.trie_sentinel = true;
            }
        }
        if verify {
            app.verify_matches = true;
        }

        Ok(RunConfig {
            mode,
            source: InputSource::from_args(self.string, self.reference)?,
            queries: self.query,
            app,
            stats: self.stats,
            color: !self.no_color,
            verbose: self.verbose,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.command {
        Commands::Trie(input) => input.into_run_config(Mode::Trie, false)?,
        Commands::Array { input, verify } => input.into_run_config(Mode::Array, verify)?,
    };

    run(&config)
}

fn run(config: &RunConfig) -> Result<()> {
    let sequence = config.load_sequence()?;
    if config.verbose {
        eprintln!("sufx: loaded {} bytes", sequence.len());
    }

    let what = match config.mode {
        Mode::Trie => "suffix trie",
        Mode::Array => "suffix array",
    };
    let start = Instant::now();
    let spinner = Spinner::start(&format!("Building {}...", what), config.verbose);
    let built = QueryExecutor::build(config, sequence);
    spinner.finish();
    let executor = built?;

    if config.verbose {
        eprintln!(
            "sufx: built {} in {:.1}ms",
            what,
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    let results = executor.execute_all(&config.queries);
    output::print_results(&results)?;

    if config.stats {
        output::print_stats(&executor.stats(), config.color)?;
    }

    Ok(())
}
