//! litjson CLI.
//!
//! Parses a document and prints the outcome as one line of JSON.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use litjson::conformance::{CorpusRunner, OutcomeRecord, TestResult};
use litjson::error::{KIND_NAMES, OUTCOME_NAMES};
use litjson::json::{parse_with_options, Options};

/// Exit code for an input that failed to parse or a corpus with failures.
const EXIT_FAILURE: u8 = 1;
/// Exit code for I/O and usage problems.
const EXIT_IO: u8 = 2;

#[derive(Parser)]
#[command(name = "litjson")]
#[command(about = "Parse JSON scalars and report coded outcomes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document (from INPUT, or stdin when omitted)
    Parse {
        /// Document text
        input: Option<String>,

        /// Report a malformed leading zero as PARSE_INVALID_VALUE
        #[arg(long)]
        strict: bool,
    },

    /// Print the kind and outcome name tables
    Names,

    /// Run a conformance corpus file
    Corpus {
        /// Path to the corpus JSON
        path: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Parse { input, strict }) => run_parse(input, strict),
        Some(Commands::Names) => {
            let names = serde_json::json!({
                "kinds": KIND_NAMES,
                "outcomes": OUTCOME_NAMES,
            });
            println!("{}", names);
            ExitCode::SUCCESS
        }
        Some(Commands::Corpus { path }) => run_corpus(&path),
        Some(Commands::Version) => {
            println!("litjson v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        None => {
            println!("litjson v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_parse(input: Option<String>, strict: bool) -> ExitCode {
    let input = match input {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                error!("failed to read stdin: {}", e);
                return ExitCode::from(EXIT_IO);
            }
            buf
        }
    };

    let options = if strict {
        Options::strict()
    } else {
        Options::compatible()
    };
    let result = parse_with_options(&input, options);
    let record = OutcomeRecord::from_result(&result);

    match serde_json::to_string(&record) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            error!("failed to encode outcome: {}", e);
            return ExitCode::from(EXIT_IO);
        }
    }

    if record.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FAILURE)
    }
}

fn run_corpus(path: &Path) -> ExitCode {
    let runner = match CorpusRunner::load(path) {
        Ok(runner) => runner,
        Err(e) => {
            error!(path = %path.display(), "{}", e);
            return ExitCode::from(EXIT_IO);
        }
    };
    info!(
        vectors = runner.vector_count(),
        version = %runner.manifest().version,
        "loaded corpus"
    );

    let results = runner.run_all();
    for (id, result) in results.failures() {
        if let TestResult::Fail { expected, actual } = result {
            println!("FAIL {} - expected: {}, actual: {}", id, expected, actual);
        }
    }
    println!("{}", results.summary());

    if results.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FAILURE)
    }
}
