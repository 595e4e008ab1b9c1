//! jsonnode CLI.
//!
//! Loads JSON from a file or stdin and prints its canonical form, checks
//! validity, or runs a conformance corpus.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use json_node::conformance::CorpusRunner;
use json_node::{load_with_options, print, Document, Error, ParseOptions};
use log::info;
use serde_json::json;

#[derive(Parser)]
#[command(name = "jsonnode")]
#[command(about = "JSON loader and canonical printer", long_about = None)]
#[command(version)]
struct Cli {
    /// Keep legacy leniency: misplaced signs, loose object punctuation, trailing content
    #[arg(long, global = true)]
    compatible: bool,

    /// Maximum nesting depth for arrays/objects
    #[arg(long, global = true)]
    max_depth: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of a document
    Print {
        /// Input file (stdin if omitted)
        path: Option<PathBuf>,
    },

    /// Validate a document and report the result as JSON
    Check {
        /// Input file (stdin if omitted)
        path: Option<PathBuf>,
    },

    /// Run a conformance corpus file
    Corpus {
        /// Corpus JSON file
        path: PathBuf,
    },

    /// Show version information
    Version,
}

impl Cli {
    fn options(&self) -> ParseOptions {
        let options = if self.compatible {
            ParseOptions::compatible()
        } else {
            ParseOptions::strict()
        };
        match self.max_depth {
            Some(depth) => options.with_max_nesting_depth(depth),
            None => options,
        }
    }
}

fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    match path {
        Some(path) => Ok(Box::new(File::open(path)?)),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn read_document(path: Option<&Path>, options: ParseOptions) -> Result<Document, Error> {
    let input = open_input(path)?;
    load_with_options(input, options)
}

fn exit_code_for(err: &Error) -> ExitCode {
    match err {
        Error::Io(_) => ExitCode::from(2),
        Error::Parsing(_) | Error::TypeMismatch(_) => ExitCode::from(1),
    }
}

fn cmd_print(path: Option<&Path>, options: ParseOptions) -> ExitCode {
    let result = read_document(path, options).and_then(|doc| {
        let mut stdout = io::stdout().lock();
        print(&doc, &mut stdout)?;
        writeln!(stdout)?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn cmd_check(path: Option<&Path>, options: ParseOptions) -> ExitCode {
    match read_document(path, options) {
        Ok(doc) => {
            info!("valid {} document", doc.root().type_name());
            println!("{}", json!({ "ok": true }));
            ExitCode::SUCCESS
        }
        Err(Error::Parsing(e)) => {
            println!(
                "{}",
                json!({ "err": { "name": e.name(), "message": e.to_string() } })
            );
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn cmd_corpus(path: &Path) -> ExitCode {
    let runner = match CorpusRunner::load(path) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    info!("running {} vectors from {}", runner.vector_count(), path.display());
    let results = runner.run_all();

    for (id, expected, actual) in results.failures() {
        println!("FAIL {} - expected: {}, actual: {}", id, expected, actual);
    }
    println!("{}", results.summary());

    if results.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let options = cli.options();

    match &cli.command {
        Some(Commands::Print { path }) => cmd_print(path.as_deref(), options),
        Some(Commands::Check { path }) => cmd_check(path.as_deref(), options),
        Some(Commands::Corpus { path }) => cmd_corpus(path),
        Some(Commands::Version) => {
            println!("jsonnode v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        None => {
            println!("jsonnode v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
            ExitCode::SUCCESS
        }
    }
}
