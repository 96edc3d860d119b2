use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use mongosql::{TrailingTokens, Translator, TranslatorConfig};

const HISTORY_FILE: &str = ".msql_history";

#[derive(Parser)]
#[command(author, version, about = "msql - translate SQL SELECT statements into MongoDB queries")]
struct Cli {
    /// Name of the database handle in rendered queries
    #[arg(short, long, default_value = "db")]
    database: String,

    /// Ignore tokens left over after a complete statement
    #[arg(long)]
    lenient: bool,

    /// Print the parsed syntax tree as JSON instead of the query
    #[arg(long)]
    ast: bool,

    /// Log translation steps (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell
    Shell,

    /// Translate a single statement
    Query {
        /// SQL statement to translate
        query: String,
    },

    /// Translate every statement in a file, one per line
    File {
        /// Path of the statement file
        path: PathBuf,
    },
}

/// Translator plus the output mode chosen on the command line
struct Session {
    translator: Translator,
    ast: bool,
}

impl Session {
    fn new(cli: &Cli) -> Self {
        let trailing_tokens = if cli.lenient {
            TrailingTokens::Ignore
        } else {
            TrailingTokens::Reject
        };
        let config = TranslatorConfig::default()
            .with_database(cli.database.clone())
            .with_trailing_tokens(trailing_tokens);

        Session {
            translator: Translator::new(config),
            ast: cli.ast,
        }
    }

    fn render(&self, sql: &str) -> Result<String> {
        if self.ast {
            let statement = self.translator.parse(sql)?;
            Ok(serde_json::to_string_pretty(&statement)?)
        } else {
            Ok(self.translator.translate(sql)?)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_shell(session: &Session) -> Result<()> {
    println!("Welcome to msql. Type 'help' for assistance or 'exit' to quit.");

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if rl.load_history(HISTORY_FILE).is_err() {
        info!("No history loaded from {}", HISTORY_FILE);
    }

    loop {
        match rl.readline("msql> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => print_help(),
                    _ => match session.render(line) {
                        Ok(output) => println!("{}", output),
                        Err(err) => println!("Error: {}", err),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

/// Translate each statement line of `path`; returns whether all succeeded.
fn run_file(session: &Session, path: &Path) -> Result<bool> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read statements from {}", path.display()))?;

    let mut all_ok = true;
    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with("--") {
            continue;
        }
        match session.render(line) {
            Ok(output) => println!("{} -> {}", line, output),
            Err(err) => {
                all_ok = false;
                println!("{} -> error: {}", line, err);
            }
        }
    }
    Ok(all_ok)
}

fn print_help() {
    println!("Supported statements:");
    println!("  SELECT * FROM <table>                 - Find every document");
    println!("  SELECT a, b FROM <table>              - Project fields a and b");
    println!("  ... OFFSET <n>                        - Skip the first n documents");
    println!("  ... LIMIT <m>                         - Return at most m documents");
    println!();
    println!("Names containing spaces can be quoted with \", ' or `.");
    println!("WHERE clauses are recognized but not translated yet.");
    println!();
    println!("Other commands:");
    println!("  help                                  - Display this help message");
    println!("  exit                                  - Exit the shell");
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let session = Session::new(&cli);

    match &cli.command {
        Some(Commands::Query { query }) => match session.render(query) {
            Ok(output) => println!("{}", output),
            Err(err) => {
                eprintln!("Error translating query: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        },
        Some(Commands::File { path }) => {
            if !run_file(&session, path)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Shell) | None => run_shell(&session)?,
    }

    Ok(ExitCode::SUCCESS)
}
