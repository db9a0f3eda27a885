//! Command-line interface.

use clap::{ArgAction, Parser, Subcommand};

use crate::{logging, server};

#[derive(Parser)]
#[command(name = "mutants", version, about = "Mutant DNA detection service")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a DNA matrix given as one row per argument
    Check {
        /// Rows of the square DNA matrix, e.g. ATGCGA CAGTGC ...
        #[arg(required = true)]
        rows: Vec<String>,
    },
    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

/// Parse arguments and dispatch to the selected command.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Check { rows } => check(&rows),
        Command::Serve { host, port } => server::serve(&host, port).await,
    }
}

/// Classify and exit: 0 for mutant, 1 for human, 2 for invalid input.
#[allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]
fn check(rows: &[String]) -> ! {
    match mutants::identify_rows(rows) {
        Ok(true) => {
            println!("mutant");
            std::process::exit(0);
        }
        Ok(false) => {
            println!("human");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
