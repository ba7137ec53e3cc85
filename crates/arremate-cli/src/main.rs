mod commands;
mod output;

use arremate_core::extraction::DEFAULT_SKIP_PAGES;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "arremate",
    version,
    about = "Extracts and filters property lots from Caixa auction notices"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a directory of notice PDFs and update the processed-notice ledger
    Process {
        /// Directory containing downloaded notice PDFs
        notices_dir: PathBuf,

        /// Path to the processed-notice ledger store
        #[arg(short, long, default_value = "processed_notices.txt")]
        ledger: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Front-matter pages to skip before the itemized section
        #[arg(long, default_value_t = DEFAULT_SKIP_PAGES)]
        skip_pages: usize,

        /// Report accepted lots without updating the ledger
        #[arg(long)]
        dry_run: bool,
    },
    /// Parse a single notice PDF into lots, without filtering or the ledger
    Parse {
        /// Path to a notice PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Front-matter pages to skip before the itemized section
        #[arg(long, default_value_t = DEFAULT_SKIP_PAGES)]
        skip_pages: usize,

        /// Write parsed lots to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Inspect the processed-notice ledger
    Ledger {
        #[command(subcommand)]
        action: LedgerAction,
    },
}

#[derive(Subcommand)]
enum LedgerAction {
    /// List the notice names already recorded as contributing
    Show {
        /// Path to the processed-notice ledger store
        #[arg(short, long, default_value = "processed_notices.txt")]
        ledger: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            notices_dir,
            ledger,
            output,
            skip_pages,
            dry_run,
        } => commands::process::run(notices_dir, ledger, &output, skip_pages, dry_run),
        Commands::Parse {
            input_file,
            output,
            skip_pages,
            out,
        } => commands::parse::run(input_file, &output, skip_pages, out),
        Commands::Ledger { action } => match action {
            LedgerAction::Show { ledger } => commands::ledger::show(&ledger),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
