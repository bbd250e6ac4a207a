use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use diverse_das::{run, Config, DaError, USAGE};

/// Count how many superkingdoms (Archaea, Bacteria, Eukaryota) each domain
/// architecture's member sequences span.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// DA membership table (header line, then DA, Domains, Collapsed_Domains, Taxa)
    membership: Option<PathBuf>,

    /// Taxonomy info table (species code, ..., accession, superkingdom)
    taxonomy: Option<PathBuf>,

    /// Only report DAs listed in this file ('#' lines are comments)
    subset: Option<PathBuf>,

    /// Write diagnostics (key counts, unresolved taxa, run summary) to stderr
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Show a spinner on stderr while classifying
    #[arg(long)]
    progress: bool,

    /// Arguments past the subset file are ignored
    #[arg(hide = true)]
    _extra: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (Some(membership), Some(taxonomy)) = (args.membership, args.taxonomy) else {
        println!("{USAGE}");
        return ExitCode::from(1);
    };

    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let config = Config {
        membership_path: membership,
        taxonomy_path: taxonomy,
        subset_path: args.subset,
        diagnostics: args.debug,
        progress: args.progress,
    };

    let stdout = io::stdout();
    match run(&config, BufWriter::new(stdout.lock())) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, DaError::Open { .. }) {
                eprintln!("{USAGE}");
            }
            ExitCode::from(1)
        }
    }
}
