use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fuzzysum::compare::{compare, INVALID};
use fuzzysum::fuzzy_hash::DigestOptions;
use fuzzysum::matcher::{self, MatchHit};
use fuzzysum::scan::{self, ScanOptions, ScanSummary};
use fuzzysum::signature_db::{self, SignatureDb};

#[derive(Parser)]
#[command(name = "fuzzysum", version, about = "ssdeep-compatible fuzzy hashing")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct WalkArgs {
    /// Files or directories to hash
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Descend into directories
    #[arg(long, short)]
    recursive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an ssdeep listing for files, or store it as a signature database
    Hash {
        #[command(flatten)]
        walk: WalkArgs,
        /// Also record a BLAKE3 digest per file
        #[arg(long)]
        blake3: bool,
        /// Collapse runs of more than three identical digest characters
        #[arg(long)]
        elim_seq: bool,
        /// Keep the full second digest part instead of cutting it at 32 characters
        #[arg(long)]
        no_truncate: bool,
        /// Write a signature database here instead of printing a listing
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Score the similarity of two signatures (0-100)
    Compare { first: String, second: String },
    /// Match files against a database or ssdeep listing of known signatures
    Match {
        /// Signature database or ssdeep listing
        #[arg(long, short)]
        known: PathBuf,
        #[command(flatten)]
        walk: WalkArgs,
        /// Only report scores above this value
        #[arg(long, short, default_value_t = 0)]
        threshold: u32,
    },
    /// Compare a set of files with each other
    Cluster {
        #[command(flatten)]
        walk: WalkArgs,
        /// Only report scores above this value
        #[arg(long, short, default_value_t = 0)]
        threshold: u32,
    },
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("fuzzysum=warn"),
        1 => EnvFilter::new("fuzzysum=info"),
        2 => EnvFilter::new("fuzzysum=debug"),
        _ => EnvFilter::new("fuzzysum=trace"),
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_hits(hits: &[MatchHit]) {
    for hit in hits {
        println!("{} matches {} ({})", hit.path, hit.known_path, hit.score);
    }
}

fn check_failures(summary: &ScanSummary) -> anyhow::Result<()> {
    if summary.files_failed > 0 {
        bail!("{} file(s) could not be hashed", summary.files_failed);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Hash {
            walk,
            blake3,
            elim_seq,
            no_truncate,
            output,
        } => {
            let options = ScanOptions {
                recursive: walk.recursive,
                with_blake3: blake3,
                digest: DigestOptions {
                    eliminate_sequences: elim_seq,
                    no_truncate,
                },
            };
            tracing::info!(roots = walk.paths.len(), recursive = walk.recursive, "Hashing");

            let start = Instant::now();
            let report = scan::scan_paths(&walk.paths, &options).await?;
            let elapsed = start.elapsed();

            match output {
                Some(output) => {
                    signature_db::write_db(&output, &SignatureDb::new(report.entries))?;

                    println!("Signature database written: {}", output.display());
                    println!("  Files hashed: {}", report.summary.files_hashed);
                    println!("  Files failed: {}", report.summary.files_failed);
                    println!("  Directories skipped: {}", report.summary.dirs_skipped);
                    println!("  Bytes hashed: {}", report.summary.bytes_hashed);
                    println!("  Time elapsed: {:.3}s", elapsed.as_secs_f64());
                }
                None => {
                    signature_db::write_text(std::io::stdout().lock(), &report.entries)?;
                }
            }
            check_failures(&report.summary)?;
        }
        Commands::Compare { first, second } => {
            let score = compare(&first, &second);
            if score == INVALID {
                bail!("Not a valid signature pair: '{first}' / '{second}'");
            }
            println!("{score}");
        }
        Commands::Match {
            known,
            walk,
            threshold,
        } => {
            let options = ScanOptions {
                recursive: walk.recursive,
                ..Default::default()
            };
            let report = matcher::match_paths(&known, &walk.paths, &options, threshold).await?;
            tracing::info!(
                known = report.known,
                hits = report.hits.len(),
                files = report.scan.files_hashed,
                "Match finished"
            );
            print_hits(&report.hits);
            check_failures(&report.scan)?;
        }
        Commands::Cluster { walk, threshold } => {
            let options = ScanOptions {
                recursive: walk.recursive,
                ..Default::default()
            };
            let report = matcher::cluster_paths(&walk.paths, &options, threshold).await?;
            tracing::info!(hits = report.hits.len(), files = report.scan.files_hashed, "Cluster finished");
            print_hits(&report.hits);
            check_failures(&report.scan)?;
        }
    }

    Ok(())
}
