//! json-digest CLI - canonical JSON, digests and Merkle roots from the command line
//!
//! Reads a JSON document from a file or stdin. Designed to be scripted, so
//! results are printed as JSON by default.

use clap::{Parser, Subcommand};
use json_digest::{
    canonicalize, digest, Algorithm, Config, Digester, HashEncoding, MerkleHash, MerkleHasher,
    MerkleTree, NativeDigester, Tree,
};
use std::cmp::Ordering;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "json-digest")]
#[command(about = "Canonical JSON, digests and Merkle hashes of JSON documents")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Path to the config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical (RFC 8785) form of a document
    Canon {
        /// Input file (reads stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Digest the canonical form of a document
    Digest {
        /// Hash algorithm, e.g. SHA-256 or SHA3-256
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
        /// Output encoding: hex or base85
        #[arg(short, long)]
        encoding: Option<HashEncoding>,
        /// Input file (reads stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Compute the Merkle root of a document
    Merkle {
        /// Hash algorithm, e.g. SHA-256 or SHA3-256
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
        /// Output encoding: hex or base85
        #[arg(short, long)]
        encoding: Option<HashEncoding>,
        /// Hash sibling subtrees concurrently
        #[arg(long)]
        concurrent: bool,
        /// Input file (reads stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Compare two hashes written as "<ALGORITHM> <hex>"
    Compare {
        left: String,
        right: String,
    },

    /// List supported algorithms
    Algorithms,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let digester = NativeDigester::new();

    match cli.command {
        Commands::Canon { file } => {
            let tree = read_tree(file.as_deref())?;
            let canon = canonicalize(&tree);
            match cli.format {
                OutputFormat::Json => output(
                    &cli.format,
                    &serde_json::json!({
                        "canonical": canon
                    }),
                ),
                OutputFormat::Text => println!("{}", canon),
            }
        }

        Commands::Digest {
            algorithm,
            encoding,
            file,
        } => {
            let algorithm = algorithm.unwrap_or(config.algorithm);
            let encoding = encoding.unwrap_or(config.encoding);
            let tree = read_tree(file.as_deref())?;
            let bytes = digest(&digester, algorithm, &tree).await?;
            output(
                &cli.format,
                &serde_json::json!({
                    "algorithm": algorithm,
                    "encoding": encoding,
                    "digest": encoding.encode(&bytes)
                }),
            );
        }

        Commands::Merkle {
            algorithm,
            encoding,
            concurrent,
            file,
        } => {
            let algorithm = algorithm.unwrap_or(config.algorithm);
            let encoding = encoding.unwrap_or(config.encoding);
            let tree = MerkleTree::from(read_tree(file.as_deref())?);
            let root = MerkleHasher::new(&digester, algorithm)
                .concurrent(concurrent || config.concurrent)
                .hash(&tree)
                .await?;
            output(
                &cli.format,
                &serde_json::json!({
                    "algorithm": algorithm,
                    "encoding": encoding,
                    "root": encoding.encode_hash(&root)
                }),
            );
        }

        Commands::Compare { left, right } => {
            let left: MerkleHash = left.parse()?;
            let right: MerkleHash = right.parse()?;
            match left.compare_to(&right) {
                Ok(ordering) => {
                    let ordering = match ordering {
                        Ordering::Less => "less",
                        Ordering::Equal => "equal",
                        Ordering::Greater => "greater",
                    };
                    output(
                        &cli.format,
                        &serde_json::json!({
                            "ordering": ordering,
                            "equal": left == right
                        }),
                    );
                }
                Err(e) => {
                    output(
                        &cli.format,
                        &serde_json::json!({
                            "status": "error",
                            "message": e.to_string()
                        }),
                    );
                    std::process::exit(1);
                }
            }
        }

        Commands::Algorithms => {
            let items: Vec<_> = Algorithm::ALL
                .iter()
                .filter(|a| digester.supports(**a))
                .map(|a| {
                    serde_json::json!({
                        "name": a.as_str(),
                        "bytes": a.output_len()
                    })
                })
                .collect();
            output(
                &cli.format,
                &serde_json::json!({
                    "count": items.len(),
                    "algorithms": items
                }),
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Read and parse a JSON document from a file, or stdin if no path is given
fn read_tree(path: Option<&Path>) -> anyhow::Result<Tree> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let value: serde_json::Value = serde_json::from_str(&text)?;
    Ok(Tree::from(value))
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", value);
        }
        OutputFormat::Text => {
            println!(
                "{}",
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            );
        }
    }
}
