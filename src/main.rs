//! radix CLI - Command line interface for radix_db
//!
//! Builds a radix tree from word lists, stores it as a record file, and
//! answers prefix queries against it. Output is JSON on stdout; logs go to
//! stderr and are filtered with `RUST_LOG`.

use clap::{Parser, Subcommand};
use radix_db::store::{read_rows, read_words};
use radix_db::{load_tree, save_tree, RadixTree, RecordFormat};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "radix")]
#[command(about = "A compressed prefix tree for strings")]
#[command(version)]
struct Cli {
    /// Path to the record file
    #[arg(short, long, default_value = "words.radix")]
    tree: PathBuf,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Record file encoding (inferred from the extension when omitted)
    #[arg(long)]
    file_format: Option<FileFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum FileFormat {
    Binary,
    Json,
}

impl From<FileFormat> for RecordFormat {
    fn from(format: FileFormat) -> Self {
        match format {
            FileFormat::Binary => RecordFormat::Binary,
            FileFormat::Json => RecordFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tree from word lists (one string per line)
    Build {
        /// Word list files
        #[arg(required = true)]
        words: Vec<PathBuf>,
    },

    /// Insert strings, creating the tree file if needed
    Add {
        /// Strings to insert
        #[arg(required = true)]
        strings: Vec<String>,
    },

    /// Check whether a string is stored
    Contains {
        /// The string to look up
        target: String,
    },

    /// Stored strings that are proper prefixes of the target
    Parents {
        /// The target string
        target: String,
    },

    /// Stored strings that extend the target
    Kids {
        /// The target string
        target: String,
    },

    /// Every node path on the way to the target
    StructuralParents {
        /// The target string
        target: String,
    },

    /// Every node path below the target
    StructuralKids {
        /// The target string
        target: String,
    },

    /// List stored strings
    List {
        /// Maximum number of strings to return
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the record table
    Export {
        /// Also write the table to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show tree statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file_format = cli
        .file_format
        .map(RecordFormat::from)
        .unwrap_or_else(|| RecordFormat::from_path(&cli.tree));

    match cli.command {
        Commands::Build { words } => {
            let mut tree = RadixTree::new();
            for path in &words {
                tree.extend(read_words(path)?);
            }
            let checksum = save_tree(&tree, &cli.tree, file_format)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "stored": tree.len(),
                    "nodes": tree.node_count(),
                    "checksum": checksum.to_hex(),
                    "message": format!("Wrote tree to {}", cli.tree.display())
                }),
            );
        }

        Commands::Add { strings } => {
            let mut tree = if cli.tree.exists() {
                load_tree(&cli.tree, file_format)?
            } else {
                RadixTree::new()
            };
            let before = tree.len();
            tree.extend(&strings);
            let checksum = save_tree(&tree, &cli.tree, file_format)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "added": tree.len() - before,
                    "stored": tree.len(),
                    "checksum": checksum.to_hex()
                }),
            );
        }

        Commands::Contains { target } => {
            let tree = open_tree(&cli.tree, file_format)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "target": target,
                    "contains": tree.contains(&target)
                }),
            );
        }

        Commands::Parents { target } => {
            let tree = open_tree(&cli.tree, file_format)?;
            output_matches(&cli.format, &target, tree.parents(&target));
        }

        Commands::Kids { target } => {
            let tree = open_tree(&cli.tree, file_format)?;
            output_matches(&cli.format, &target, tree.kids(&target));
        }

        Commands::StructuralParents { target } => {
            let tree = open_tree(&cli.tree, file_format)?;
            output_matches(&cli.format, &target, tree.structural_parents(&target));
        }

        Commands::StructuralKids { target } => {
            let tree = open_tree(&cli.tree, file_format)?;
            output_matches(&cli.format, &target, tree.structural_kids(&target));
        }

        Commands::List { limit } => {
            let tree = open_tree(&cli.tree, file_format)?;
            let items: Vec<String> = tree.iter().take(limit.unwrap_or(usize::MAX)).collect();
            output(
                &cli.format,
                &serde_json::json!({
                    "count": items.len(),
                    "strings": items
                }),
            );
        }

        Commands::Export { output: path } => {
            let tree = open_tree(&cli.tree, file_format)?;
            let rows = radix_db::codec::to_rows(&tree.export());
            if let Some(path) = path {
                let format = RecordFormat::from_path(&path);
                radix_db::store::write_rows(&path, &rows, format)?;
            }
            output(
                &cli.format,
                &serde_json::json!({
                    "count": rows.len(),
                    "rows": rows
                }),
            );
        }

        Commands::Stats => {
            let file = read_rows(&cli.tree, file_format)?;
            let checksum = file.checksum;
            let tree = RadixTree::from_records(radix_db::codec::from_rows(file.rows)?)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "path": cli.tree.display().to_string(),
                    "stored": tree.len(),
                    "nodes": tree.node_count(),
                    "checksum": checksum.to_hex()
                }),
            );
        }
    }

    Ok(())
}

fn open_tree(path: &Path, format: RecordFormat) -> anyhow::Result<RadixTree> {
    if !path.exists() {
        anyhow::bail!("No tree at {}; run `radix build` first", path.display());
    }
    Ok(load_tree(path, format)?)
}

fn output_matches(format: &OutputFormat, target: &str, matches: Vec<String>) {
    output(
        format,
        &serde_json::json!({
            "target": target,
            "count": matches.len(),
            "matches": matches
        }),
    );
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Text => serde_json::to_string_pretty(value),
    };
    // Serializing a Value cannot fail
    println!("{}", text.unwrap_or_default());
}
