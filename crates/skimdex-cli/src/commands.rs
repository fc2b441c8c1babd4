//! Subcommand definitions and dispatch.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{self, DEFAULT_DOCS_ROOT, DEFAULT_INDEX_PATH};
use crate::error::{Error, Result};
use skimdex_content::peek::{peek_markdown, PeekOptions};
use skimdex_content::toc::DEFAULT_MAX_LINES;
use skimdex_index::builder::{build_index, ensure_index, enumerate_docs};
use skimdex_index::search::{list_entries, search_entries};
use skimdex_sanitize::{sanitize_file, SanitizeOptions, StopwordSet};

/// Skimdex — index, search, skim, and sanitize exported docsets
#[derive(Parser, Debug)]
#[command(name = "skimdex")]
#[command(about = "Index and search exported Markdown docsets", long_about = None)]
pub struct Cli {
    /// Directory containing exported docset files
    #[arg(long, default_value = DEFAULT_DOCS_ROOT)]
    pub docs_root: String,

    /// Index file path
    #[arg(long, default_value = DEFAULT_INDEX_PATH)]
    pub index: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List indexed documents
    List,
    /// Search headings and key sections (case-insensitive substring)
    Search {
        /// Search term
        term: String,
    },
    /// Rebuild the index from the docs root
    Rebuild,
    /// Inspect front matter (and optional TOC) without reading whole files
    Skim {
        /// Markdown file to skim (repeatable); defaults to every *.md under
        /// the docs root
        #[arg(long = "input")]
        inputs: Vec<String>,

        /// Include the Table of Contents block
        #[arg(long)]
        toc: bool,

        /// Maximum lines to scan when searching for the TOC
        #[arg(long, default_value_t = DEFAULT_MAX_LINES)]
        max_lines: usize,
    },
    /// Sanitize a docset export (front matter + TOC)
    Sanitize {
        /// Markdown file to sanitize
        #[arg(long)]
        input: String,

        /// Output path; defaults to rewriting the input
        #[arg(long)]
        output: Option<String>,

        /// Maximum TOC nesting depth to keep
        #[arg(long, default_value_t = 2)]
        toc_depth: usize,

        /// Extra stopword phrase (repeatable)
        #[arg(long = "stopword")]
        stopwords: Vec<String>,

        /// Rewrite the input file in place
        #[arg(long)]
        in_place: bool,
    },
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let docs_root = config::expand_path(&cli.docs_root);
    let index_path = config::expand_path(&cli.index);
    log::debug!(
        "docs_root={}, index={}",
        docs_root.display(),
        index_path.display()
    );

    match cli.command {
        Command::Rebuild => cmd_rebuild(&docs_root, &index_path),
        Command::List => cmd_list(&docs_root, &index_path),
        Command::Search { term } => cmd_search(&docs_root, &index_path, &term),
        Command::Skim {
            inputs,
            toc,
            max_lines,
        } => cmd_skim(&docs_root, &inputs, toc, max_lines),
        Command::Sanitize {
            input,
            output,
            toc_depth,
            stopwords,
            in_place,
        } => cmd_sanitize(&input, output.as_deref(), toc_depth, &stopwords, in_place),
    }
}

fn cmd_rebuild(docs_root: &Path, index_path: &Path) -> Result<()> {
    build_index(docs_root, index_path)?;
    println!("[skimdex] Rebuilt index at {}", index_path.display());
    Ok(())
}

fn cmd_list(docs_root: &Path, index_path: &Path) -> Result<()> {
    let index = ensure_index(docs_root, index_path)?;
    for line in list_entries(&index) {
        println!("{line}");
    }
    Ok(())
}

fn cmd_search(docs_root: &Path, index_path: &Path, term: &str) -> Result<()> {
    let index = ensure_index(docs_root, index_path)?;
    let results = search_entries(&index, term);
    if results.is_empty() {
        println!("[skimdex] No matches found.");
    } else {
        for line in results {
            println!("{line}");
        }
    }
    Ok(())
}

/// Resolve skim targets: explicit inputs, or every document under the root.
pub fn resolve_skim_targets(docs_root: &Path, inputs: &[String]) -> Result<Vec<PathBuf>> {
    if !inputs.is_empty() {
        return Ok(inputs.iter().map(|p| config::expand_path(p)).collect());
    }
    let targets = enumerate_docs(docs_root)?;
    if targets.is_empty() {
        return Err(Error::NoTargets(docs_root.display().to_string()));
    }
    Ok(targets)
}

fn cmd_skim(docs_root: &Path, inputs: &[String], toc: bool, max_lines: usize) -> Result<()> {
    let targets = resolve_skim_targets(docs_root, inputs)?;
    let options = PeekOptions {
        include_toc: toc,
        max_lines,
    };

    for path in targets {
        let info = match peek_markdown(&path, &options) {
            Ok(info) => info,
            Err(e) if e.is_not_found() => {
                eprintln!("[skimdex] Missing file: {}", path.display());
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let line = serde_json::to_string(&info)
            .map_err(|e| skimdex_core::Error::operation(format!("Failed to encode peek: {e}")))?;
        println!("{line}");
    }
    Ok(())
}

fn cmd_sanitize(
    input: &str,
    output: Option<&str>,
    toc_depth: usize,
    stopwords: &[String],
    in_place: bool,
) -> Result<()> {
    let input = config::expand_path(input);
    let output = match output {
        Some(path) if !in_place => config::expand_path(path),
        _ => input.clone(),
    };
    let options = SanitizeOptions {
        toc_depth,
        stopwords: StopwordSet::with_extra(stopwords),
    };
    sanitize_file(&input, &output, &options)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
