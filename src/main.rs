//! cdocs — generate API documentation from commented C sources.
//!
//! Walks a directory tree, picks up every function whose signature and
//! opening brace share a line, attaches the comment block right above it,
//! and writes a single HTML (default) or Markdown document.
//!
//! - `cdocs` documents the current directory into `docs.html`
//! - `cdocs src/ -m -o API.md` documents `src/` as Markdown

mod error;
mod model;
mod parser;
mod render;
mod walk;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use model::{FunctionSet, DEFAULT_MAX_FUNCTIONS};
use render::Format;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use walk::WalkOptions;

const EXAMPLES: &str = "\
Examples:
  cdocs                    # document the current directory
  cdocs src/               # document src/
  cdocs -o api.html        # write to api.html
  cdocs -m -o API.md       # write markdown";

#[derive(Parser, Debug)]
#[command(
    name = "cdocs",
    version,
    about = "Generate documentation from commented C source files",
    after_help = EXAMPLES
)]
struct Cli {
    /// Directory to scan (default: current directory). The last one given wins.
    #[arg(value_name = "DIRECTORY")]
    directories: Vec<PathBuf>,

    /// Output file (default: docs.html, or API.md with -m)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Generate markdown instead of HTML
    #[arg(short = 'm', long)]
    markdown: bool,

    /// File suffix to scan, repeatable (default: c and h)
    #[arg(long = "ext", value_name = "SUFFIX")]
    extensions: Vec<String>,

    /// Skip paths matching this glob, relative to the scanned directory. Repeatable.
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Stop collecting after this many functions
    #[arg(long, default_value_t = DEFAULT_MAX_FUNCTIONS)]
    max_functions: usize,

    /// Visit directory entries in name order
    #[arg(long)]
    sort: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn root(&self) -> PathBuf {
        self.directories
            .last()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn format(&self) -> Format {
        if self.markdown {
            Format::Markdown
        } else {
            Format::Html
        }
    }

    fn walk_options(&self) -> Result<WalkOptions> {
        let mut options = WalkOptions {
            sorted: self.sort,
            ..Default::default()
        };
        if !self.extensions.is_empty() {
            options.extensions = self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();
        }
        options
            .with_excludes(&self.exclude)
            .context("invalid --exclude pattern")
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = cli.root();
    let options = cli.walk_options()?;
    let renderer = render::create_renderer(cli.format());
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(renderer.default_output()));

    println!("Scanning files in {}...", root.display());
    let mut functions = FunctionSet::with_capacity(cli.max_functions);
    let scanned = walk::walk(&root, &options, &mut functions);
    info!("scanned {} files", scanned.len());
    if functions.is_empty() {
        info!("no function definitions found under {}", root.display());
    }

    println!("\nFound {} functions", functions.len());
    println!("Generating documentation...");

    // An unwritable destination is reported but never fails the run.
    match render::write_document(renderer.as_ref(), functions.as_slice(), &output) {
        Ok(()) => {
            info!("wrote {}", output.display());
            println!("✓ Documentation generated in {}", output.display());
        }
        Err(err) => eprintln!("error: {}", err),
    }

    Ok(())
}
