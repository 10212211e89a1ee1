//! # prodtable
//!
//! A CLI tool that renders a product catalog as a table.
//!
//! ## Overview
//!
//! prodtable is built on top of prodtablelib. It reads a catalog JSON file
//! (an object of product handle → product), builds the product table and
//! prints it. HTML is the default; the table model is also available as
//! JSON, and as aligned text for a quick look in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Render catalog.json in the current directory as HTML
//! prodtable
//!
//! # Render a specific catalog as a standalone page
//! prodtable products.json --document > products.html
//!
//! # Inspect the table model
//! prodtable products.json --output json
//!
//! # Quick terminal view
//! prodtable products.json -o text
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=prodtablelib=debug`).

mod render;

use std::process::ExitCode;
use std::str::FromStr;

use clap::{Arg, ArgAction, ArgMatches, Command};
use prodtablelib::{JsonFileLibrary, OutputFormat, ProductTable, RenderOptions};
use render::OutputMode;
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("prodtable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render a product catalog as an HTML table")
        .arg(
            Arg::new("path")
                .help("Catalog JSON file (defaults to catalog.json)")
                .default_value("catalog.json"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["html", "json", "text"])
                .default_value("html")
                .help("Output format"),
        )
        .arg(
            Arg::new("document")
                .short('d')
                .long("document")
                .action(ArgAction::SetTrue)
                .help("Wrap the HTML table in a standalone page"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Write HTML without line breaks or indentation"),
        )
}

/// Build render options from matches
fn extract_options(matches: &ArgMatches) -> RenderOptions {
    RenderOptions::new()
        .pretty(!matches.get_flag("compact"))
        .document(matches.get_flag("document"))
}

/// Load the catalog and render it
fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or("catalog.json");
    let format = matches
        .get_one::<String>("output")
        .map(|s| OutputFormat::from_str(s))
        .transpose()?
        .unwrap_or_default();
    let options = extract_options(matches);

    let library = JsonFileLibrary::new(path);
    let table = ProductTable::load(&library)?;
    tracing::info!(
        path = %library.path().display(),
        products = table.len(),
        ?format,
        "rendering catalog"
    );

    render::render(&table.render(), format, &options, OutputMode::Auto)
        .map_err(|e| anyhow::anyhow!("{e}"))
}

/// Install the stderr log subscriber, filtered by `RUST_LOG`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
