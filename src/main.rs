//! mf2 - Extract microformats2 JSON from HTML

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mf2::{Document, ParseOptions};

#[derive(Parser)]
#[command(name = "mf2")]
#[command(version, about = "Extract microformats2 JSON from HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    mf2 page.html                                   Parse a file
    curl -s https://example.com/ | mf2 --base-url https://example.com/
                                                    Parse stdin, resolving links
    RUST_LOG=mf2=debug mf2 page.html                Show parser diagnostics")]
struct Cli {
    /// Input HTML file, or - for stdin
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Base URL for resolving relative links
    #[arg(short, long, value_name = "URL")]
    base_url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Maximum element nesting depth
    #[arg(long, value_name = "N", default_value_t = mf2::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Skip rels, rel-urls and alternates
    #[arg(long)]
    no_rels: bool,

    /// Do not infer implied name, photo and url
    #[arg(long)]
    no_implied: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> mf2::Result<String> {
    let options = ParseOptions {
        base_url: cli.base_url.clone(),
        max_depth: cli.max_depth,
        collect_rels: !cli.no_rels,
        implied_properties: !cli.no_implied,
        ..ParseOptions::default()
    };

    let doc: Document = match cli.input.as_deref() {
        None | Some("-") => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            mf2::parse_bytes(&bytes, &options)?
        }
        Some(path) => mf2::parse_file(path, &options)?,
    };

    if cli.pretty {
        doc.to_json_pretty()
    } else {
        doc.to_json()
    }
}
