use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use rust_dict_clean::logging::init_tracing;
use rust_dict_clean::{count_and_filter, extract_labels, load_json, render_report};

#[derive(Parser, Debug)]
#[command(name = "extract-labels")]
#[command(about = "List recurring parenthetical labels found in a JSON document")]
struct Args {
    /// JSON document to scan, usually the cleaned dataset
    #[arg(env = "LABELS_INPUT", default_value = "markov_db.json")]
    input: PathBuf,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let document = load_json(&args.input)?;

    let found = extract_labels(&document);
    info!(matches = found.len(), "scanned {}", args.input.display());
    let labels = count_and_filter(found);

    let mut out = io::stdout().lock();
    out.write_all(render_report(&labels).as_bytes())?;
    out.flush()?;
    Ok(())
}
