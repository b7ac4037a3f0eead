use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use rust_dict_clean::logging::init_tracing;
use rust_dict_clean::{LITE_SAMPLE_SIZE, prepare_markov_db};

#[derive(Parser, Debug)]
#[command(name = "parse-dictionary")]
#[command(about = "Clean a word -> definition dictionary into a Markov chain seed dataset")]
struct Args {
    /// Source dictionary: a JSON object mapping word to definition
    #[arg(long, env = "DICT_INPUT", default_value = "dictionary.json")]
    input: PathBuf,

    /// Cleaned dataset output
    #[arg(long, env = "DICT_OUTPUT", default_value = "markov_db.json")]
    output: PathBuf,

    /// Randomly sampled lite dataset output
    #[arg(long, env = "DICT_LITE_OUTPUT", default_value = "markov_db_lite.json")]
    lite_output: PathBuf,

    /// Number of entries in the lite dataset
    #[arg(long, env = "DICT_LITE_SIZE", default_value_t = LITE_SAMPLE_SIZE)]
    lite_size: usize,

    /// Seed for the lite sample (random when omitted)
    #[arg(long, env = "DICT_SEED")]
    seed: Option<u64>,
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
    let start = Instant::now();
    info!("using dictionary at {}", args.input.display());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stats = prepare_markov_db(
        &args.input,
        &args.output,
        &args.lite_output,
        args.lite_size,
        &mut rng,
    )?;

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        total = stats.total,
        kept = stats.kept,
        skipped = stats.skipped,
        "dataset ready at {}",
        args.output.display()
    );
    Ok(())
}
