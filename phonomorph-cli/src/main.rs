use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};
use phonomorph_core::alphabet::Alphabet;
use phonomorph_core::codec;
use phonomorph_core::model::trainer::ChainTrainer;
use phonomorph_core::model::transformer::WordTransformer;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Phonomorph - character-chain word transformer
#[derive(Parser, Debug)]
#[command(name = "phonomorph")]
#[command(about = "Train a character transition chain, or transform words with one", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).args(["train", "run"])))]
struct Args {
    /// Generate a chain file from the dictionary read on stdin (one token per line)
    #[arg(short = 'g', long, value_name = "FILE")]
    train: Option<PathBuf>,

    /// Load the chain file and transform words read on stdin
    #[arg(short = 'n', long, value_name = "FILE")]
    run: Option<PathBuf>,

    /// JSON vowel/consonant table overriding the built-in alphabet
    #[arg(short = 'a', long, value_name = "FILE")]
    alphabet: Option<PathBuf>,

    /// Seed for the random generator (reproducible runs)
    #[arg(short = 's', long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = args.train.as_deref() {
        train(path)
    } else if let Some(path) = args.run.as_deref() {
        run(path, args.alphabet.as_deref(), args.seed)
    } else {
        // clap's arg group guarantees one mode is set
        unreachable!("no mode selected")
    }
}

/// Reads the dictionary from stdin, trains the chain and writes it to `path`.
fn train(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("training markov chain");

    let lines: Vec<String> = io::stdin().lock().lines().collect::<Result<_, _>>()?;
    log::info!("read {} dictionary lines", lines.len());

    let model = ChainTrainer::train_parallel(lines, None)?;
    log::info!("trained {} source characters", model.len());

    let mut writer = BufWriter::new(File::create(path)?);
    codec::encode(&model, &mut writer)?;
    writer.flush()?;
    log::info!("chain written to {}", path.display());

    Ok(())
}

/// Loads the chain from `path` and transforms stdin line by line.
fn run(
    path: &Path,
    alphabet_path: Option<&Path>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("run markov chain");

    let mut reader = BufReader::new(File::open(path)?);
    let model = codec::decode(&mut reader)?;
    log::info!("loaded chain with {} source characters", model.len());

    let alphabet = match alphabet_path {
        Some(p) => Alphabet::from_file(p)?,
        None => Alphabet::default(),
    };

    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let mut transformer = WordTransformer::new(&model, &alphabet, rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(out, "{}", transformer.transform_line(&line))?;
    }
    out.flush()?;

    Ok(())
}
