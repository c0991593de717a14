use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Env};
use log::info;
use mt19937::{Mt19937, Options, PrngJson};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

mod utilities;
use crate::utilities::{read_input, reset_sigpipe, seed_option};

fn main() -> Result<(), Box<dyn Error>> {
    // behave like a typical unix utility
    reset_sigpipe()?;

    // logging goes to stderr, stdout is reserved for values
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut stdout = io::stdout().lock();

    #[derive(Parser, Debug)]
    #[clap(author, version, about, long_about=None)]
    struct Args {
        /// Number of values to output
        #[clap(default_value_t = 10)]
        count: usize,

        /// Seed, an integer or a comma separated list of integers, defaults to a random seed
        seed: Option<String>,

        /// Output doubles on [0, 1) instead of integers
        #[clap(short, long)]
        normalized: bool,

        /// JSON options file: {"seed": N | [N, ...], "state": [...]}, "-" implies stdin
        #[clap(short, long, conflicts_with_all = ["seed", "state_in"])]
        config: Option<PathBuf>,

        /// Resume from a JSON state written by --state-out, "-" implies stdin
        #[clap(short = 'i', long, conflicts_with = "seed")]
        state_in: Option<PathBuf>,

        /// Write the final generator state as JSON
        #[clap(short = 'o', long)]
        state_out: Option<PathBuf>,
    }
    let args = Args::parse();

    // ===============================================================

    let mut mt = match (&args.config, &args.state_in, &args.seed) {
        (Some(config), _, _) => Mt19937::new(Options::from_json(&read_input(config)?)?)?,
        (_, Some(state_in), _) => {
            let json: PrngJson = serde_json::from_str(&read_input(state_in)?)
                .with_context(|| format!("could not parse state `{:?}`", state_in.as_os_str()))?;
            Mt19937::from_json(&json, true)?
        }
        (_, _, Some(seed)) => Mt19937::from_seed(seed_option(seed)?)?,
        _ => Mt19937::new(Options::new())?,
    };
    info!("seed = {:?}", mt.seed());

    for _ in 0..args.count {
        match args.normalized {
            true => writeln!(stdout, "{}", mt.normalized())?,
            false => writeln!(stdout, "{}", mt.next_word())?,
        }
    }

    if let Some(state_out) = args.state_out {
        let json = serde_json::to_string(&mt.to_json())?;
        std::fs::write(&state_out, json)
            .with_context(|| format!("could not write file `{:?}`", state_out.as_os_str()))?;
    }
    Ok(())
}
