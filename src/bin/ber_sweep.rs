//! Bit-error-rate sweep of the reference nested block code family.
//!
//! For every information-bit count `k` supported by the reference generator
//! matrix, runs a Monte Carlo AWGN sweep and writes one CSV artifact
//! `results{n}x{k}.csv` with columns `snr_db,sigma,error_rate,time`, rows in
//! increasing sigma order.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::ProgressBar;
use log::info;

use blocksim::{reference_generator, BlockDecoder, PrngSource, Result, Simulator, SweepConfig};

#[derive(Parser, Debug)]
#[command(
    name = "ber_sweep",
    about = "Monte Carlo BER sweep of nested linear block codes under AWGN"
)]
struct Args {
    /// First noise standard deviation (inclusive)
    sigma_start: f64,
    /// Last noise standard deviation (inclusive)
    sigma_end: f64,
    /// Spacing between consecutive sigma values
    sigma_step: f64,
    /// Number of trials per noise level
    trials: usize,
    /// Directory receiving one CSV artifact per code size
    #[arg(long, default_value = "simulation_results")]
    out_dir: PathBuf,
    /// Fixed PRNG seed for reproducible sweeps; seeded from OS entropy when
    /// omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn run(args: &Args) -> Result<()> {
    let config = SweepConfig {
        sigma_start: args.sigma_start,
        sigma_end: args.sigma_end,
        sigma_step: args.sigma_step,
        trials: args.trials,
    };
    config.validate()?;

    fs::create_dir_all(&args.out_dir)?;

    let generator = reference_generator();
    let k_max = generator.cols();
    let progress = ProgressBar::new(k_max as u64);

    for k in 1..=k_max {
        let decoder = BlockDecoder::new(&generator, k)?;
        let n = decoder.codeword_length();

        // Offsetting the seed per k keeps the streams independent while the
        // overall sweep stays reproducible.
        let source = match args.seed {
            Some(seed) => PrngSource::seeded(seed.wrapping_add(k as u64)),
            None => PrngSource::from_entropy(),
        };
        let mut simulator = Simulator::new(decoder, source);

        let path = args.out_dir.join(format!("results{}x{}.csv", n, k));
        let mut out = BufWriter::new(File::create(&path)?);
        writeln!(out, "snr_db,sigma,error_rate,time")?;
        simulator.run_sweep(&config, |point| {
            writeln!(
                out,
                "{},{},{},{}",
                point.snr_db, point.sigma, point.error_rate, point.avg_decode_time
            )?;
            Ok(())
        })?;
        out.flush()?;

        info!("wrote {}", path.display());
        progress.inc(1);
    }
    progress.finish();

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
