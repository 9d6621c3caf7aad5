//! lwe_kem_benchmark: time key generation plus a batch of KEM round trips
//!
//! Prints one line to stdout, `n;stddev;bound;q;elapsed_ms`. Diagnostics
//! go to stderr through `tracing`.

use std::time::Instant;

use clap::{Parser, ValueEnum};
use eyre::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use lwekem::api::Kem;
use lwekem::kem::lwe::{Lwe1024ParamsImpl, Lwe512ParamsImpl};
use lwekem::kem::{run_batch, BatchConfig, CoinMode, LweKem, LweKemParams};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Profile {
    #[value(name = "512")]
    Lwe512,
    #[value(name = "1024")]
    Lwe1024,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Explicit,
    Derived,
}

impl From<Mode> for CoinMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Explicit => CoinMode::Explicit,
            Mode::Derived => CoinMode::Derived,
        }
    }
}

#[derive(Parser)]
#[command(name = "lwe-kem-benchmark")]
#[command(about = "Time LWE-KEM key generation and encapsulation round trips")]
#[command(version)]
struct Args {
    /// Parameter profile
    #[arg(long, value_enum, default_value = "1024")]
    profile: Profile,

    /// Number of round trips (defaults to n)
    #[arg(long)]
    trials: Option<usize>,

    /// Worker threads (defaults to the rayon global pool)
    #[arg(long)]
    threads: Option<usize>,

    /// Seed for key generation and the per-trial generators
    #[arg(long, default_value = "0")]
    seed: u64,

    /// How encryption coins are obtained
    #[arg(long, value_enum, default_value = "explicit")]
    mode: Mode,
}

fn run<P: LweKemParams>(args: &Args) -> Result<()> {
    let params = P::params().wrap_err("invalid parameter profile")?;
    let config = BatchConfig {
        trials: args.trials.unwrap_or(params.n()),
        seed: args.seed,
        mode: args.mode.into(),
        threads: args.threads,
    };
    info!(algorithm = P::NAME, trials = config.trials, mode = ?config.mode, "starting benchmark");

    let mut rng = ChaCha20Rng::seed_from_u64(args.seed);
    let start = Instant::now();
    let (pk, sk) = LweKem::<P>::keypair(&mut rng).wrap_err("key generation failed")?;
    let report = run_batch(&pk, &sk, &config).wrap_err("batch failed")?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if report.accepted < report.trials {
        warn!(
            rejected = report.trials - report.accepted,
            bit_errors = report.bit_errors,
            "some decapsulations were rejected"
        );
    }
    info!(accepted = report.accepted, agreed = report.agreed, "benchmark finished");

    println!(
        "{};{};{};{};{}",
        params.n(),
        params.stddev(),
        params.eta(),
        params.q(),
        elapsed_ms
    );
    Ok(())
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    match args.profile {
        Profile::Lwe512 => run::<Lwe512ParamsImpl>(&args),
        Profile::Lwe1024 => run::<Lwe1024ParamsImpl>(&args),
    }
}
