// Copyright 2025 Irreducible Inc.

//! Generates a claimed matrix product and verifies it both ways, reporting
//! verdicts and wall-clock time for the O(n^3) recomputation against the
//! O(trials·n^2) randomized probes.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{value_parser, Parser};
use probcheck_core::{fixtures, freivalds, Verdict};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
struct Args {
	/// Matrix dimension n.
	#[arg(long, default_value_t = 500, value_parser = value_parser!(u32).range(1..))]
	size: u32,
	/// Number of probe rounds; the false-accept probability is 2^-trials.
	#[arg(long, default_value_t = 7, value_parser = value_parser!(u32).range(1..))]
	trials: u32,
	/// Seed for fixture generation and probe vectors.
	#[arg(long, default_value_t = 0)]
	seed: u64,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
	let start = Instant::now();
	let out = f();
	(out, start.elapsed())
}

fn report(label: &str, verdict: Verdict, elapsed: Duration) {
	println!("  {label:<14} {verdict:<14} {elapsed:.2?}");
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let args = Args::parse();
	let n = args.size as usize;
	let trials = args.trials as usize;
	let mut rng = StdRng::seed_from_u64(args.seed);

	println!(
		"Verifying claimed {n}x{n} products with {trials} probe rounds (seed {})",
		args.seed
	);

	let (a, b, c) = fixtures::random_product_triple(n, &mut rng);

	println!("claim C = A*B, C computed exactly:");
	let (verdict, elapsed) = timed(|| freivalds::check_deterministic(&a, &b, &c));
	report("deterministic", verdict?, elapsed);
	let (verdict, elapsed) = timed(|| freivalds::check_randomized(&a, &b, &c, trials, &mut rng));
	report("randomized", verdict?, elapsed);

	let corrupted = fixtures::perturb_entry(&c, n / 2, n / 2);

	println!("claim C' = A*B, one entry of C' off by one:");
	let (verdict, elapsed) = timed(|| freivalds::check_deterministic(&a, &b, &corrupted));
	report("deterministic", verdict?, elapsed);
	let (verdict, elapsed) =
		timed(|| freivalds::check_randomized(&a, &b, &corrupted, trials, &mut rng));
	report("randomized", verdict?, elapsed);

	Ok(())
}
