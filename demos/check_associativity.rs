// Copyright 2025 Irreducible Inc.

//! Checks multiplication tables for associativity both ways, reporting
//! verdicts and wall-clock time, and rendering small tables as an annotated
//! grid.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{value_parser, Parser};
use probcheck_core::{associativity, fixtures, Verdict};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

/// Largest order rendered as a grid; beyond this only verdicts are printed.
const RENDER_LIMIT: usize = 16;

#[derive(Debug, Parser)]
struct Args {
	/// Order of the tables to check.
	#[arg(long, default_value_t = 50, value_parser = value_parser!(u32).range(3..))]
	size: u32,
	/// Number of probe rounds. The default is calibrated so a table with a
	/// single violating triple slips through with probability under 1e-2.
	#[arg(long, default_value_t = 35, value_parser = value_parser!(u32).range(1..))]
	trials: u32,
	/// Seed for the probe vectors.
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

fn render_table(table: &associativity::MultiplicationTable, verdict: Verdict) {
	let n = table.n();
	println!("{verdict} multiplication table of order {n}:");
	for i in 0..n {
		let row = (0..n)
			.map(|j| format!("{:>3}", table.op(i, j)))
			.collect::<Vec<_>>()
			.join(" ");
		println!("  {row}");
	}
}

fn check(name: &str, table: &associativity::MultiplicationTable, trials: usize, seed: u64) {
	println!("{name} (order {}):", table.n());
	let (verdict, elapsed) = timed(|| associativity::check_deterministic(table));
	report("deterministic", verdict, elapsed);
	let (randomized, elapsed) = timed(|| {
		associativity::check_randomized(table, trials, StdRng::seed_from_u64(seed))
	});
	report("randomized", randomized, elapsed);
	if table.n() <= RENDER_LIMIT {
		render_table(table, verdict);
	}
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let args = Args::parse();
	let n = args.size as usize;
	let trials = args.trials as usize;

	check("additive group table", &fixtures::additive_table(n), trials, args.seed);
	check(
		"single-violation table",
		&fixtures::one_violation_table(n),
		trials,
		args.seed,
	);

	Ok(())
}
