// Copyright 2025 Irreducible Inc.

use rand::RngCore;
use tracing::debug;

use crate::verdict::Verdict;

/// Runs up to `trials` independent randomized rounds, stopping at the first
/// refutation.
///
/// Each round receives the shared RNG and reports whether the probed
/// identity held. The first `false` short-circuits to
/// [`Verdict::Inconsistent`]; if every round passes (vacuously so for
/// `trials = 0`) the result is [`Verdict::Consistent`].
///
/// Both checkers funnel their trial loops through this routine, so the
/// early-exit and zero-trials semantics are defined in one place. Rounds
/// consume the RNG sequentially; independence across rounds comes from the
/// generator state advancing, not from reseeding.
pub fn run_trials<Rng: RngCore>(
	trials: usize,
	mut rng: Rng,
	mut round: impl FnMut(&mut Rng) -> bool,
) -> Verdict {
	for completed in 0..trials {
		if !round(&mut rng) {
			debug!(round = completed, trials, "probe refuted the claim");
			return Verdict::Inconsistent;
		}
	}
	Verdict::Consistent
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, Rng, SeedableRng};

	use super::*;

	#[test]
	fn test_zero_trials_is_vacuously_consistent() {
		let verdict = run_trials(0, StdRng::seed_from_u64(0), |_| {
			panic!("round must not run")
		});
		assert_eq!(verdict, Verdict::Consistent);
	}

	#[test]
	fn test_all_passing_rounds_run_exactly_trials_times() {
		let mut rounds = 0;
		let verdict = run_trials(17, StdRng::seed_from_u64(0), |_| {
			rounds += 1;
			true
		});
		assert_eq!(verdict, Verdict::Consistent);
		assert_eq!(rounds, 17);
	}

	#[test]
	fn test_stops_at_first_refuting_round() {
		let mut rounds = 0;
		let verdict = run_trials(100, StdRng::seed_from_u64(0), |_| {
			rounds += 1;
			rounds < 4
		});
		assert_eq!(verdict, Verdict::Inconsistent);
		assert_eq!(rounds, 4);
	}

	#[test]
	fn test_rng_state_advances_across_rounds() {
		let mut draws = Vec::new();
		run_trials(8, StdRng::seed_from_u64(0), |rng| {
			draws.push(rng.gen::<u64>());
			true
		});
		draws.sort_unstable();
		draws.dedup();
		assert_eq!(draws.len(), 8);
	}
}
