// Copyright 2025 Irreducible Inc.

//! Randomized verification of associativity for tabulated binary operations.
//!
//! A multiplication table over {0, …, n-1} is associative iff
//! `(i∘j)∘k = i∘(j∘k)` for all n^3 triples, and checking the triples
//! directly costs O(n^3). The randomized check instead lifts the operation
//! to subset-indicator vectors over GF(2) via [`vector_op`] and probes the
//! lifted associativity identity with random vectors at O(n^2) per round.
//!
//! Unlike Freivalds' algorithm there is no universal per-round detection
//! bound: the probability of catching a non-associative table depends on
//! how many triples violate the law. For a table with a single violating
//! triple the per-round rate is about 1/8 (the three indicator bits of the
//! violating triple must all be drawn, and the mismatch must survive parity
//! cancellation), so 35 rounds push the false-accept probability below 1e-2
//! for that family. Other instance families need their own calibration.

use itertools::iproduct;
use probcheck_math::{random_binary_vector, F2};
use rand::RngCore;
use tracing::instrument;

use crate::{error::Error, probe::run_trials, verdict::Verdict};

/// A finite binary operation on {0, …, n-1}, tabulated row-major as
/// `i∘j = entries[i * n + j]`.
///
/// Construction validates squareness and the entry range, so a value of
/// this type is always structurally well-formed and the checkers below have
/// no input error path of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicationTable {
	n: usize,
	entries: Box<[usize]>,
}

impl MultiplicationTable {
	/// ## Throws
	///
	/// * [`Error::TableNotSquare`] unless `entries.len() == n * n`
	/// * [`Error::EntryOutOfRange`] if any entry is not a domain element
	pub fn new(n: usize, entries: &[usize]) -> Result<Self, Error> {
		if entries.len() != n * n {
			return Err(Error::TableNotSquare {
				order: n,
				len: entries.len(),
			});
		}
		for (index, &value) in entries.iter().enumerate() {
			if value >= n {
				return Err(Error::EntryOutOfRange {
					row: index / n,
					col: index % n,
					value,
					order: n,
				});
			}
		}
		Ok(Self {
			n,
			entries: entries.into(),
		})
	}

	/// Builds the order-`n` table with `i∘j = f(i, j)`.
	pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> usize) -> Result<Self, Error> {
		let entries = iproduct!(0..n, 0..n)
			.map(|(i, j)| f(i, j))
			.collect::<Vec<_>>();
		Self::new(n, &entries)
	}

	/// The order of the underlying domain.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Applies the tabulated operation, `i∘j`.
	pub fn op(&self, i: usize, j: usize) -> usize {
		assert!(i < self.n);
		assert!(j < self.n);
		self.entries[i * self.n + j]
	}
}

/// Lifts the table operation to subset-indicator vectors over GF(2).
///
/// Interpreting `u` and `v` as indicators of subsets U, V of the domain,
/// entry `k` of the result is the parity of the number of pairs
/// (i, j) ∈ U×V with `i∘j = k`. The lifting is linear over GF(2) in each
/// argument and inherits associativity from the table operation, which is
/// the identity the randomized check probes. O(n^2).
///
/// ## Preconditions
///
/// * `u` and `v` must have length `table.n()`
pub fn vector_op(table: &MultiplicationTable, u: &[F2], v: &[F2]) -> Vec<F2> {
	let n = table.n();
	assert_eq!(u.len(), n);
	assert_eq!(v.len(), n);

	let mut out = vec![F2::ZERO; n];
	for (i, j) in iproduct!(0..n, 0..n) {
		out[table.op(i, j)] += u[i] * v[j];
	}
	out
}

/// Decides associativity by testing all n^3 triples.
///
/// Triples are visited in row-major (i, j, k) order and the first violation
/// ends the scan, so the verdict is exact and the scan order reproducible.
#[instrument(skip_all, level = "debug", fields(n = table.n()))]
pub fn check_deterministic(table: &MultiplicationTable) -> Verdict {
	let n = table.n();
	for (i, j, k) in iproduct!(0..n, 0..n, 0..n) {
		if table.op(table.op(i, j), k) != table.op(i, table.op(j, k)) {
			return Verdict::Inconsistent;
		}
	}
	Verdict::Consistent
}

/// Decides associativity with up to `trials` random-vector probes.
///
/// Each round draws fresh u, v, w uniform over GF(2)^n and compares
/// `u∘(v∘w)` against `(u∘v)∘w` under the lifted operation, four
/// [`vector_op`] evaluations at O(n^2) per round. An associative table passes
/// every round for any seed; a non-associative one is caught with the
/// instance-dependent per-round probability discussed in the module docs.
/// The first refuting round returns early.
#[instrument(skip_all, level = "debug", fields(n = table.n(), trials = trials))]
pub fn check_randomized(table: &MultiplicationTable, trials: usize, rng: impl RngCore) -> Verdict {
	let n = table.n();
	run_trials(trials, rng, |rng| {
		let u = random_binary_vector::<F2>(n, &mut *rng);
		let v = random_binary_vector::<F2>(n, &mut *rng);
		let w = random_binary_vector::<F2>(n, &mut *rng);

		let left = vector_op(table, &u, &vector_op(table, &v, &w));
		let right = vector_op(table, &vector_op(table, &u, &v), &w);
		left == right
	})
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use itertools::iproduct;
	use proptest::prelude::*;
	use rand::{rngs::StdRng, SeedableRng};

	use super::*;
	use crate::fixtures;

	fn indicator(n: usize, i: usize) -> Vec<F2> {
		let mut out = vec![F2::ZERO; n];
		out[i] = F2::ONE;
		out
	}

	#[test]
	fn test_additive_group_table_is_accepted() {
		let table = fixtures::additive_table(5);

		assert_eq!(check_deterministic(&table), Verdict::Consistent);
		for seed in 0..10 {
			let rng = StdRng::seed_from_u64(seed);
			assert_eq!(check_randomized(&table, 35, rng), Verdict::Consistent);
		}
	}

	#[test]
	fn test_one_violation_table_is_rejected_deterministically() {
		let table = fixtures::one_violation_table(5);
		assert_eq!(check_deterministic(&table), Verdict::Inconsistent);
	}

	#[test]
	fn test_zero_trials_accepts_even_a_non_associative_table() {
		let table = fixtures::one_violation_table(5);
		let verdict = check_randomized(&table, 0, StdRng::seed_from_u64(0));
		assert_eq!(verdict, Verdict::Consistent);
	}

	#[test]
	fn test_vector_op_on_singletons_is_the_table_operation() {
		let table = fixtures::additive_table(7);
		for (i, j) in iproduct!(0..7, 0..7) {
			let w = vector_op(&table, &indicator(7, i), &indicator(7, j));
			assert_eq!(w, indicator(7, table.op(i, j)));
		}
	}

	#[test]
	fn test_vector_op_counts_pair_parity() {
		// Over the additive table, i∘j for fixed j and all i hits every
		// element exactly once, so lifting the full domain against a
		// singleton gives odd parity everywhere.
		let n = 6;
		let table = fixtures::additive_table(n);
		let everything = vec![F2::ONE; n];
		let w = vector_op(&table, &everything, &indicator(n, 2));
		assert_eq!(w, vec![F2::ONE; n]);
	}

	#[test]
	fn test_table_must_be_square() {
		assert_matches!(
			MultiplicationTable::new(2, &[0, 1, 0]),
			Err(Error::TableNotSquare { order: 2, len: 3 })
		);
	}

	#[test]
	fn test_table_entries_must_be_domain_elements() {
		assert_matches!(
			MultiplicationTable::new(2, &[0, 1, 3, 0]),
			Err(Error::EntryOutOfRange {
				row: 1,
				col: 0,
				value: 3,
				order: 2,
			})
		);
	}

	fn table_strategy(max_n: usize) -> impl Strategy<Value = MultiplicationTable> {
		(1..=max_n)
			.prop_flat_map(|n| proptest::collection::vec(0..n, n * n).prop_map(move |entries| {
				MultiplicationTable::new(n, &entries).expect("entries drawn from 0..n")
			}))
	}

	proptest! {
		#[test]
		fn test_randomized_agrees_with_deterministic(table in table_strategy(5), seed in any::<u64>()) {
			// 200 rounds leave a vanishing false-accept probability even for
			// a table with a single violating triple.
			let expected = check_deterministic(&table);
			let actual = check_randomized(&table, 200, StdRng::seed_from_u64(seed));
			prop_assert_eq!(actual, expected);
		}

		#[test]
		fn test_associative_tables_are_accepted_for_any_seed(n in 1..10usize, seed in any::<u64>()) {
			let table = fixtures::additive_table(n);
			let verdict = check_randomized(&table, 35, StdRng::seed_from_u64(seed));
			prop_assert_eq!(verdict, Verdict::Consistent);
		}
	}
}
