// Copyright 2025 Irreducible Inc.

//! Input generators for tests, benches and the demo drivers.
//!
//! The checkers treat these as opaque, structurally valid inputs; nothing
//! here is part of the checking contract. The families mirror the classic
//! worked examples: a known group table, a table with a single planted
//! violation, and exact or minimally corrupted product claims.

use probcheck_math::Matrix;
use rand::Rng;

use crate::associativity::MultiplicationTable;

/// Multiplication table of the additive group modulo `n` (associative).
pub fn additive_table(n: usize) -> MultiplicationTable {
	MultiplicationTable::from_fn(n, |i, j| (i + j) % n).expect("sums are reduced mod n")
}

/// An order-`n` table whose operation has exactly one non-associative
/// triple.
///
/// Every entry is zero except `(n-1)∘(n-2) = n-1`, which makes
/// `(n-1, n-2, n-2)` the unique violating triple for `n ≥ 3`. This is the
/// adversarial case for randomized checking: one bad triple among n^3.
pub fn one_violation_table(n: usize) -> MultiplicationTable {
	assert!(n >= 3);
	MultiplicationTable::from_fn(n, |i, j| if i == n - 1 && j == n - 2 { n - 1 } else { 0 })
		.expect("0 and n-1 are domain elements")
}

/// Generates a claimed-product instance (A, B, C) with `C = A·B` exactly.
///
/// Entries are small uniform integers so that products stay far from `i64`
/// overflow at any size the benches reach.
pub fn random_product_triple(
	n: usize,
	mut rng: impl Rng,
) -> (Matrix<i64>, Matrix<i64>, Matrix<i64>) {
	let a = Matrix::from_fn(n, n, |_, _| rng.gen_range(-9..=9));
	let b = Matrix::from_fn(n, n, |_, _| rng.gen_range(-9..=9));
	let mut c = Matrix::zeros(n, n);
	Matrix::mul_into(&a, &b, &mut c);
	(a, b, c)
}

/// Returns a copy of `c` with the entry at `(i, j)` off by one, the
/// minimal incorrect product claim.
pub fn perturb_entry(c: &Matrix<i64>, i: usize, j: usize) -> Matrix<i64> {
	let mut out = c.clone();
	out[(i, j)] += 1;
	out
}
