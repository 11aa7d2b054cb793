// Copyright 2025 Irreducible Inc.

//! Randomized verification of matrix products (Freivalds' algorithm).
//!
//! Given square matrices A, B, C of dimension n, deciding whether
//! `A·B = C` by recomputing the product costs O(n^3). Freivalds' algorithm
//! instead draws a random 0/1 vector x and compares `A·(B·x)` against
//! `C·x` using three matrix-vector products, O(n^2) in total, without ever
//! forming `A·B`. A correct product passes every probe; an incorrect one survives a
//! probe with probability at most 1/2, so `trials` rounds bound the
//! false-accept probability by 2^-trials.

use probcheck_math::{random_binary_vector, Error as MathError, Matrix, Ring};
use rand::RngCore;
use tracing::instrument;

use crate::{error::Error, probe::run_trials, verdict::Verdict};

/// Checks that all three matrices are square and of one dimension, which
/// must hold before any probing starts.
fn validate_triple<R: Ring>(
	a: &Matrix<R>,
	b: &Matrix<R>,
	c: &Matrix<R>,
) -> Result<usize, Error> {
	for matrix in [a, b, c] {
		if !matrix.is_square() {
			return Err(MathError::MatrixNotSquare.into());
		}
	}
	let n = a.n();
	for matrix in [b, c] {
		if matrix.n() != n {
			return Err(MathError::DimensionMismatch {
				expected: n,
				actual: matrix.n(),
			}
			.into());
		}
	}
	Ok(n)
}

/// Decides whether `a * b == c` by computing the product in full.
///
/// O(n^3) scalar multiplications and an exact elementwise comparison; the
/// verdict is always correct for well-formed input.
///
/// ## Throws
///
/// * [`Error::Math`] if any matrix is non-square or the dimensions disagree
#[instrument(skip_all, level = "debug", fields(n = a.n()))]
pub fn check_deterministic<R: Ring>(
	a: &Matrix<R>,
	b: &Matrix<R>,
	c: &Matrix<R>,
) -> Result<Verdict, Error> {
	let n = validate_triple(a, b, c)?;

	let mut product = Matrix::zeros(n, n);
	Matrix::mul_into(a, b, &mut product);
	Ok(Verdict::from_bool(&product == c))
}

/// Decides whether `a * b == c` with up to `trials` random-vector probes.
///
/// Each round draws a fresh 0/1 vector x from `rng` and tests
/// `a·(b·x) == c·x` at O(n^2); the first refuting round returns early.
///
/// If `a·b == c`, every round passes and the verdict is `Consistent` for
/// any trial count and any seed. Otherwise each round independently detects
/// the discrepancy with probability at least 1/2, so a false `Consistent`
/// survives with probability at most 2^-`trials`; pick
/// `trials = ceil(log2(1/ε))` for a target error ε.
///
/// ## Throws
///
/// * [`Error::Math`] if any matrix is non-square or the dimensions disagree
#[instrument(skip_all, level = "debug", fields(n = a.n(), trials = trials))]
pub fn check_randomized<R: Ring>(
	a: &Matrix<R>,
	b: &Matrix<R>,
	c: &Matrix<R>,
	trials: usize,
	rng: impl RngCore,
) -> Result<Verdict, Error> {
	let n = validate_triple(a, b, c)?;

	let mut bx = vec![R::ZERO; n];
	let mut a_bx = vec![R::ZERO; n];
	let mut cx = vec![R::ZERO; n];
	Ok(run_trials(trials, rng, |rng| {
		let x = random_binary_vector::<R>(n, &mut *rng);
		b.mul_vec_into(&x, &mut bx);
		a.mul_vec_into(&bx, &mut a_bx);
		c.mul_vec_into(&x, &mut cx);
		a_bx == cx
	}))
}
