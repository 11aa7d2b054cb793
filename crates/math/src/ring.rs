// Copyright 2025 Irreducible Inc.

use std::{
	fmt::Debug,
	iter::{repeat_with, Sum},
	ops::{Add, AddAssign, Mul},
};

use rand::{Rng, RngCore};

/// Scalar contract for the matrices and vectors in this crate.
///
/// This trait is based on `binius_field::Field` with the field-specific
/// functionality removed: checker arithmetic only ever adds and multiplies,
/// so a commutative ring with exact equality is enough. Implementations
/// exist for `i32`, `i64` and [`crate::F2`]; floating-point scalars are
/// intentionally unsupported.
pub trait Ring:
	Sized
	+ Copy
	+ Clone
	+ Eq
	+ Send
	+ Sync
	+ Debug
	+ 'static
	+ Add<Output = Self>
	+ Mul<Output = Self>
	+ AddAssign
	+ Sum
{
	/// The additive identity.
	const ZERO: Self;

	/// The multiplicative identity.
	const ONE: Self;
}

macro_rules! impl_ring_for_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl Ring for $ty {
				const ZERO: Self = 0;
				const ONE: Self = 1;
			}
		)*
	};
}

impl_ring_for_int!(i32, i64);

/// Samples a length-`n` vector with entries drawn i.i.d. uniform from
/// `{ZERO, ONE}`.
///
/// Over [`crate::F2`] the two constants are the whole field, so this is a
/// uniform random GF(2) vector. Over the integer rings it is the 0/1 probe
/// vector used by the randomized matrix-product check.
pub fn random_binary_vector<R: Ring>(n: usize, mut rng: impl RngCore) -> Vec<R> {
	repeat_with(|| if rng.gen() { R::ONE } else { R::ZERO })
		.take(n)
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, SeedableRng};

	use super::*;

	#[test]
	fn test_binary_vector_entries_are_zero_or_one() {
		let mut rng = StdRng::seed_from_u64(0);
		let x = random_binary_vector::<i64>(256, &mut rng);
		assert_eq!(x.len(), 256);
		assert!(x.iter().all(|&e| e == 0 || e == 1));
	}

	#[test]
	fn test_binary_vector_is_seed_reproducible() {
		let x = random_binary_vector::<i32>(64, StdRng::seed_from_u64(7));
		let y = random_binary_vector::<i32>(64, StdRng::seed_from_u64(7));
		assert_eq!(x, y);
	}

	#[test]
	fn test_binary_vector_draws_both_values() {
		// 256 coin flips landing all on one side would indicate a broken
		// sampler far more often than an unlucky seed.
		let mut rng = StdRng::seed_from_u64(0);
		let x = random_binary_vector::<i64>(256, &mut rng);
		assert!(x.contains(&0));
		assert!(x.contains(&1));
	}
}
