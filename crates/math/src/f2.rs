// Copyright 2025 Irreducible Inc.

use std::{
	iter::Sum,
	ops::{Add, AddAssign, Mul},
};

use super::ring::Ring;

/// The field with two elements.
///
/// Addition is XOR and multiplication is AND, so a sum of `F2` values is the
/// parity of the number of ones among them. This is the scalar the
/// associativity checker's subset-indicator vectors live over.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct F2(bool);

impl F2 {
	pub const ZERO: Self = Self(false);
	pub const ONE: Self = Self(true);

	pub const fn new(value: bool) -> Self {
		Self(value)
	}
}

impl From<bool> for F2 {
	fn from(value: bool) -> Self {
		Self(value)
	}
}

impl From<F2> for bool {
	fn from(value: F2) -> Self {
		value.0
	}
}

impl Add for F2 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self(self.0 ^ rhs.0)
	}
}

impl AddAssign for F2 {
	fn add_assign(&mut self, rhs: Self) {
		self.0 ^= rhs.0;
	}
}

impl Mul for F2 {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		Self(self.0 & rhs.0)
	}
}

impl Sum for F2 {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl Ring for F2 {
	const ZERO: Self = Self::ZERO;
	const ONE: Self = Self::ONE;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_addition_is_xor() {
		assert_eq!(F2::ZERO + F2::ZERO, F2::ZERO);
		assert_eq!(F2::ZERO + F2::ONE, F2::ONE);
		assert_eq!(F2::ONE + F2::ZERO, F2::ONE);
		assert_eq!(F2::ONE + F2::ONE, F2::ZERO);
	}

	#[test]
	fn test_multiplication_is_and() {
		assert_eq!(F2::ZERO * F2::ZERO, F2::ZERO);
		assert_eq!(F2::ZERO * F2::ONE, F2::ZERO);
		assert_eq!(F2::ONE * F2::ZERO, F2::ZERO);
		assert_eq!(F2::ONE * F2::ONE, F2::ONE);
	}

	#[test]
	fn test_sum_is_parity() {
		let odd = [F2::ONE; 5];
		let even = [F2::ONE; 4];
		assert_eq!(odd.into_iter().sum::<F2>(), F2::ONE);
		assert_eq!(even.into_iter().sum::<F2>(), F2::ZERO);
	}
}
