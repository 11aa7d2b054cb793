// Copyright 2025 Irreducible Inc.

use std::ops::{Index, IndexMut};

use getset::CopyGetters;

use super::{error::Error, ring::Ring};

/// A dense matrix in row-major order over a ring of exact scalars.
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct Matrix<R: Ring> {
	#[getset(get_copy = "pub")]
	m: usize,
	#[getset(get_copy = "pub")]
	n: usize,
	elements: Box<[R]>,
}

impl<R: Ring> Matrix<R> {
	pub fn new(m: usize, n: usize, elements: &[R]) -> Result<Self, Error> {
		if elements.len() != m * n {
			return Err(Error::IncorrectArgumentLength {
				arg: "elements".into(),
				expected: m * n,
			});
		}
		Ok(Self {
			m,
			n,
			elements: elements.into(),
		})
	}

	pub fn zeros(m: usize, n: usize) -> Self {
		Self {
			m,
			n,
			elements: vec![R::ZERO; m * n].into_boxed_slice(),
		}
	}

	pub fn identity(n: usize) -> Self {
		let mut out = Self::zeros(n, n);
		for i in 0..n {
			out[(i, i)] = R::ONE;
		}
		out
	}

	/// Builds an `m`×`n` matrix by evaluating `f` at every (row, column) pair.
	pub fn from_fn(m: usize, n: usize, mut f: impl FnMut(usize, usize) -> R) -> Self {
		let mut out = Self::zeros(m, n);
		for i in 0..m {
			for j in 0..n {
				out[(i, j)] = f(i, j);
			}
		}
		out
	}

	pub fn elements(&self) -> &[R] {
		&self.elements
	}

	pub fn dim(&self) -> (usize, usize) {
		(self.m, self.n)
	}

	pub fn is_square(&self) -> bool {
		self.m == self.n
	}

	/// Computes the full product `a * b` into `c`.
	///
	/// This is the schoolbook algorithm with O(m·n·k) scalar multiplications;
	/// the randomized product check exists to avoid exactly this cost.
	///
	/// ## Preconditions
	///
	/// * the inner dimensions of `a` and `b` must agree, and `c` must have
	///   the outer dimensions of the product
	pub fn mul_into(a: &Self, b: &Self, c: &mut Self) {
		assert_eq!(a.n(), b.m());
		assert_eq!(a.m(), c.m());
		assert_eq!(b.n(), c.n());

		for i in 0..c.m() {
			for j in 0..c.n() {
				c[(i, j)] = (0..a.n()).map(|k| a[(i, k)] * b[(k, j)]).sum();
			}
		}
	}

	/// Computes the matrix-vector product `self * x` into `y` with O(m·n)
	/// scalar multiplications.
	///
	/// ## Preconditions
	///
	/// * `x` must have length `n` and `y` length `m`
	pub fn mul_vec_into(&self, x: &[R], y: &mut [R]) {
		assert_eq!(self.n(), x.len());
		assert_eq!(self.m(), y.len());

		for i in 0..y.len() {
			y[i] = (0..self.n()).map(|j| self[(i, j)] * x[j]).sum();
		}
	}
}

impl<R: Ring> Index<(usize, usize)> for Matrix<R> {
	type Output = R;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		let (i, j) = index;
		assert!(i < self.m);
		assert!(j < self.n);
		&self.elements[i * self.n + j]
	}
}

impl<R: Ring> IndexMut<(usize, usize)> for Matrix<R> {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		let (i, j) = index;
		assert!(i < self.m);
		assert!(j < self.n);
		&mut self.elements[i * self.n + j]
	}
}
