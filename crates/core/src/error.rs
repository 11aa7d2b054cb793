// Copyright 2025 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("the multiplication table must be square, got {len} entries for order {order}")]
	TableNotSquare { order: usize, len: usize },
	#[error("table entry ({row}, {col}) is {value}, outside the domain of order {order}")]
	EntryOutOfRange {
		row: usize,
		col: usize,
		value: usize,
		order: usize,
	},
	#[error("math error: {0}")]
	Math(#[from] probcheck_math::Error),
}
