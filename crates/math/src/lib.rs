// Copyright 2025 Irreducible Inc.

//! Exact-arithmetic primitives used by the probabilistic checkers.
//!
//! This crate provides the small algebraic toolbox the checkers in
//! `probcheck_core` are built on:
//!
//! * The [`Ring`] scalar contract and its integer implementations
//! * [`F2`], the two-element field used for parity arithmetic
//! * Dense [`Matrix`] storage with schoolbook and matrix-vector products
//! * Uniform random 0/1 vector sampling from a caller-provided RNG
//!
//! Scalars are restricted to exact arithmetic on purpose: the deterministic
//! checks compare results with elementwise equality, and a floating-point
//! tolerance would change what those checks mean.

// XOR-as-addition is the intended arithmetic over GF(2).
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]

mod error;
mod f2;
mod matrix;
mod ring;

pub use error::*;
pub use f2::*;
pub use matrix::*;
pub use ring::*;
