//! Arithmetic over the binary extension fields GF(2^n), and dense matrix
//! algebra on top of it.
//!
//! This crate provides:
//! - [`Field`] — scalar arithmetic in GF(2^n) for n = 1..=7.
//! - [`Matrix`] — dense matrices over a field: Cauchy construction,
//!   submatrix extraction, determinants, inversion, and expansion into
//!   GF(2) bit matrices.
//! - [`GfError`] — the shared error type.
//!
//! Together the Cauchy construction and the bit expansion are the algebra
//! behind `lacuna-coder`: every square submatrix of a Cauchy matrix is
//! invertible (so any K surviving shards suffice to decode), and expanding
//! field entries into bit matrices turns the per-word field products of
//! encoding into plain XORs.

mod error;
mod field;
mod matrix;

pub use error::GfError;
pub use field::Field;
pub use matrix::Matrix;
