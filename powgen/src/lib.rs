//! Offline generator for the cached power-of-five table used by `dconv`.
//!
//! For every decimal exponent in a range the generator computes `5^n`
//! exactly with [`bigint::BigUint`] and keeps the leading bits plus the
//! binary exponent needed to scale them back. The `powgen` binary writes
//! the result to standard output as a Rust module.

pub mod bigint;
pub mod config;
pub mod emit;
pub mod power;

pub use config::{ExponentRange, RangeError};
pub use emit::Table;
pub use power::Power;
