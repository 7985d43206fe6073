//! Validated generator settings.

use std::ops::RangeInclusive;

use thiserror::Error;

pub const DEFAULT_LOWER: i32 = -325;
pub const DEFAULT_UPPER: i32 = 308;

/// Largest exponent magnitude accepted; keeps every binary exponent in `i16`.
pub const EXPONENT_LIMIT: i32 = 4096;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
	#[error("lower exponent {lower} must not exceed upper exponent {upper}")]
	Inverted { lower: i32, upper: i32 },

	#[error("exponent {bound} is outside the supported range -{limit}..={limit}")]
	TooWide { bound: i32, limit: i32 },
}

/// Inclusive range of decimal exponents to tabulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExponentRange {
	lower: i32,
	upper: i32,
}

impl ExponentRange {
	pub fn new(lower: i32, upper: i32) -> Result<ExponentRange, RangeError> {
		check_bound(lower)?;
		check_bound(upper)?;
		if lower > upper {
			return Err(RangeError::Inverted { lower, upper });
		}
		Ok(ExponentRange { lower, upper })
	}

	pub fn lower(&self) -> i32 {
		self.lower
	}

	pub fn upper(&self) -> i32 {
		self.upper
	}

	/// Number of exponents covered; never zero.
	pub fn count(&self) -> usize {
		(self.upper - self.lower) as usize + 1
	}

	pub fn iter(&self) -> RangeInclusive<i32> {
		self.lower..=self.upper
	}
}

impl Default for ExponentRange {
	fn default() -> ExponentRange {
		ExponentRange { lower: DEFAULT_LOWER, upper: DEFAULT_UPPER }
	}
}

pub(crate) fn check_bound(bound: i32) -> Result<(), RangeError> {
	if bound.unsigned_abs() > EXPONENT_LIMIT.unsigned_abs() {
		return Err(RangeError::TooWide { bound, limit: EXPONENT_LIMIT });
	}
	Ok(())
}
