//! Exact leading bits of powers of five.
//!
//! `10^n = 5^n × 2^n`, so tabulating powers of five is enough: the factor of
//! two folds into the binary exponent at lookup time. Every value is built
//! with integer arithmetic only. A rounded floating point step anywhere in
//! here would silently corrupt the fast path for some inputs.

use tracing::trace;

use crate::bigint::{BigUint, Window};
use crate::config::{check_bound, ExponentRange, RangeError};

const BASE: u32 = 5;

/// Bits kept above the 128 we extract while dividing down a power of two.
const GUARD_BITS: u32 = 192;

/// One table entry: `5^exponent ≈ mantissa × 2^binary_exponent`.
///
/// `mantissa` is truncated toward zero and always has its top bit set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Power {
	pub exponent: i32,
	pub mantissa: u64,
	pub binary_exponent: i16,
	pub window: Window,
}

/// Power of two we start from for `5^-magnitude`.
///
/// `233 / 100` over-estimates `log2(5)`, so the quotient keeps at least
/// `GUARD_BITS` significant bits.
pub fn scale_for(magnitude: u32) -> u32 {
	magnitude * 233 / 100 + GUARD_BITS
}

/// Exact value behind an entry: `5^exponent` for non-negative exponents,
/// `floor(2^scale / 5^-exponent)` otherwise, together with `scale`.
pub fn exact(exponent: i32) -> (BigUint, u32) {
	let magnitude = exponent.unsigned_abs();
	if exponent >= 0 {
		let mut value = BigUint::from_u64(1);
		for _ in 0..magnitude {
			value.mul_small(BASE);
		}
		(value, 0)
	} else {
		let scale = scale_for(magnitude);
		let mut value = BigUint::power_of_two(scale);
		for _ in 0..magnitude {
			value.div_small(BASE);
		}
		(value, scale)
	}
}

pub fn compute(exponent: i32) -> Result<Power, RangeError> {
	check_bound(exponent)?;

	let (value, scale) = exact(exponent);
	let window = value.top_128();
	let binary_exponent = window.msb as i32 - 63 - scale as i32;

	let power = Power {
		exponent,
		mantissa: window.hi,
		binary_exponent: binary_exponent as i16,
		window,
	};
	trace!(exponent, mantissa = power.mantissa, binary_exponent, "computed power");
	Ok(power)
}

pub fn table(range: ExponentRange) -> Result<Vec<Power>, RangeError> {
	range.iter().map(compute).collect()
}
