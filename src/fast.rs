//! Assembles the IEEE-754 bit pattern straight from a scanned literal.
//!
//! The significand is multiplied by the cached leading bits of `5^q` and the
//! factor `2^q` goes into the exponent. Because every table entry below
//! `5^0` or above `5^27` is truncated, the 128-bit product can fall short of
//! the true value by at most two units in the last place of its upper half.
//! Whenever that slack could flip the rounding decision the result is not
//! certified and the caller has to take the exact route.

use crate::powers::{CachedPower, MAX_EXPONENT, MIN_EXPONENT, POWERS};
use crate::scan::{DecimalLiteral, LiteralKind};

/// Most significant digits a `u64` significand always holds exactly.
pub const MAX_DIGITS: u32 = 19;

const MANTISSA_BITS: u32 = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_BIAS: i64 = 1023;
const INFINITE_EXPONENT: i64 = 0x7ff;

/// Bits of the upper product word below the 53 kept ones.
const ROUND_BITS: u32 = 64 - (MANTISSA_BITS + 1);
const ROUND_MASK: u64 = (1 << ROUND_BITS) - 1;
const HALFWAY: u64 = 1 << (ROUND_BITS - 1);

/// Largest integer every smaller one of which is a double.
const MAX_EXACT_INTEGER: u64 = (1 << 53) - 1;
const MAX_EXACT_POWER: i64 = 22;

/// `5^q` fits in 63 bits up to here, so those entries carry no error.
const MAX_EXACT_CACHED_POWER: i64 = 27;

static TENS: [f64; 23] = [
	1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9,
	1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16, 1e17, 1e18, 1e19,
	1e20, 1e21, 1e22,
];

/// Attempts a certified conversion of a scanned literal.
///
/// `None` means the result could not be proven correctly rounded, never
/// that the literal is invalid.
pub fn reconstruct(literal: &DecimalLiteral) -> Option<f64> {
	if literal.kind != LiteralKind::Finite || literal.digit_count > MAX_DIGITS {
		return None;
	}
	reconstruct_parts(literal.negative, literal.significand, literal.decimal_exponent)
}

/// Same as [`reconstruct`] on the raw `(-1)^negative × significand × 10^exponent`.
pub fn reconstruct_parts(negative: bool, significand: u64, exponent: i64) -> Option<f64> {
	if significand == 0 {
		return Some(if negative { -0.0 } else { 0.0 });
	}

	if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
		return None;
	}

	if significand <= MAX_EXACT_INTEGER && (-MAX_EXACT_POWER..=MAX_EXACT_POWER).contains(&exponent) {
		// Both operands are exact doubles, so one IEEE operation rounds once.
		let value = significand as f64;
		let value = if exponent < 0 {
			value / TENS[exponent.unsigned_abs() as usize]
		} else {
			value * TENS[exponent as usize]
		};
		return Some(if negative { -value } else { value });
	}

	let shift = significand.leading_zeros();
	let normalized = significand << shift;
	let power = cached_power(exponent);

	let mut product = u128::from(normalized) * u128::from(power.mantissa);
	let mut biased = 127 + i64::from(power.binary_exponent) + exponent - i64::from(shift) + EXPONENT_BIAS;
	if product >> 127 == 0 {
		product <<= 1;
		biased -= 1;
	}

	// Subnormals and overflow are left to the exact converter.
	if biased <= 0 || biased >= INFINITE_EXPONENT {
		return None;
	}

	let high = (product >> 64) as u64;
	let low = product as u64;
	let below = high & ROUND_MASK;

	let exact = (0..=MAX_EXACT_CACHED_POWER).contains(&exponent);
	if !exact && (HALFWAY - 2..=HALFWAY).contains(&below) {
		return None;
	}

	let mut mantissa = high >> ROUND_BITS;
	let round = below & HALFWAY != 0;
	// Truncated table entries always dropped some nonzero bits.
	let sticky = below & (HALFWAY - 1) != 0 || low != 0 || !exact;
	if round && (sticky || mantissa & 1 == 1) {
		mantissa += 1;
	}

	if mantissa >> (MANTISSA_BITS + 1) != 0 {
		mantissa >>= 1;
		biased += 1;
		if biased >= INFINITE_EXPONENT {
			return None;
		}
	}

	Some(compose(negative, biased as u64, mantissa))
}

#[inline]
fn cached_power(exponent: i64) -> CachedPower {
	POWERS[(exponent - MIN_EXPONENT) as usize]
}

#[inline]
fn compose(negative: bool, biased: u64, mantissa: u64) -> f64 {
	let bits = (u64::from(negative) << 63) | (biased << MANTISSA_BITS) | (mantissa & MANTISSA_MASK);
	f64::from_bits(bits)
}
