//! Fast, correctly rounded conversion of decimal literals to `f64`.
//!
//! Most literals are converted with a single 64×64-bit multiplication against
//! a precomputed power of five (see [`fast`]). Whenever that product cannot be
//! proven to round the same way the exact value does, the literal is handed
//! to an exact big-integer converter (see [`fallback`]), so every result is
//! the nearest double, ties to even.
//!
//! ```
//! assert_eq!(dconv::parse("0.1"), Ok(0.1));
//! assert_eq!(dconv::parse_partial(b"-2.5e3, 7"), Ok((-2500.0, 6)));
//! assert_eq!(dconv::atod("1e400"), Some(f64::INFINITY));
//! ```
//!
//! The grammar is fixed and locale independent: an optional `-`, then either
//! a number without redundant leading zeros (`0`, `12`, `0.5`, `1e-7`) or one
//! of `inf`, `infinity` and `nan` in any case. Whitespace is never skipped.

pub mod cursor;
pub mod fallback;
pub mod fast;
#[doc(hidden)]
pub mod powers;
pub mod scan;

mod bignum;
mod error;

use std::ffi::CStr;
use std::ops::Range;

use tracing::trace;

pub use crate::error::{Error, Reason, Result};

use crate::cursor::Cursor;
use crate::scan::Scanned;

/// Converts the literal at the cursor, advancing past it.
fn convert(cursor: &mut Cursor<'_>) -> Result<f64> {
	let start = *cursor;

	let literal = match scan::scan(cursor)? {
		Scanned::Literal(literal) => literal,
		Scanned::Overflow => {
			trace!(offset = start.offset(), "significand overflowed, converting exactly");
			*cursor = start;
			return fallback::convert_at(cursor);
		}
	};

	if let Some(value) = literal.special_value() {
		return Ok(value);
	}

	if !literal.is_fast_path_eligible() {
		trace!(offset = start.offset(), digits = literal.digit_count, "too many digits, converting exactly");
	} else if let Some(value) = fast::reconstruct(&literal) {
		return Ok(value);
	} else {
		trace!(
			offset = start.offset(),
			exponent = literal.decimal_exponent,
			"rounding not certified, converting exactly"
		);
	}

	*cursor = start;
	fallback::convert_at(cursor)
}

/// Parses the literal at the start of `input`.
///
/// Returns the value and the number of bytes it took up; whatever follows is
/// left for the caller.
pub fn parse_partial(input: &[u8]) -> Result<(f64, usize)> {
	let mut cursor = Cursor::new(input);
	let value = convert(&mut cursor)?;
	Ok((value, cursor.offset()))
}

/// Parses the literal at the start of a nul-terminated string.
///
/// The terminator is never part of the literal.
pub fn parse_cstr(input: &CStr) -> Result<(f64, usize)> {
	parse_partial(input.to_bytes())
}

/// Parses the literal starting at `range.start`, reading no further than
/// `range.end`.
///
/// The returned end position, like the offset of any error, is relative to
/// `input` and not to the range.
pub fn parse_range(input: &[u8], range: Range<usize>) -> Result<(f64, usize)> {
	let Range { start, end } = range;
	if start > end || end > input.len() {
		return Err(Error::OutOfBounds { start, end, len: input.len() });
	}

	let mut cursor = Cursor::at(&input[..end], start);
	let value = convert(&mut cursor)?;
	Ok((value, cursor.offset()))
}

/// Parses `input`, which must hold exactly one literal and nothing else.
pub fn parse(input: impl AsRef<[u8]>) -> Result<f64> {
	let input = input.as_ref();
	let (value, consumed) = parse_partial(input)?;
	if consumed != input.len() {
		return Err(Error::TrailingCharacters { offset: consumed });
	}
	Ok(value)
}

/// Parses a 64-bit floating point number from the start of `input`.
///
/// Trailing characters are ignored. `None` means `input` does not start with
/// a literal.
pub fn atod(input: &str) -> Option<f64> {
	parse_partial(input.as_bytes()).ok().map(|(value, _)| value)
}

#[cfg(test)]
mod test {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	pub fn tests() {
		test("12.345", Some(12.345));
		test("12.345e19", Some(12.345e19));
		test("-0.1e+9", Some(-0.1e+9));
		test("0.125", Some(0.125));
		test("1e20", Some(1e20));
		test("0e-19", Some(0.0));
		test("4\u{0}12", Some(4.0));
		test("5.9e-76", Some(5.9e-76));
		test("Inf", Some(f64::INFINITY));
		test("-Inf", Some(f64::NEG_INFINITY));
		test("InFiNiTy", Some(f64::INFINITY));
		test("+InFiNiTy", None);
		test("1e-324", Some(0.0));
		test("-1e-324", Some(-0.0));
		test("1.000000000116415321826934814453125", Some(1.000000000116415321826934814453125));
		test("42.0000000000000000001", Some(42.0000000000000000001));
		test(".125", None);
		test("0.y", None);
		test("000e1", None);
		test("-000", None);
		test("0,0", Some(0.0));
		test("-0,0", Some(-0.0));
		test("-0e-1000000", Some(-0.0));
		test("1e309", Some(f64::INFINITY));
		test("-1e309", Some(f64::NEG_INFINITY));
		test("18e307", Some(f64::INFINITY));
		test("922337203685477529599999e-5", Some(9223372036854774784.0));
		test("922337203685477529600001e-5", Some(9223372036854775808.0));
	}

	fn test(input: &str, val: Option<f64>) {
		let result = atod(input);
		assert_eq!(result, val, "{input}");
		if let (Some(result), Some(val)) = (result, val) {
			assert_eq!(result.is_sign_positive(), val.is_sign_positive(), "{input}");
		}
	}

	#[test]
	fn nan_is_recognized() {
		assert!(atod("nan").is_some_and(f64::is_nan));
		assert!(atod("-NaN").is_some_and(|value| value.is_nan() && value.is_sign_negative()));
	}

	#[test]
	fn every_route_reports_the_same_end() {
		// Fast path, too many digits, wraparound and an uncertified product.
		for input in ["1.5e10", "1.00000000000000000001", "123456789012345678901234567890", "9007199254740993e-400"] {
			let (_, consumed) = parse_partial(format!("{input}xyz").as_bytes()).unwrap();
			assert_eq!(consumed, input.len(), "{input}");
		}
	}

	#[test]
	fn huge_exponents_survive_leading_fraction_zeros() {
		let zeros = "0".repeat(1999);
		test(&format!("0.{zeros}1e20000"), Some(f64::INFINITY));
		test(&format!("-0.{zeros}1e20000"), Some(f64::NEG_INFINITY));
		test(&format!("0.{zeros}1e2000"), Some(1.0));
		test(&format!("0.{zeros}1e2049"), Some(1e49));
		test(&format!("1{zeros}e-20000"), Some(0.0));
		test(&format!("0.{zeros}1e99999999999999999999"), Some(f64::INFINITY));
	}

	#[test]
	fn overflowed_literal_is_still_validated() {
		let input = b"123456789012345678901234567890.";
		assert_eq!(
			parse_partial(input),
			Err(Error::Syntax { offset: 0, reason: Reason::MissingFractionDigits })
		);
	}
}
