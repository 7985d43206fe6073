//! Exact decimal to binary conversion.
//!
//! This path rescans the literal from its first byte, builds the decimal
//! significand as a big integer and divides it out to 57 bits with the
//! remainder kept as a sticky bit, so the single rounding step at the end is
//! always correct, subnormals and overflow included. The grammar is the same
//! fixed one the scanner uses: no locale ever enters the picture.

use std::sync::LazyLock;

use tracing::debug;

use crate::bignum::Big;
use crate::cursor::Cursor;
use crate::error::{Error, Reason, Result};
use crate::scan::{scan_special, LiteralKind};

const MANTISSA_BITS: i64 = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_BIAS: i64 = 1023;
const INFINITE_EXPONENT: i64 = 0x7ff;
/// Exponent of the least significant bit of the smallest subnormal.
const MIN_BINARY_EXPONENT: i64 = -1074;

/// The quotient is scaled to have 56 or 57 significant bits.
const QUOTIENT_BITS: i64 = 56;

/// `10^(n - 1 + e)` above this is infinite whatever the digits are.
const MAX_DECIMAL_MAGNITUDE: i64 = 309;
/// `10^(n + e)` below this is under half the smallest subnormal.
const MIN_DECIMAL_MAGNITUDE: i64 = -325;

/// Digits folded into one `multadd` call.
const DIGITS_PER_CHUNK: usize = 9;

/// Number of entries in the `5^(2^i)` ladder.
const LADDER_LEVELS: usize = 11;

/// Process-wide state of the exact converter.
///
/// Holds `5^(2^i)` for `i < LADDER_LEVELS`. Built once, on first use, and
/// shared read-only by every thread afterwards.
pub struct FallbackContext {
	ladder: Vec<Big>,
}

static CONTEXT: LazyLock<FallbackContext> = LazyLock::new(FallbackContext::new);

impl FallbackContext {
	fn new() -> FallbackContext {
		let mut ladder = Vec::with_capacity(LADDER_LEVELS);
		let mut power = Big::from_u32(5);
		for _ in 1..LADDER_LEVELS {
			let next = power.mult(&power);
			ladder.push(power);
			power = next;
		}
		ladder.push(power);

		debug!(levels = ladder.len(), "initialized fallback context");
		FallbackContext { ladder }
	}

	/// `value *= 5^k`
	fn pow5mult(&self, value: &mut Big, k: u64) {
		let top = self.ladder.len() - 1;
		for (level, power) in self.ladder[..top].iter().enumerate() {
			if k & (1 << level) != 0 {
				*value = value.mult(power);
			}
		}
		for _ in 0..(k >> top) {
			*value = value.mult(&self.ladder[top]);
		}
	}

	/// `value *= 10^k`
	fn pow10mult(&self, value: &mut Big, k: u64) {
		self.pow5mult(value, k);
		value.lshift(k);
	}
}

/// The process-wide fallback context, built on first call.
pub fn context() -> &'static FallbackContext {
	&CONTEXT
}

/// The pieces of a finite literal, as written.
struct Digits<'a> {
	integral: &'a [u8],
	fraction: &'a [u8],
	exponent: i64,
}

enum Literal<'a> {
	Finite(Digits<'a>),
	Special(LiteralKind),
}

/// Converts the literal at the cursor exactly.
///
/// The cursor ends up just past the literal, or where it started if the
/// bytes are not a literal.
pub fn convert_at(cursor: &mut Cursor<'_>) -> Result<f64> {
	let start = *cursor;
	let negative = cursor.eat(b'-');

	let literal = match delimit(cursor) {
		Ok(literal) => literal,
		Err(reason) => {
			*cursor = start;
			return Err(Error::Syntax { offset: start.offset(), reason });
		}
	};

	let magnitude = match literal {
		Literal::Finite(digits) => exact(&digits),
		Literal::Special(LiteralKind::Infinity) => f64::INFINITY,
		Literal::Special(_) => f64::NAN,
	};
	Ok(if negative { -magnitude } else { magnitude })
}

/// Converts the literal at the start of `input`, returning the value and the
/// number of bytes consumed.
pub fn convert(input: &[u8]) -> Result<(f64, usize)> {
	let mut cursor = Cursor::new(input);
	let value = convert_at(&mut cursor)?;
	Ok((value, cursor.offset()))
}

fn delimit<'a>(cursor: &mut Cursor<'a>) -> std::result::Result<Literal<'a>, Reason> {
	let integral = cursor.eat_digits();
	match integral {
		[] => return scan_special(cursor).map(Literal::Special),
		[b'0', _, ..] => return Err(Reason::LeadingZero),
		_ => {}
	}

	let mut fraction: &[u8] = &[];
	if cursor.eat(b'.') {
		fraction = cursor.eat_digits();
		if fraction.is_empty() {
			return Err(Reason::MissingFractionDigits);
		}
	}

	let mut exponent = 0_i64;
	if cursor.eat_ignore_case(b'e') {
		let negative = match cursor.peek() {
			Some(sign @ (b'+' | b'-')) => {
				cursor.bump();
				sign == b'-'
			}
			_ => false,
		};

		let digits = cursor.eat_digits();
		if digits.is_empty() {
			return Err(Reason::MissingExponentDigits);
		}
		for &digit in digits {
			exponent = exponent.saturating_mul(10).saturating_add(i64::from(digit - b'0'));
		}
		if negative {
			exponent = -exponent;
		}
	}

	Ok(Literal::Finite(Digits { integral, fraction, exponent }))
}

/// Correctly rounded magnitude of `integral.fraction × 10^exponent`.
fn exact(digits: &Digits<'_>) -> f64 {
	let all = || digits.integral.iter().chain(digits.fraction).copied();
	let leading_zeros = all().take_while(|&digit| digit == b'0').count();
	let significant = digits.integral.len() + digits.fraction.len() - leading_zeros;
	if significant == 0 {
		return 0.0;
	}

	let count = i64::try_from(significant).unwrap_or(i64::MAX);
	let fraction = i64::try_from(digits.fraction.len()).unwrap_or(i64::MAX);
	let exponent = digits.exponent.saturating_sub(fraction);

	if (count - 1).saturating_add(exponent) > MAX_DECIMAL_MAGNITUDE {
		return f64::INFINITY;
	}
	if count.saturating_add(exponent) < MIN_DECIMAL_MAGNITUDE {
		return 0.0;
	}

	let context = context();
	let mut numerator = Big::from_u32(0);
	let mut chunk = 0_u32;
	let mut chunk_len = 0;
	for digit in all().skip(leading_zeros) {
		chunk = chunk * 10 + u32::from(digit - b'0');
		chunk_len += 1;
		if chunk_len == DIGITS_PER_CHUNK {
			numerator.multadd(1_000_000_000, chunk);
			chunk = 0;
			chunk_len = 0;
		}
	}
	if chunk_len != 0 {
		numerator.multadd(10_u32.pow(chunk_len as u32), chunk);
	}

	let mut denominator = Big::from_u32(1);
	if exponent >= 0 {
		context.pow10mult(&mut numerator, exponent.unsigned_abs());
	} else {
		context.pow10mult(&mut denominator, exponent.unsigned_abs());
	}

	// Scale so that numerator / denominator lies in [2^55, 2^57).
	let scale = QUOTIENT_BITS + denominator.bit_len() as i64 - numerator.bit_len() as i64;
	if scale >= 0 {
		numerator.lshift(scale.unsigned_abs());
	} else {
		denominator.lshift(scale.unsigned_abs());
	}

	let (quotient, inexact) = divide(numerator, denominator);
	f64::from_bits(round(quotient, scale, inexact))
}

/// Quotient of a division known to fit in 58 bits, and whether a remainder
/// was left over.
fn divide(mut numerator: Big, mut denominator: Big) -> (u64, bool) {
	const QUOTIENT_LIMIT: u64 = 58;

	denominator.lshift(QUOTIENT_LIMIT - 1);
	let mut quotient = 0_u64;
	for bit in (0..QUOTIENT_LIMIT).rev() {
		if numerator >= denominator {
			numerator.diff(&denominator);
			quotient |= 1 << bit;
		}
		denominator.rshift1();
	}
	(quotient, !numerator.is_zero())
}

/// Rounds `quotient × 2^-scale` (plus a nonzero tail when `sticky`) to the
/// nearest double, ties to even, and returns its bits.
fn round(quotient: u64, scale: i64, sticky: bool) -> u64 {
	let len = i64::from(64 - quotient.leading_zeros());
	let drop = (len - (MANTISSA_BITS + 1)).max(scale + MIN_BINARY_EXPONENT);
	if drop > len {
		return 0;
	}

	let drop = drop as u32;
	let mut mantissa = quotient >> drop;
	let tail = quotient & ((1 << drop) - 1);
	let half = 1 << (drop - 1);
	let sticky = sticky || tail & (half - 1) != 0;
	if tail & half != 0 && (sticky || mantissa & 1 == 1) {
		mantissa += 1;
	}

	let mut drop = i64::from(drop);
	if mantissa == 1 << (MANTISSA_BITS + 1) {
		mantissa >>= 1;
		drop += 1;
	}

	if mantissa < 1 << MANTISSA_BITS {
		// Subnormal: the exponent field stays zero.
		return mantissa;
	}

	let biased = drop - scale + MANTISSA_BITS + EXPONENT_BIAS;
	if biased >= INFINITE_EXPONENT {
		return f64::INFINITY.to_bits();
	}
	((biased as u64) << MANTISSA_BITS) | (mantissa & MANTISSA_MASK)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn bits(input: &str) -> u64 {
		let (value, consumed) = convert(input.as_bytes()).unwrap();
		assert_eq!(consumed, input.len());
		value.to_bits()
	}

	#[rstest]
	#[case("0.1", 0x3fb9_9999_9999_999a)]
	#[case("9007199254740993", 0x4340_0000_0000_0000)]
	#[case("5e-324", 0x0000_0000_0000_0001)]
	#[case("2.4703282292062328e-324", 0x0000_0000_0000_0001)]
	#[case("2.4703282292062327e-324", 0x0000_0000_0000_0000)]
	#[case("2.2250738585072011e-308", 0x000f_ffff_ffff_ffff)]
	#[case("2.2250738585072012e-308", 0x0010_0000_0000_0000)]
	#[case("1.7976931348623157e308", 0x7fef_ffff_ffff_ffff)]
	#[case("1.7976931348623158e308", 0x7fef_ffff_ffff_ffff)]
	#[case("1.7976931348623159e308", 0x7ff0_0000_0000_0000)]
	#[case("1e309", 0x7ff0_0000_0000_0000)]
	#[case("1e-400", 0x0000_0000_0000_0000)]
	#[case("-0", 0x8000_0000_0000_0000)]
	#[case("0.000", 0x0000_0000_0000_0000)]
	#[case("0e999999999999999999999", 0x0000_0000_0000_0000)]
	fn known_conversions(#[case] input: &str, #[case] expected: u64) {
		assert_eq!(bits(input), expected, "{input}");
	}

	#[test]
	fn long_literals_are_exact() {
		// Halfway between 1 and the next double, nudged up by a digit far out.
		let mut input = String::from("1.00000000000000011102230246251565404236316680908203125");
		assert_eq!(bits(&input), 1.0_f64.to_bits());
		input.push_str("00000000000000000000000000000000000000001");
		assert_eq!(bits(&input), (1.0_f64.to_bits() + 1));
	}

	#[test]
	fn digits_and_exponent_compensate() {
		let input = format!("0.{}1e2050", "0".repeat(2000));
		assert_eq!(bits(&input), 1e49_f64.to_bits());

		let input = format!("1{}e-1500", "0".repeat(1500));
		assert_eq!(bits(&input), 1.0_f64.to_bits());
	}

	#[test]
	fn specials_are_recognized() {
		assert_eq!(convert(b"-inf").unwrap().0, f64::NEG_INFINITY);
		assert!(convert(b"NaN").unwrap().0.is_nan());
	}

	#[rstest]
	#[case("00", Reason::LeadingZero)]
	#[case("1.", Reason::MissingFractionDigits)]
	#[case("1e", Reason::MissingExponentDigits)]
	#[case(".5", Reason::MissingDigits)]
	#[case("+5", Reason::MissingDigits)]
	fn rejects_what_the_scanner_rejects(#[case] input: &str, #[case] reason: Reason) {
		let mut cursor = Cursor::new(input.as_bytes());
		assert_eq!(convert_at(&mut cursor), Err(Error::Syntax { offset: 0, reason }));
		assert_eq!(cursor.offset(), 0);
	}

	#[test]
	fn matches_the_standard_library() {
		let mut seed = 0x9e37_79b9_7f4a_7c15_u64;
		for _ in 0..3_000 {
			seed ^= seed << 13;
			seed ^= seed >> 7;
			seed ^= seed << 17;
			let digits = seed % 100_000_000_000_000_000 + 1;
			let exponent = (seed >> 44) as i64 % 700 - 350;
			let input = format!("{digits}123456789e{exponent}");
			let expected: f64 = input.parse().unwrap();
			assert_eq!(bits(&input), expected.to_bits(), "{input}");
		}
	}

	#[test]
	fn context_is_shared() {
		assert!(std::ptr::eq(context(), context()));
		let mut value = Big::from_u32(1);
		context().pow5mult(&mut value, 3);
		assert_eq!(value, Big::from_u32(125));
	}
}
