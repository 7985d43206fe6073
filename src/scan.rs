//! Recognizes a decimal literal and folds it into a 64-bit significand.
//!
//! Accepted grammar, with no surrounding whitespace:
//!
//! ```text
//! literal  = [ "-" ] ( number | infinity | nan )
//! number   = ( "0" | nonzero digit* ) [ "." digit+ ] [ ( "e" | "E" ) [ "+" | "-" ] digit+ ]
//! infinity = "inf" | "infinity"      (ASCII case-insensitive)
//! nan      = "nan"                   (ASCII case-insensitive)
//! ```
//!
//! A leading `+` on the number is rejected; only the exponent may carry one.

use crate::cursor::Cursor;
use crate::error::{Error, Reason, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralKind {
	Finite,
	Infinity,
	NaN,
}

/// A scanned literal: `(-1)^negative × significand × 10^decimal_exponent`.
///
/// `digit_count` counts significant digits: leading zeros, including the
/// zeros right after the decimal point in `0.00012`, are not counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalLiteral {
	pub negative: bool,
	pub significand: u64,
	pub digit_count: u32,
	pub decimal_exponent: i64,
	pub kind: LiteralKind,
}

impl DecimalLiteral {
	fn special(negative: bool, kind: LiteralKind) -> DecimalLiteral {
		DecimalLiteral { negative, significand: 0, digit_count: 0, decimal_exponent: 0, kind }
	}

	/// Whether the significand holds every digit exactly, which the fast
	/// path requires.
	pub fn is_fast_path_eligible(&self) -> bool {
		self.kind == LiteralKind::Finite && self.digit_count <= crate::fast::MAX_DIGITS
	}

	/// The value of an `Infinity` or `NaN` literal.
	pub fn special_value(&self) -> Option<f64> {
		let value = match self.kind {
			LiteralKind::Finite => return None,
			LiteralKind::Infinity => f64::INFINITY,
			LiteralKind::NaN => f64::NAN,
		};
		Some(if self.negative { -value } else { value })
	}
}

/// Outcome of a successful scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scanned {
	Literal(DecimalLiteral),
	/// The significand wrapped around 64 bits. Scanning stopped midway, so
	/// the literal has to be converted again from its first byte.
	Overflow,
}

/// Scans one literal starting at the cursor.
///
/// On success the cursor sits just past the literal (for [`Scanned::Overflow`]
/// it sits wherever scanning was abandoned). On failure the cursor is left
/// where it started and the error carries that position.
pub fn scan(cursor: &mut Cursor<'_>) -> Result<Scanned> {
	let start = *cursor;
	scan_literal(cursor).map_err(|reason| {
		*cursor = start;
		Error::Syntax { offset: start.offset(), reason }
	})
}

/// Folds one more digit in, or returns `None` when the result wrapped.
///
/// Only wraparound is caught: a product that overflows yet lands above the
/// old value slips through. That needs twenty significant digits, which
/// keeps the literal off the fast path regardless.
#[inline]
fn accumulate(significand: u64, digit: u8) -> Option<u64> {
	let next = significand.wrapping_mul(10).wrapping_add(u64::from(digit));
	if next < significand {
		None
	} else {
		Some(next)
	}
}

fn scan_literal(cursor: &mut Cursor<'_>) -> std::result::Result<Scanned, Reason> {
	let negative = cursor.eat(b'-');
	let mut significand = 0_u64;
	let mut digit_count = 0_u32;

	if cursor.eat(b'0') {
		if cursor.peek_digit().is_some() {
			return Err(Reason::LeadingZero);
		}
	} else if let Some(digit) = cursor.eat_digit() {
		significand = u64::from(digit);
		digit_count = 1;

		while let Some(digit) = cursor.eat_digit() {
			match accumulate(significand, digit) {
				Some(next) => significand = next,
				None => return Ok(Scanned::Overflow),
			}
			digit_count += 1;
		}
	} else {
		let kind = scan_special(cursor)?;
		return Ok(Scanned::Literal(DecimalLiteral::special(negative, kind)));
	}

	let mut decimal_exponent = 0_i64;

	if cursor.eat(b'.') {
		if cursor.peek_digit().is_none() {
			return Err(Reason::MissingFractionDigits);
		}

		while let Some(digit) = cursor.eat_digit() {
			match accumulate(significand, digit) {
				Some(next) => significand = next,
				None => return Ok(Scanned::Overflow),
			}
			if significand != 0 || digit_count != 0 {
				digit_count += 1;
			}
			decimal_exponent -= 1;
		}
	}

	if cursor.eat(b'e') || cursor.eat(b'E') {
		let negative_exponent = match cursor.peek() {
			Some(sign @ (b'+' | b'-')) => {
				cursor.bump();
				sign == b'-'
			}
			_ => false,
		};

		let Some(first) = cursor.eat_digit() else {
			return Err(Reason::MissingExponentDigits);
		};

		// Only saturates. Leading fraction zeros are already counted in
		// `decimal_exponent` and would cancel out a smaller bound.
		let mut exponent = i64::from(first);
		while let Some(digit) = cursor.eat_digit() {
			exponent = exponent.saturating_mul(10).saturating_add(i64::from(digit));
		}

		decimal_exponent = decimal_exponent.saturating_add(if negative_exponent { -exponent } else { exponent });
	}

	Ok(Scanned::Literal(DecimalLiteral {
		negative,
		significand,
		digit_count,
		decimal_exponent,
		kind: LiteralKind::Finite,
	}))
}

/// Matches `inf`, `infinity` or `nan` after the optional sign.
pub(crate) fn scan_special(cursor: &mut Cursor<'_>) -> std::result::Result<LiteralKind, Reason> {
	if cursor.eat_word_ignore_case(b"inf") {
		if cursor.eat_ignore_case(b'i') && !cursor.eat_word_ignore_case(b"nity") {
			return Err(Reason::InvalidToken);
		}
		Ok(LiteralKind::Infinity)
	} else if cursor.eat_word_ignore_case(b"nan") {
		Ok(LiteralKind::NaN)
	} else {
		match cursor.peek() {
			Some(b'i' | b'I' | b'n' | b'N') => Err(Reason::InvalidToken),
			_ => Err(Reason::MissingDigits),
		}
	}
}
