use thiserror::Error;

/// Result type alias for the conversion functions.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a candidate literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
	/// Neither a digit, `inf`, `infinity` nor `nan` where the literal starts.
	MissingDigits,
	/// A `0` followed by another digit, as in `00` or `-01`.
	LeadingZero,
	/// A `.` with no digit after it.
	MissingFractionDigits,
	/// An `e` or `E` (and optional sign) with no digit after it.
	MissingExponentDigits,
	/// A partial `infinity` or `nan` token.
	InvalidToken,
}

impl Reason {
	fn describe(&self) -> &'static str {
		match self {
			Reason::MissingDigits => "expected a digit, `inf` or `nan`",
			Reason::LeadingZero => "redundant leading zero",
			Reason::MissingFractionDigits => "expected a digit after the decimal point",
			Reason::MissingExponentDigits => "expected a digit in the exponent",
			Reason::InvalidToken => "incomplete `infinity` or `nan`",
		}
	}
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// The bytes at `offset` do not form a literal. `offset` is where the
	/// literal was expected to start.
	#[error("invalid decimal literal at byte {offset}: {}", .reason.describe())]
	Syntax { offset: usize, reason: Reason },

	#[error("unexpected trailing characters at byte {offset}")]
	TrailingCharacters { offset: usize },

	#[error("range {start}..{end} is out of bounds for input of length {len}")]
	OutOfBounds { start: usize, end: usize, len: usize },
}

impl Error {
	/// Byte position the error refers to.
	pub fn offset(&self) -> usize {
		match *self {
			Error::Syntax { offset, .. } => offset,
			Error::TrailingCharacters { offset } => offset,
			Error::OutOfBounds { start, .. } => start,
		}
	}
}
