//! Renders the table as a self-contained Rust module.

use std::fmt;

use crate::config::ExponentRange;
use crate::power::Power;

/// A computed table ready to be written out; `Display` produces the module.
pub struct Table<'a> {
	range: ExponentRange,
	powers: &'a [Power],
}

impl<'a> Table<'a> {
	pub fn new(range: ExponentRange, powers: &'a [Power]) -> Table<'a> {
		Table { range, powers }
	}
}

impl fmt::Display for Table<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let lower = self.range.lower();
		let upper = self.range.upper();

		writeln!(f, "//! Cached powers of five for the fast binary reconstructor.")?;
		writeln!(f, "//!")?;
		writeln!(f, "//! Generated by `powgen -l {lower} -u {upper}`. Do not edit by hand.")?;
		writeln!(f)?;
		writeln!(f, "#![allow(clippy::unreadable_literal)]")?;
		writeln!(f)?;
		writeln!(f, "/// Leading 64 bits of `5^n`, truncated, and the binary exponent that")?;
		writeln!(f, "/// scales them back: `5^n ≈ mantissa × 2^binary_exponent`.")?;
		writeln!(f, "#[derive(Clone, Copy, Debug, PartialEq, Eq)]")?;
		writeln!(f, "pub struct CachedPower {{")?;
		writeln!(f, "\tpub mantissa: u64,")?;
		writeln!(f, "\tpub binary_exponent: i16,")?;
		writeln!(f, "}}")?;
		writeln!(f)?;
		writeln!(f, "/// Smallest decimal exponent covered by [`POWERS`].")?;
		writeln!(f, "pub const MIN_EXPONENT: i64 = {lower};")?;
		writeln!(f)?;
		writeln!(f, "/// Largest decimal exponent covered by [`POWERS`].")?;
		writeln!(f, "pub const MAX_EXPONENT: i64 = {upper};")?;
		writeln!(f)?;
		writeln!(f, "/// Indexed by `exponent - MIN_EXPONENT`.")?;
		writeln!(f, "pub static POWERS: [CachedPower; {}] = [", self.powers.len())?;
		for power in self.powers {
			writeln!(
				f,
				"\tCachedPower {{ mantissa: 0x{:016x}, binary_exponent: {} }}, // 5^{}",
				power.mantissa, power.binary_exponent, power.exponent
			)?;
		}
		writeln!(f, "];")
	}
}
