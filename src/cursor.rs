//! Forward-only reader over the bytes of a candidate literal.

/// Bounds-checked position inside a byte slice.
///
/// Cursors are `Copy`, so saving a position is just a copy and restoring it
/// is an assignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	offset: usize,
}

impl<'a> Cursor<'a> {
	pub fn new(bytes: &'a [u8]) -> Cursor<'a> {
		Cursor { bytes, offset: 0 }
	}

	/// Starts reading at `offset`, clamped to the end of `bytes`.
	pub fn at(bytes: &'a [u8], offset: usize) -> Cursor<'a> {
		Cursor { bytes, offset: offset.min(bytes.len()) }
	}

	pub fn offset(&self) -> usize {
		self.offset
	}

	pub fn is_at_end(&self) -> bool {
		self.offset >= self.bytes.len()
	}

	pub fn rest(&self) -> &'a [u8] {
		&self.bytes[self.offset..]
	}

	/// Bytes between `start` and the current position.
	pub fn since(&self, start: Cursor<'a>) -> &'a [u8] {
		&self.bytes[start.offset..self.offset]
	}

	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.offset).copied()
	}

	pub fn bump(&mut self) {
		if !self.is_at_end() {
			self.offset += 1;
		}
	}

	/// Consumes `byte` if it is next.
	pub fn eat(&mut self, byte: u8) -> bool {
		if self.peek() == Some(byte) {
			self.offset += 1;
			true
		} else {
			false
		}
	}

	/// Consumes `byte` if it is next, ignoring ASCII case.
	pub fn eat_ignore_case(&mut self, byte: u8) -> bool {
		match self.peek() {
			Some(next) if next.eq_ignore_ascii_case(&byte) => {
				self.offset += 1;
				true
			}
			_ => false,
		}
	}

	/// Consumes every byte of `word` (ASCII case-insensitively) or nothing.
	pub fn eat_word_ignore_case(&mut self, word: &[u8]) -> bool {
		let rest = self.rest();
		if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word) {
			self.offset += word.len();
			true
		} else {
			false
		}
	}

	pub fn peek_digit(&self) -> Option<u8> {
		match self.peek() {
			Some(byte @ b'0'..=b'9') => Some(byte - b'0'),
			_ => None,
		}
	}

	/// Consumes a decimal digit and returns its value.
	pub fn eat_digit(&mut self) -> Option<u8> {
		let digit = self.peek_digit()?;
		self.offset += 1;
		Some(digit)
	}

	/// Consumes a run of decimal digits and returns it.
	pub fn eat_digits(&mut self) -> &'a [u8] {
		let start = *self;
		while self.peek_digit().is_some() {
			self.offset += 1;
		}
		self.since(start)
	}
}
