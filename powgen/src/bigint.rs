//! Exact non-negative integers, just enough of them to build the table.

/// Arbitrary precision unsigned integer stored as little-endian `u32` limbs.
///
/// The most significant limb is never zero unless the value itself is zero,
/// which is kept as a single zero limb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigUint {
	limbs: Vec<u32>,
}

/// The 128 bits that start at the most significant set bit of a [`BigUint`].
///
/// Integers shorter than 128 bits are padded with zeros on the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
	pub hi: u64,
	pub lo: u64,
	/// Index of the most significant set bit.
	pub msb: u32,
}

impl BigUint {
	pub fn zero() -> BigUint {
		BigUint { limbs: vec![0] }
	}

	pub fn from_u64(value: u64) -> BigUint {
		let mut limbs = vec![value as u32];
		let high = (value >> 32) as u32;
		if high != 0 {
			limbs.push(high);
		}
		BigUint { limbs }
	}

	pub fn power_of_two(exponent: u32) -> BigUint {
		let mut value = BigUint::from_u64(1);
		value.shl(exponent);
		value
	}

	pub fn is_zero(&self) -> bool {
		self.limbs.len() == 1 && self.limbs[0] == 0
	}

	pub fn limbs(&self) -> &[u32] {
		&self.limbs
	}

	/// Number of significant bits; zero for the value zero.
	pub fn bit_len(&self) -> u32 {
		let top = self.limbs[self.limbs.len() - 1];
		(self.limbs.len() as u32 - 1) * 32 + (32 - top.leading_zeros())
	}

	pub fn bit(&self, index: u32) -> bool {
		match self.limbs.get((index / 32) as usize) {
			Some(limb) => (limb >> (index % 32)) & 1 != 0,
			None => false,
		}
	}

	pub fn mul_small(&mut self, factor: u32) {
		let mut carry = 0_u64;
		for limb in &mut self.limbs {
			let product = u64::from(*limb) * u64::from(factor) + carry;
			*limb = product as u32;
			carry = product >> 32;
		}
		if carry != 0 {
			self.limbs.push(carry as u32);
		}
		self.trim();
	}

	/// Divides in place and returns the remainder.
	///
	/// # Panics
	///
	/// Panics if `divisor` is zero.
	pub fn div_small(&mut self, divisor: u32) -> u32 {
		let divisor = u64::from(divisor);
		let mut remainder = 0_u64;
		for limb in self.limbs.iter_mut().rev() {
			let current = (remainder << 32) | u64::from(*limb);
			*limb = (current / divisor) as u32;
			remainder = current % divisor;
		}
		self.trim();
		remainder as u32
	}

	pub fn shl(&mut self, bits: u32) {
		if self.is_zero() {
			return;
		}

		let bit_shift = bits % 32;
		if bit_shift != 0 {
			let mut carry = 0_u32;
			for limb in &mut self.limbs {
				let wide = (u64::from(*limb) << bit_shift) | u64::from(carry);
				*limb = wide as u32;
				carry = (wide >> 32) as u32;
			}
			if carry != 0 {
				self.limbs.push(carry);
			}
		}

		let limb_shift = (bits / 32) as usize;
		if limb_shift != 0 {
			self.limbs.splice(0..0, std::iter::repeat(0).take(limb_shift));
		}
	}

	/// Extracts the leading 128 bits. Zero yields an all-zero window.
	pub fn top_128(&self) -> Window {
		if self.is_zero() {
			return Window { hi: 0, lo: 0, msb: 0 };
		}

		let msb = self.bit_len() - 1;
		let mut hi = 0_u64;
		let mut lo = 0_u64;

		for i in 0..128_u32 {
			let Some(position) = msb.checked_sub(i) else {
				break;
			};
			if self.bit(position) {
				if i < 64 {
					hi |= 1 << (63 - i);
				} else {
					lo |= 1 << (127 - i);
				}
			}
		}

		Window { hi, lo, msb }
	}

	fn trim(&mut self) {
		while self.limbs.len() > 1 && self.limbs[self.limbs.len() - 1] == 0 {
			self.limbs.pop();
		}
	}
}
