//! Arbitrary precision integers for the exact converter.

use std::cmp::Ordering;

/// Unsigned integer stored as little-endian `u32` limbs, trimmed so the top
/// limb is nonzero (zero is a single zero limb).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Big {
	x: Vec<u32>,
}

impl Big {
	pub(crate) fn from_u32(value: u32) -> Big {
		Big { x: vec![value] }
	}

	pub(crate) fn is_zero(&self) -> bool {
		self.x.len() == 1 && self.x[0] == 0
	}

	pub(crate) fn bit_len(&self) -> u64 {
		let top = self.x[self.x.len() - 1];
		(self.x.len() as u64 - 1) * 32 + u64::from(32 - top.leading_zeros())
	}

	/// `self = self * m + a`
	pub(crate) fn multadd(&mut self, m: u32, a: u32) {
		let mut carry = u64::from(a);
		for limb in &mut self.x {
			let y = u64::from(*limb) * u64::from(m) + carry;
			*limb = y as u32;
			carry = y >> 32;
		}
		if carry != 0 {
			self.x.push(carry as u32);
		}
		self.trim();
	}

	pub(crate) fn mult(&self, other: &Big) -> Big {
		let (a, b) = if self.x.len() >= other.x.len() { (self, other) } else { (other, self) };

		let mut c = vec![0_u32; a.x.len() + b.x.len()];
		for (i, &y) in b.x.iter().enumerate() {
			if y == 0 {
				continue;
			}
			let mut carry = 0_u64;
			for (j, &z) in a.x.iter().enumerate() {
				let product = u64::from(z) * u64::from(y) + u64::from(c[i + j]) + carry;
				c[i + j] = product as u32;
				carry = product >> 32;
			}
			c[i + a.x.len()] = carry as u32;
		}

		let mut result = Big { x: c };
		result.trim();
		result
	}

	pub(crate) fn lshift(&mut self, bits: u64) {
		if self.is_zero() || bits == 0 {
			return;
		}

		let k = (bits % 32) as u32;
		if k != 0 {
			let mut carry = 0_u32;
			for limb in &mut self.x {
				let z = *limb;
				*limb = (z << k) | carry;
				carry = z >> (32 - k);
			}
			if carry != 0 {
				self.x.push(carry);
			}
		}

		let n = (bits / 32) as usize;
		if n != 0 {
			self.x.splice(0..0, std::iter::repeat(0).take(n));
		}
	}

	/// Halves in place, dropping the lowest bit.
	pub(crate) fn rshift1(&mut self) {
		let mut carry = 0_u32;
		for limb in self.x.iter_mut().rev() {
			let z = *limb;
			*limb = (z >> 1) | (carry << 31);
			carry = z & 1;
		}
		self.trim();
	}

	/// `self -= other`; `other` must not be larger than `self`.
	pub(crate) fn diff(&mut self, other: &Big) {
		debug_assert!(*self >= *other);

		let mut borrow = 0_i64;
		for i in 0..self.x.len() {
			let y = i64::from(self.x[i]) - i64::from(other.x.get(i).copied().unwrap_or(0)) - borrow;
			if y < 0 {
				self.x[i] = (y + (1 << 32)) as u32;
				borrow = 1;
			} else {
				self.x[i] = y as u32;
				borrow = 0;
			}
		}
		self.trim();
	}

	fn trim(&mut self) {
		while self.x.len() > 1 && self.x[self.x.len() - 1] == 0 {
			self.x.pop();
		}
	}
}

impl Ord for Big {
	fn cmp(&self, other: &Big) -> Ordering {
		self.x
			.len()
			.cmp(&other.x.len())
			.then_with(|| self.x.iter().rev().cmp(other.x.iter().rev()))
	}
}

impl PartialOrd for Big {
	fn partial_cmp(&self, other: &Big) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn big(value: u128) -> Big {
		let mut result = Big::from_u32(0);
		for shift in (0..4).rev() {
			result.multadd(1 << 16, 0);
			result.multadd(1 << 16, (value >> (shift * 32)) as u32);
		}
		result
	}

	fn value(big: &Big) -> u128 {
		big.x.iter().rev().fold(0, |acc, limb| (acc << 32) | u128::from(*limb))
	}

	#[test]
	fn multadd_accumulates_digits() {
		let mut b = Big::from_u32(0);
		for digit in b"340282366920938463463374607431768211455" {
			b.multadd(10, u32::from(digit - b'0'));
		}
		assert_eq!(value(&b), u128::MAX);
		assert_eq!(b.bit_len(), 128);
	}

	#[test]
	fn multiplication_matches_u128() {
		let a = big(0xffff_ffff_ffff_fff1);
		let b = big(0x1234_5678_9abc_def0);
		assert_eq!(value(&a.mult(&b)), 0xffff_ffff_ffff_fff1_u128 * 0x1234_5678_9abc_def0);
		assert!(a.mult(&Big::from_u32(0)).is_zero());
	}

	#[test]
	fn shifts() {
		let mut b = big(0xabcd);
		b.lshift(100);
		assert_eq!(value(&b), 0xabcd << 100);
		b.rshift1();
		assert_eq!(value(&b), 0xabcd << 99);

		let mut one = Big::from_u32(1);
		one.rshift1();
		assert!(one.is_zero());
		assert_eq!(one.bit_len(), 0);
	}

	#[test]
	fn difference_borrows_across_limbs() {
		let mut a = big(1 << 96);
		a.diff(&big(1));
		assert_eq!(value(&a), (1 << 96) - 1);
		a.diff(&a.clone());
		assert!(a.is_zero());
	}

	#[test]
	fn ordering_compares_magnitudes() {
		assert!(big(1 << 64) > big(u128::from(u64::MAX)));
		assert!(big(5) < big(6));
		assert_eq!(big(77).cmp(&big(77)), Ordering::Equal);
	}
}
