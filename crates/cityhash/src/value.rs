//! The 128-bit hash value.

use core::fmt;

use crate::mix::hash128_to_64;

/// A 128-bit CityHash value: an ordered `(low, high)` pair of 64-bit words.
///
/// Also used as the seed type of the 128-bit family. The in-memory layout is
/// `low` then `high`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct Hash128 {
  pub low: u64,
  pub high: u64,
}

impl Hash128 {
  #[inline]
  #[must_use]
  pub const fn new(low: u64, high: u64) -> Self {
    Self { low, high }
  }

  /// Fold to 64 bits with the Murmur-style combiner.
  ///
  /// Same as [`fold128_to_64`](crate::fold128_to_64).
  #[inline]
  #[must_use]
  pub const fn fold(self) -> u64 {
    hash128_to_64(self.low, self.high)
  }

  #[inline]
  #[must_use]
  pub const fn to_u128(self) -> u128 {
    ((self.high as u128) << 64) | self.low as u128
  }

  #[inline]
  #[must_use]
  pub const fn from_u128(v: u128) -> Self {
    Self { low: v as u64, high: (v >> 64) as u64 }
  }

  /// 16 bytes, `low` first, each word little-endian.
  #[inline]
  #[must_use]
  pub fn to_le_bytes(self) -> [u8; 16] {
    let mut out = [0u8; 16];
    let (lo, hi) = out.split_at_mut(8);
    lo.copy_from_slice(&self.low.to_le_bytes());
    hi.copy_from_slice(&self.high.to_le_bytes());
    out
  }

  #[inline]
  #[must_use]
  pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
    Self::from_u128(u128::from_le_bytes(bytes))
  }
}

impl From<u128> for Hash128 {
  #[inline]
  fn from(v: u128) -> Self {
    Self::from_u128(v)
  }
}

impl From<Hash128> for u128 {
  #[inline]
  fn from(h: Hash128) -> Self {
    h.to_u128()
  }
}

impl From<(u64, u64)> for Hash128 {
  #[inline]
  fn from((low, high): (u64, u64)) -> Self {
    Self { low, high }
  }
}

impl From<Hash128> for (u64, u64) {
  #[inline]
  fn from(h: Hash128) -> Self {
    (h.low, h.high)
  }
}

impl fmt::Debug for Hash128 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Hash128({:#018x}, {:#018x})", self.low, self.high)
  }
}

impl fmt::Display for Hash128 {
  /// Hex, high word first, as a single 128-bit number.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:016x}{:016x}", self.high, self.low)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;

  #[test]
  fn u128_conversion_keeps_low_word_low() {
    let h = Hash128::new(0x0011_2233_4455_6677, 0x8899_aabb_ccdd_eeff);
    assert_eq!(h.to_u128(), 0x8899_aabb_ccdd_eeff_0011_2233_4455_6677);
    assert_eq!(Hash128::from(h.to_u128()), h);
    assert_eq!(<(u64, u64)>::from(h), (h.low, h.high));
  }

  #[test]
  fn le_bytes_put_low_first() {
    let h = Hash128::new(1, 2);
    let bytes = h.to_le_bytes();
    assert_eq!(bytes[0], 1);
    assert_eq!(bytes[8], 2);
    assert_eq!(Hash128::from_le_bytes(bytes), h);
  }

  #[test]
  fn display_is_big_endian_hex() {
    let h = Hash128::new(0xa, 0xb);
    assert_eq!(format!("{h}"), "000000000000000b000000000000000a");
  }

  #[test]
  fn fold_of_zero_is_zero() {
    assert_eq!(Hash128::default().fold(), 0);
  }
}
