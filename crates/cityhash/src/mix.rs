//! Combiners built from the primitives in [`util`](crate::util).

use crate::util::{fetch64, rotate, shift_mix};

const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;

/// Murmur-inspired fold of a 128-bit pair down to 64 bits.
#[inline(always)]
pub(crate) const fn hash128_to_64(low: u64, high: u64) -> u64 {
  hash_len16_mul(low, high, K_MUL)
}

/// 16-byte combiner with the default multiplier.
#[inline(always)]
pub(crate) const fn hash_len16(u: u64, v: u64) -> u64 {
  hash128_to_64(u, v)
}

/// 16-byte combiner with a length-dependent multiplier.
#[inline(always)]
pub(crate) const fn hash_len16_mul(u: u64, v: u64, mul: u64) -> u64 {
  let mut a = (u ^ v).wrapping_mul(mul);
  a ^= a >> 47;
  let mut b = (v ^ a).wrapping_mul(mul);
  b ^= b >> 47;
  b.wrapping_mul(mul)
}

/// Weak 128-bit combiner over four words and two seeds.
///
/// Returns `(low, high)`. Not a hash on its own; used as a building block by
/// the long-input loops.
#[inline(always)]
pub(crate) const fn weak_hash_len32_with_seeds_words(
  w: u64,
  x: u64,
  y: u64,
  z: u64,
  mut a: u64,
  mut b: u64,
) -> (u64, u64) {
  a = a.wrapping_add(w);
  b = rotate(b.wrapping_add(a).wrapping_add(z), 21);
  let c = a;
  a = a.wrapping_add(x);
  a = a.wrapping_add(y);
  b = b.wrapping_add(rotate(a, 44));
  (a.wrapping_add(z), b.wrapping_add(c))
}

/// [`weak_hash_len32_with_seeds_words`] over the 32 bytes at `s[offset..]`.
#[inline(always)]
pub(crate) fn weak_hash_len32_with_seeds(s: &[u8], offset: usize, a: u64, b: u64) -> (u64, u64) {
  weak_hash_len32_with_seeds_words(
    fetch64(s, offset),
    fetch64(s, offset + 8),
    fetch64(s, offset + 16),
    fetch64(s, offset + 24),
    a,
    b,
  )
}

/// Final multiply-shift-multiply used by the CRC-assisted finalizer.
#[inline(always)]
pub(crate) const fn shift_mix_mul(v: u64, mul: u64) -> u64 {
  shift_mix(v.wrapping_mul(mul)).wrapping_mul(mul)
}
