//! CityHash64 and its seeded variants.

use crate::{
  mix::{hash_len16, hash_len16_mul, weak_hash_len32_with_seeds},
  util::{K0, K1, K2, fetch32, fetch64, rotate, shift_mix},
};

#[inline]
pub(crate) fn hash_len0to16(s: &[u8]) -> u64 {
  let len = s.len();
  if len >= 8 {
    let mul = K2.wrapping_add(len as u64 * 2);
    let a = fetch64(s, 0).wrapping_add(K2);
    let b = fetch64(s, len - 8);
    let c = rotate(b, 37).wrapping_mul(mul).wrapping_add(a);
    let d = rotate(a, 25).wrapping_add(b).wrapping_mul(mul);
    return hash_len16_mul(c, d, mul);
  }
  if len >= 4 {
    let mul = K2.wrapping_add(len as u64 * 2);
    let a = fetch32(s, 0) as u64;
    return hash_len16_mul((len as u64).wrapping_add(a << 3), fetch32(s, len - 4) as u64, mul);
  }
  if let (Some(&a), Some(&b), Some(&c)) = (s.first(), s.get(len >> 1), s.last()) {
    let y = (a as u32).wrapping_add((b as u32) << 8);
    let z = (len as u32).wrapping_add((c as u32) << 2);
    return shift_mix((y as u64).wrapping_mul(K2) ^ (z as u64).wrapping_mul(K0)).wrapping_mul(K2);
  }
  K2
}

#[inline]
fn hash_len17to32(s: &[u8]) -> u64 {
  let len = s.len();
  let mul = K2.wrapping_add(len as u64 * 2);
  let a = fetch64(s, 0).wrapping_mul(K1);
  let b = fetch64(s, 8);
  let c = fetch64(s, len - 8).wrapping_mul(mul);
  let d = fetch64(s, len - 16).wrapping_mul(K2);
  hash_len16_mul(
    rotate(a.wrapping_add(b), 43).wrapping_add(rotate(c, 30)).wrapping_add(d),
    a.wrapping_add(rotate(b.wrapping_add(K2), 18)).wrapping_add(c),
    mul,
  )
}

#[inline]
fn hash_len33to64(s: &[u8]) -> u64 {
  let len = s.len();
  let mul = K2.wrapping_add(len as u64 * 2);
  let mut a = fetch64(s, 0).wrapping_mul(K2);
  let mut b = fetch64(s, 8);
  let c = fetch64(s, len - 24);
  let d = fetch64(s, len - 32);
  let e = fetch64(s, 16).wrapping_mul(K2);
  let f = fetch64(s, 24).wrapping_mul(9);
  let g = fetch64(s, len - 8);
  let h = fetch64(s, len - 16).wrapping_mul(mul);
  let u = rotate(a.wrapping_add(g), 43).wrapping_add(rotate(b, 30).wrapping_add(c).wrapping_mul(9));
  let v = (a.wrapping_add(g) ^ d).wrapping_add(f).wrapping_add(1);
  let w = u.wrapping_add(v).wrapping_mul(mul).swap_bytes().wrapping_add(h);
  let x = rotate(e.wrapping_add(f), 42).wrapping_add(c);
  let y = v.wrapping_add(w).wrapping_mul(mul).swap_bytes().wrapping_add(g).wrapping_mul(mul);
  let z = e.wrapping_add(f).wrapping_add(c);
  a = x.wrapping_add(z).wrapping_mul(mul).wrapping_add(y).swap_bytes().wrapping_add(b);
  b = shift_mix(z.wrapping_add(a).wrapping_mul(mul).wrapping_add(d).wrapping_add(h)).wrapping_mul(mul);
  b.wrapping_add(x)
}

/// Accumulator state shared by the 64- and 128-bit long loops.
#[derive(Clone, Copy)]
pub(crate) struct LongState {
  pub(crate) v: (u64, u64),
  pub(crate) w: (u64, u64),
  pub(crate) x: u64,
  pub(crate) y: u64,
  pub(crate) z: u64,
}

impl LongState {
  /// Fold the 64-byte block at `s[offset..]`.
  #[inline(always)]
  pub(crate) fn absorb64(&mut self, s: &[u8], offset: usize) {
    let Self { v, w, x, y, z } = self;
    *x = rotate(x.wrapping_add(*y).wrapping_add(v.0).wrapping_add(fetch64(s, offset + 8)), 37).wrapping_mul(K1);
    *y = rotate(y.wrapping_add(v.1).wrapping_add(fetch64(s, offset + 48)), 42).wrapping_mul(K1);
    *x ^= w.1;
    *y = y.wrapping_add(v.0).wrapping_add(fetch64(s, offset + 40));
    *z = rotate(z.wrapping_add(w.0), 33).wrapping_mul(K1);
    *v = weak_hash_len32_with_seeds(s, offset, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
    *w = weak_hash_len32_with_seeds(s, offset + 32, z.wrapping_add(w.1), y.wrapping_add(fetch64(s, offset + 16)));
    core::mem::swap(z, x);
  }
}

/// CityHash64 of `s`.
#[must_use]
pub fn hash64(s: &[u8]) -> u64 {
  let len = s.len();
  if len <= 32 {
    return if len <= 16 { hash_len0to16(s) } else { hash_len17to32(s) };
  }
  if len <= 64 {
    return hash_len33to64(s);
  }

  // For strings over 64 bytes we hash the end first, and then as we
  // loop we keep 56 bytes of state: v, w, x, y, and z.
  let n = len as u64;
  let x = fetch64(s, len - 40);
  let y = fetch64(s, len - 16).wrapping_add(fetch64(s, len - 56));
  let z = hash_len16(fetch64(s, len - 48).wrapping_add(n), fetch64(s, len - 24));
  let v = weak_hash_len32_with_seeds(s, len - 64, n, z);
  let w = weak_hash_len32_with_seeds(s, len - 32, y.wrapping_add(K1), x);
  let x = x.wrapping_mul(K1).wrapping_add(fetch64(s, 0));
  let mut st = LongState { v, w, x, y, z };

  // Whole 64-byte blocks, leaving at least one byte for the tail reads above.
  let blocks = (len - 1) & !63;
  let mut offset = 0;
  while offset < blocks {
    st.absorb64(s, offset);
    offset += 64;
  }

  let LongState { v, w, x, y, z } = st;
  hash_len16(
    hash_len16(v.0, w.0).wrapping_add(shift_mix(y).wrapping_mul(K1)).wrapping_add(z),
    hash_len16(v.1, w.1).wrapping_add(x),
  )
}

/// CityHash64 of `s` folded with two seeds.
#[must_use]
pub fn hash64_with_seeds(s: &[u8], seed0: u64, seed1: u64) -> u64 {
  hash_len16(hash64(s).wrapping_sub(seed0), seed1)
}

/// CityHash64 of `s` folded with one seed.
///
/// Equal to `hash64_with_seeds(s, K2, seed)`.
#[must_use]
pub fn hash64_with_seed(s: &[u8], seed: u64) -> u64 {
  hash64_with_seeds(s, K2, seed)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_is_k2() {
    assert_eq!(hash64(b""), K2);
  }

  #[test]
  fn published_short_values() {
    assert_eq!(hash64(b"a"), 0xb345_4265_b6df_75e3);
    assert_eq!(hash64(b"abc"), 0x24a5_b3a0_74e7_f369);
    assert_eq!(hash64(b"foo bar baz"), 0x45bc_b7e9_1386_97be);
  }

  #[test]
  fn with_seed_is_with_seeds_k2() {
    let data = [0x5au8; 200];
    for len in [0, 1, 16, 17, 33, 64, 65, 200] {
      assert_eq!(hash64_with_seed(&data[..len], 42), hash64_with_seeds(&data[..len], K2, 42));
    }
  }
}
