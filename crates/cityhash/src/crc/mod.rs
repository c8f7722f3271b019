//! CRC-assisted CityHash (CityHashCrc256 / CityHashCrc128).
//!
//! A 256-bit-state long mixer whose inner step is CRC-32C of a 64-bit word.
//! Every kernel computes the same CRC, so output never depends on which one
//! runs: the portable table kernel is always available and the hardware
//! kernels (`crc32q` on x86_64, `crc32cx` on aarch64) are speedups only.
//!
//! # Entry points
//!
//! - [`hash_crc256`]: the raw 256-bit state for any length.
//! - [`hash_crc128`] / [`hash_crc128_with_seed`]: identical to the plain
//!   128-bit hash up to 900 bytes, then derived from the 256-bit state.

#![allow(clippy::indexing_slicing)] // Fixed-size scratch buffer and table lookups.

pub mod config;
#[doc(hidden)]
pub mod dispatch;
pub(crate) mod kernels;
pub(crate) mod portable;
pub(crate) mod reference;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "x86_64")]
mod x86_64;

use crate::{
  city128::{hash128, hash128_with_seed},
  mix::{hash_len16, shift_mix_mul},
  util::{K0, fetch64, rotate},
  value::Hash128,
};

/// Inputs at least this long run the 256-bit mixer directly; shorter ones
/// are zero-padded up to it.
pub const CRC256_MIN_LEN: usize = 240;

/// Inputs longer than this use the 256-bit state in the 128-bit results.
pub const CRC128_LONG_THRESHOLD: usize = 900;

/// The 256-bit-state long mixer.
///
/// `crc(acc, word)` must return CRC-32C (no pre/post inversion) of the 8
/// little-endian bytes of `word`, continuing from the low 32 bits of `acc`.
/// Requires `s.len() >= CRC256_MIN_LEN`.
#[inline(always)]
#[allow(unused_assignments)] // The final chunk advances `offset` past its last use.
pub(crate) fn crc256_long<C: Fn(u64, u64) -> u64>(s: &[u8], seed: u32, crc: C) -> [u64; 4] {
  debug_assert!(s.len() >= CRC256_MIN_LEN);
  let len = s.len();
  let n = len as u64;

  let mut a = fetch64(s, 56).wrapping_add(K0);
  let mut b = fetch64(s, 96).wrapping_add(K0);
  let mut c = hash_len16(b, n);
  let mut d = fetch64(s, 120).wrapping_mul(K0).wrapping_add(n);
  let mut r = [c, d, 0, 0];
  let mut e = fetch64(s, 184).wrapping_add(seed as u64);
  let mut f: u64 = 0;
  let mut g: u64 = 0;
  let mut h = c.wrapping_add(d);
  let mut x = seed as u64;
  let mut y: u64 = 0;
  let mut z: u64 = 0;
  let mut offset = 0;

  // (a, b, c) <- (c, a, b)
  macro_rules! permute3 {
    ($a:ident, $b:ident, $c:ident) => {
      core::mem::swap(&mut $a, &mut $b);
      core::mem::swap(&mut $a, &mut $c);
    };
  }

  // Absorb the 40 bytes at `offset`.
  macro_rules! chunk {
    ($r:expr) => {
      permute3!(x, z, y);
      b = b.wrapping_add(fetch64(s, offset));
      c = c.wrapping_add(fetch64(s, offset + 8));
      d = d.wrapping_add(fetch64(s, offset + 16));
      e = e.wrapping_add(fetch64(s, offset + 24));
      f = f.wrapping_add(fetch64(s, offset + 32));
      a = a.wrapping_add(b);
      h = h.wrapping_add(f);
      b = b.wrapping_add(c);
      f = f.wrapping_add(d);
      g = g.wrapping_add(e);
      e = e.wrapping_add(z);
      g = g.wrapping_add(x);
      z = crc(z, b.wrapping_add(g));
      y = crc(y, e.wrapping_add(h));
      x = crc(x, f.wrapping_add(a));
      e = rotate(e, $r);
      c = c.wrapping_add(e);
      offset += 40;
    };
  }

  let mut iters = len / 240;
  let mut remaining = len % 240;
  loop {
    chunk!(0);
    permute3!(a, h, c);
    chunk!(33);
    permute3!(a, h, f);
    chunk!(0);
    permute3!(b, h, f);
    chunk!(42);
    permute3!(b, h, d);
    chunk!(0);
    permute3!(b, h, e);
    chunk!(33);
    permute3!(a, h, e);
    iters -= 1;
    if iters == 0 {
      break;
    }
  }

  while remaining >= 40 {
    chunk!(29);
    e ^= rotate(a, 20);
    h = h.wrapping_add(rotate(b, 30));
    g ^= rotate(c, 40);
    f = f.wrapping_add(rotate(d, 34));
    permute3!(c, h, g);
    remaining -= 40;
  }
  if remaining > 0 {
    // Re-read the last 40 bytes, overlapping what was already absorbed.
    offset = offset + remaining - 40;
    chunk!(33);
    e ^= rotate(a, 43);
    h = h.wrapping_add(rotate(b, 42));
    g ^= rotate(c, 41);
    f = f.wrapping_add(rotate(d, 40));
  }

  r[0] ^= h;
  r[1] ^= g;
  g = g.wrapping_add(h);
  a = hash_len16(a, g.wrapping_add(z));
  x = x.wrapping_add(y << 32);
  b = b.wrapping_add(x);
  c = hash_len16(c, z).wrapping_add(h);
  d = hash_len16(d, e.wrapping_add(r[0]));
  g = g.wrapping_add(e);
  h = h.wrapping_add(hash_len16(x, f));
  e = hash_len16(a, d).wrapping_add(g);
  z = hash_len16(b, c).wrapping_add(a);
  y = hash_len16(g, h).wrapping_add(c);
  r[0] = e.wrapping_add(z).wrapping_add(y).wrapping_add(x);
  a = shift_mix_mul(a.wrapping_add(y), K0).wrapping_add(b);
  r[1] = r[1].wrapping_add(a).wrapping_add(r[0]);
  a = shift_mix_mul(a, K0).wrapping_add(c);
  r[2] = a.wrapping_add(r[1]);
  a = shift_mix_mul(a.wrapping_add(e), K0);
  r[3] = a.wrapping_add(r[2]);
  r
}

/// Run `kernel` over `s`, zero-padding short inputs to [`CRC256_MIN_LEN`].
#[inline]
pub(crate) fn crc256_with(kernel: kernels::Crc256Fn, s: &[u8]) -> [u64; 4] {
  let len = s.len();
  if len >= CRC256_MIN_LEN {
    return kernel(s, 0);
  }
  let mut buf = [0u8; CRC256_MIN_LEN];
  buf[..len].copy_from_slice(s);
  kernel(&buf, !(len as u32))
}

/// The 256-bit CRC-assisted CityHash state of `s`.
#[must_use]
pub fn hash_crc256(s: &[u8]) -> [u64; 4] {
  crc256_with(dispatch::active_kernel(), s)
}

/// 128-bit CRC-assisted CityHash of `s`.
///
/// Equal to [`hash128`](crate::hash128) for inputs of at most 900 bytes.
#[must_use]
pub fn hash_crc128(s: &[u8]) -> Hash128 {
  if s.len() <= CRC128_LONG_THRESHOLD {
    return hash128(s);
  }
  let r = hash_crc256(s);
  Hash128::new(r[2], r[3])
}

/// 128-bit CRC-assisted CityHash of `s` with a seed.
///
/// Equal to [`hash128_with_seed`](crate::hash128_with_seed) for inputs of at
/// most 900 bytes.
#[must_use]
pub fn hash_crc128_with_seed(s: &[u8], seed: Hash128) -> Hash128 {
  if s.len() <= CRC128_LONG_THRESHOLD {
    return hash128_with_seed(s, seed);
  }
  let r = hash_crc256(s);
  let u = seed.high.wrapping_add(r[0]);
  let v = seed.low.wrapping_add(r[1]);
  Hash128::new(
    hash_len16(u, v.wrapping_add(r[2])),
    hash_len16(rotate(v, 32), u.wrapping_mul(K0).wrapping_add(r[3])),
  )
}
