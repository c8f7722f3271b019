//! CityHash32.
//!
//! Lengths up to 24 bytes use closed-form mixers; longer inputs run a loop
//! over 20-byte chunks with three rotating accumulators.

#![allow(clippy::indexing_slicing)] // Length dispatch guarantees every index below.

use crate::util::{C1, C2, fetch32, fmix, mur, rotate32};

#[inline]
fn hash32_len0to4(s: &[u8]) -> u32 {
  let len = s.len() as u32;
  let mut b: u32 = 0;
  let mut c: u32 = 9;
  for &byte in s {
    // Bytes are mixed as signed chars.
    let v = byte as i8 as u32;
    b = b.wrapping_mul(C1).wrapping_add(v);
    c ^= b;
  }
  fmix(mur(b, mur(len, c)))
}

#[inline]
fn hash32_len5to12(s: &[u8]) -> u32 {
  let len = s.len();
  let mut a = len as u32;
  let mut b = a.wrapping_mul(5);
  let mut c: u32 = 9;
  let d = b;
  a = a.wrapping_add(fetch32(s, 0));
  b = b.wrapping_add(fetch32(s, len - 4));
  c = c.wrapping_add(fetch32(s, (len >> 1) & 4));
  fmix(mur(c, mur(b, mur(a, d))))
}

#[inline]
fn hash32_len13to24(s: &[u8]) -> u32 {
  let len = s.len();
  let a = fetch32(s, (len >> 1) - 4);
  let b = fetch32(s, 4);
  let c = fetch32(s, len - 8);
  let d = fetch32(s, len >> 1);
  let e = fetch32(s, 0);
  let f = fetch32(s, len - 4);
  let h = len as u32;
  fmix(mur(f, mur(e, mur(d, mur(c, mur(b, mur(a, h)))))))
}

/// Pre-mix applied to most words entering the long loop.
#[inline(always)]
fn scramble(v: u32) -> u32 {
  rotate32(v.wrapping_mul(C1), 17).wrapping_mul(C2)
}

#[inline(always)]
fn step(h: u32) -> u32 {
  rotate32(h, 19).wrapping_mul(5).wrapping_add(0xe654_6b64)
}

/// CityHash32 of `s`.
#[must_use]
pub fn hash32(s: &[u8]) -> u32 {
  let len = s.len();
  if len <= 24 {
    return if len <= 12 {
      if len <= 4 { hash32_len0to4(s) } else { hash32_len5to12(s) }
    } else {
      hash32_len13to24(s)
    };
  }

  // len > 24
  let mut h = len as u32;
  let mut g = C1.wrapping_mul(h);
  let mut f = g;
  let a0 = scramble(fetch32(s, len - 4));
  let a1 = scramble(fetch32(s, len - 8));
  let a2 = scramble(fetch32(s, len - 16));
  let a3 = scramble(fetch32(s, len - 12));
  let a4 = scramble(fetch32(s, len - 20));
  h ^= a0;
  h = step(h);
  h ^= a2;
  h = step(h);
  g ^= a1;
  g = step(g);
  g ^= a3;
  g = step(g);
  f = f.wrapping_add(a4);
  f = step(f);

  for chunk in s[..(len - 1) / 20 * 20].chunks_exact(20) {
    let a0 = scramble(fetch32(chunk, 0));
    let a1 = fetch32(chunk, 4);
    let a2 = scramble(fetch32(chunk, 8));
    let a3 = scramble(fetch32(chunk, 12));
    let a4 = fetch32(chunk, 16);
    h ^= a0;
    h = rotate32(h, 18).wrapping_mul(5).wrapping_add(0xe654_6b64);
    f = f.wrapping_add(a1);
    f = rotate32(f, 19);
    f = f.wrapping_mul(C1);
    g = g.wrapping_add(a2);
    g = rotate32(g, 18).wrapping_mul(5).wrapping_add(0xe654_6b64);
    h ^= a3.wrapping_add(a1);
    h = step(h);
    g ^= a4;
    g = g.swap_bytes().wrapping_mul(5);
    h = h.wrapping_add(a4.wrapping_mul(5));
    h = h.swap_bytes();
    f = f.wrapping_add(a0);
    // Rotate the accumulators: (f, h, g) <- (g, f, h).
    (f, h, g) = (g, f, h);
  }

  g = rotate32(g, 11).wrapping_mul(C1);
  g = rotate32(g, 17).wrapping_mul(C1);
  f = rotate32(f, 11).wrapping_mul(C1);
  f = rotate32(f, 17).wrapping_mul(C1);
  h = step(h.wrapping_add(g));
  h = rotate32(h, 17).wrapping_mul(C1);
  h = step(h.wrapping_add(f));
  rotate32(h, 17).wrapping_mul(C1)
}
