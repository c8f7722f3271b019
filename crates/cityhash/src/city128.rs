//! CityHash128 and its seeded variant.
//!
//! Inputs under 128 bytes go through CityMurmur. Longer inputs run the same
//! 64-byte step as CityHash64, unrolled twice per iteration, then fold up to
//! four 32-byte chunks taken from the end.

use crate::{
  city64::{LongState, hash_len0to16},
  mix::{hash128_to_64, shift_mix_mul, weak_hash_len32_with_seeds},
  util::{K0, K1, fetch64, rotate, shift_mix},
  value::Hash128,
};

/// Medium-length mixer, used for `len < 128`.
fn city_murmur(s: &[u8], seed: Hash128) -> Hash128 {
  let len = s.len();
  let mut a = seed.low;
  let mut b = seed.high;
  let mut c;
  let mut d;
  if len <= 16 {
    a = shift_mix_mul(a, K1);
    c = b.wrapping_mul(K1).wrapping_add(hash_len0to16(s));
    d = shift_mix(a.wrapping_add(if len >= 8 { fetch64(s, 0) } else { c }));
  } else {
    c = hash128_to_64(fetch64(s, len - 8).wrapping_add(K1), a);
    d = hash128_to_64(b.wrapping_add(len as u64), c.wrapping_add(fetch64(s, len - 16)));
    a = a.wrapping_add(d);
    // Every 16-byte step consumed, stopping once 16 or fewer bytes remain.
    let mut offset = 0;
    let mut remaining = len;
    loop {
      a ^= shift_mix_mul(fetch64(s, offset), K1);
      a = a.wrapping_mul(K1);
      b ^= a;
      c ^= shift_mix_mul(fetch64(s, offset + 8), K1);
      c = c.wrapping_mul(K1);
      d ^= c;
      offset += 16;
      remaining -= 16;
      if remaining <= 16 {
        break;
      }
    }
  }
  a = hash128_to_64(a, c);
  b = hash128_to_64(d, b);
  Hash128::new(a ^ b, hash128_to_64(b, a))
}

/// CityHash128 of `s` with a caller-chosen seed.
#[must_use]
pub fn hash128_with_seed(s: &[u8], seed: Hash128) -> Hash128 {
  let len = s.len();
  if len < 128 {
    return city_murmur(s, seed);
  }

  // We expect len >= 128 to be the common case. Keep 56 bytes of state:
  // v, w, x, y, and z.
  let x = seed.low;
  let y = seed.high;
  let z = (len as u64).wrapping_mul(K1);
  let v0 = rotate(y ^ K1, 49).wrapping_mul(K1).wrapping_add(fetch64(s, 0));
  let v1 = rotate(v0, 42).wrapping_mul(K1).wrapping_add(fetch64(s, 8));
  let w0 = rotate(y.wrapping_add(z), 35).wrapping_mul(K1).wrapping_add(x);
  let w1 = rotate(x.wrapping_add(fetch64(s, 88)), 53).wrapping_mul(K1);
  let mut st = LongState { v: (v0, v1), w: (w0, w1), x, y, z };

  // Two 64-byte steps per iteration while at least 128 bytes remain.
  let mut offset = 0;
  let mut remaining = len;
  loop {
    st.absorb64(s, offset);
    st.absorb64(s, offset + 64);
    offset += 128;
    remaining -= 128;
    if remaining < 128 {
      break;
    }
  }

  let LongState { mut v, mut w, mut x, mut y, mut z } = st;
  x = x.wrapping_add(rotate(v.0.wrapping_add(z), 49).wrapping_mul(K0));
  y = y.wrapping_mul(K0).wrapping_add(rotate(w.1, 37));
  z = z.wrapping_mul(K0).wrapping_add(rotate(w.0, 27));
  w.0 = w.0.wrapping_mul(9);
  v.0 = v.0.wrapping_mul(K0);

  // Hash up to 4 chunks of 32 bytes, walking backwards from the end.
  let tail_end = offset + remaining;
  let mut tail_done = 0;
  while tail_done < remaining {
    tail_done += 32;
    let at = tail_end - tail_done;
    y = rotate(x.wrapping_add(y), 42).wrapping_mul(K0).wrapping_add(v.1);
    w.0 = w.0.wrapping_add(fetch64(s, at + 16));
    x = x.wrapping_mul(K0).wrapping_add(w.0);
    z = z.wrapping_add(w.1).wrapping_add(fetch64(s, at));
    w.1 = w.1.wrapping_add(v.0);
    v = weak_hash_len32_with_seeds(s, at, v.0.wrapping_add(z), v.1);
    v.0 = v.0.wrapping_mul(K0);
  }

  // At this point our 56 bytes of state should contain more than
  // enough information for a strong 128-bit hash. We use two
  // different 56-byte-to-8-byte hashes to get a 16-byte final result.
  x = hash128_to_64(x, v.0);
  y = hash128_to_64(y.wrapping_add(z), w.0);
  Hash128::new(
    hash128_to_64(x.wrapping_add(v.1), w.1).wrapping_add(y),
    hash128_to_64(x.wrapping_add(w.1), y.wrapping_add(v.1)),
  )
}

/// CityHash128 of `s`.
///
/// Inputs of at least 16 bytes take their seed from the first 16 bytes and
/// hash the rest; shorter inputs use a fixed seed.
#[must_use]
pub fn hash128(s: &[u8]) -> Hash128 {
  match s.split_first_chunk::<16>() {
    Some((head, rest)) => {
      let seed = Hash128::new(fetch64(head, 0), fetch64(head, 8).wrapping_add(K0));
      hash128_with_seed(rest, seed)
    }
    None => hash128_with_seed(s, Hash128::new(K0, K1)),
  }
}
