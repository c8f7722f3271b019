//! Fuzz target for the CityHash 32/64/128 families.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Single-seed variants equal the two-seed form with `K2`
//! - Unseeded 128-bit hashes equal the seeded form with the derived seed
//! - Pointer-and-length entry points equal the slice entry points

#![no_main]

use arbitrary::Arbitrary;
use cityhash::{Hash128, K2, adapt, raw};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  seed0: u64,
  seed1: u64,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let h32 = cityhash::hash32(data);
  let h64 = cityhash::hash64(data);
  let h128 = cityhash::hash128(data);

  assert_eq!(
    cityhash::hash64_with_seed(data, input.seed1),
    cityhash::hash64_with_seeds(data, K2, input.seed1),
    "single-seed mismatch"
  );

  if data.len() >= 16 {
    let lo = u64::from_le_bytes(data[..8].try_into().unwrap());
    let hi = u64::from_le_bytes(data[8..16].try_into().unwrap());
    let seed = Hash128::new(lo, hi.wrapping_add(0xc3a5_c85c_97cb_3127));
    assert_eq!(h128, cityhash::hash128_with_seed(&data[16..], seed), "derived-seed mismatch");
  }

  let seed = Hash128::new(input.seed0, input.seed1);
  // SAFETY: `data` is a live Vec for the whole block.
  unsafe {
    assert_eq!(raw::hash32(data.as_ptr(), data.len()), Some(h32), "raw hash32 mismatch");
    assert_eq!(raw::hash64(data.as_ptr(), data.len()), Some(h64), "raw hash64 mismatch");
    assert_eq!(
      raw::hash128_with_seed(data.as_ptr(), data.len(), seed),
      Some(cityhash::hash128_with_seed(data, seed)),
      "raw hash128 mismatch"
    );
  }

  if let Ok(text) = core::str::from_utf8(data) {
    assert_eq!(adapt::hash64_str(text), h64, "str mismatch");
  }
});
