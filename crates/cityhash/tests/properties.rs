//! Property-based tests for the CityHash families.
//!
//! These check relationships that hold for every input rather than pinned
//! outputs; see `reference_vectors.rs` for those.

use cityhash::{
  Hash128, K2, adapt, fold128_to_64, hash_crc128, hash_crc128_with_seed, hash_crc256, hash32, hash64, hash64_with_seed,
  hash64_with_seeds, hash128, hash128_with_seed, raw,
};
use proptest::prelude::*;

const K0: u64 = 0xc3a5_c85c_97cb_3127;

// ─────────────────────────────────────────────────────────────────────────────
// Strategies
// ─────────────────────────────────────────────────────────────────────────────

/// Byte vectors across every length class, including the CRC long path.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..2048)
}

/// Byte vectors that stay under the CRC128 long-input threshold.
fn arb_short() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..=900)
}

fn arb_seed128() -> impl Strategy<Value = Hash128> {
  (any::<u64>(), any::<u64>()).prop_map(|(lo, hi)| Hash128::new(lo, hi))
}

// ─────────────────────────────────────────────────────────────────────────────
// Core relationships
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn deterministic(data in arb_data()) {
    let copy = data.clone();
    prop_assert_eq!(hash32(&data), hash32(&copy));
    prop_assert_eq!(hash64(&data), hash64(&copy));
    prop_assert_eq!(hash128(&data), hash128(&copy));
    prop_assert_eq!(hash_crc256(&data), hash_crc256(&copy));
  }

  #[test]
  fn single_seed_is_k2_plus_seed(data in arb_data(), seed in any::<u64>()) {
    prop_assert_eq!(hash64_with_seed(&data, seed), hash64_with_seeds(&data, K2, seed));
  }

  #[test]
  fn fold_is_total(lo in any::<u64>(), hi in any::<u64>()) {
    let h = Hash128::new(lo, hi);
    prop_assert_eq!(fold128_to_64(h), h.fold());
  }

  #[test]
  fn unseeded_128_uses_its_own_prefix_as_seed(data in prop::collection::vec(any::<u8>(), 16..1024)) {
    let seed = Hash128::new(
      u64::from_le_bytes(data[..8].try_into().unwrap()),
      u64::from_le_bytes(data[8..16].try_into().unwrap()).wrapping_add(K0),
    );
    prop_assert_eq!(hash128(&data), hash128_with_seed(&data[16..], seed));
  }

  #[test]
  fn crc128_matches_city128_up_to_threshold(data in arb_short(), seed in arb_seed128()) {
    prop_assert_eq!(hash_crc128(&data), hash128(&data));
    prop_assert_eq!(hash_crc128_with_seed(&data, seed), hash128_with_seed(&data, seed));
  }

  #[test]
  fn crc128_long_is_tail_of_crc256(data in prop::collection::vec(any::<u8>(), 901..2048)) {
    let r = hash_crc256(&data);
    prop_assert_eq!(hash_crc128(&data), Hash128::new(r[2], r[3]));
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Adapters agree with the slice core
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn raw_matches_slice(data in arb_data(), s0 in any::<u64>(), s1 in any::<u64>()) {
    let (p, n) = (data.as_ptr(), data.len());
    // SAFETY: `p` is valid for `n` bytes for the whole block.
    unsafe {
      prop_assert_eq!(raw::hash32(p, n), Some(hash32(&data)));
      prop_assert_eq!(raw::hash64(p, n), Some(hash64(&data)));
      prop_assert_eq!(raw::hash64_with_seed(p, n, s0), Some(hash64_with_seed(&data, s0)));
      prop_assert_eq!(raw::hash64_with_seeds(p, n, s0, s1), Some(hash64_with_seeds(&data, s0, s1)));
      prop_assert_eq!(raw::hash128_with_seed(p, n, Hash128::new(s0, s1)), Some(hash128_with_seed(&data, Hash128::new(s0, s1))));
      prop_assert_eq!(raw::hash_crc128(p, n), Some(hash_crc128(&data)));
      prop_assert_eq!(raw::hash_crc256(p, n), Some(hash_crc256(&data)));
    }
  }

  #[test]
  fn array_matches_slice(arr in any::<[u8; 32]>()) {
    prop_assert_eq!(adapt::hash64_array(&arr), hash64(&arr));
  }

  #[test]
  fn value_matches_le_bytes(v in any::<u64>()) {
    prop_assert_eq!(adapt::hash64_value(v), hash64(&v.to_le_bytes()));
  }

  #[test]
  fn str_matches_utf8_bytes(s in ".{0,200}") {
    prop_assert_eq!(adapt::hash64_str(&s), hash64(s.as_bytes()));
  }

  #[test]
  fn utf16_matches_le_bytes(s in ".{0,60}") {
    let units: Vec<u16> = s.encode_utf16().collect();
    let bytes: Vec<u8> = units.iter().flat_map(|u| u.to_le_bytes()).collect();
    let expected = (bytes.len() <= adapt::WIDE_SCRATCH).then(|| hash64(&bytes));
    prop_assert_eq!(adapt::hash64_wide(&units), expected);
  }
}
