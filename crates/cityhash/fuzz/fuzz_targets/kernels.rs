//! Cross-kernel equivalence fuzzing for the CRC-assisted family.
//!
//! The oracle is the bitwise CRC-32C step. Every kernel this CPU can run, and
//! the dispatched path, must match it exactly. Also checks that
//! `hash_crc128_with_seed` is the plain seeded 128-bit hash up to the long
//! threshold.

#![no_main]

use arbitrary::Arbitrary;
use cityhash::{
  Hash128,
  crc::{
    CRC128_LONG_THRESHOLD,
    dispatch::{self, CrcKernelId},
  },
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  seed: (u64, u64),
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let seed = Hash128::from(input.seed);

  let expected = dispatch::crc256_with_kernel(CrcKernelId::Reference, data).unwrap();
  for id in CrcKernelId::ALL {
    if let Some(got) = dispatch::crc256_with_kernel(id, data) {
      assert_eq!(got, expected, "{} mismatch", id.as_str());
    }
  }
  assert_eq!(cityhash::hash_crc256(data), expected, "dispatch mismatch");

  let crc128 = cityhash::hash_crc128_with_seed(data, seed);
  if data.len() <= CRC128_LONG_THRESHOLD {
    assert_eq!(crc128, cityhash::hash128_with_seed(data, seed), "short crc128 mismatch");
  }
});
