//! Every CRC kernel this machine can run agrees with the bitwise reference.
//!
//! The portable kernel must always be reachable, so these tests also pin the
//! CRC family on hosts without hardware CRC (wasm32, old x86, etc.).

use cityhash::{
  crc::{
    CRC256_MIN_LEN,
    dispatch::{self, CrcKernelId},
  },
  hash_crc256,
};

/// Deterministic pseudo-random bytes (64-bit LCG, top byte per step).
fn deterministic_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut x = seed;
  (0..len)
    .map(|_| {
      x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
      (x >> 56) as u8
    })
    .collect()
}

/// Lengths around the 240-byte block and the padding boundary.
const LENGTHS: [usize; 14] = [0, 1, 7, 64, 239, 240, 241, 479, 480, 481, 900, 901, 1024, 4099];

// ─────────────────────────────────────────────────────────────────────────────
// Portable Fallback
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn portable_is_always_available() {
  let data = deterministic_bytes(300, 1);
  assert!(dispatch::crc256_with_kernel(CrcKernelId::Portable, &data).is_some());
  assert!(dispatch::crc256_with_kernel(CrcKernelId::Reference, &data).is_some());
}

#[test]
fn selected_kernel_is_never_the_reference() {
  assert_ne!(dispatch::kernel_id(), CrcKernelId::Reference);
  assert_eq!(dispatch::kernel_name(), dispatch::kernel_id().as_str());
}

// ─────────────────────────────────────────────────────────────────────────────
// Differential
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn available_kernels_match_reference() {
  for len in LENGTHS {
    let data = deterministic_bytes(len, 0x9e37_79b9_7f4a_7c15 ^ len as u64);
    let expected = dispatch::crc256_with_kernel(CrcKernelId::Reference, &data).unwrap();
    for id in CrcKernelId::ALL {
      if let Some(got) = dispatch::crc256_with_kernel(id, &data) {
        assert_eq!(got, expected, "kernel={} len={len}", id.as_str());
      }
    }
    assert_eq!(hash_crc256(&data), expected, "dispatch len={len}");
  }
}

#[test]
fn short_inputs_differ_from_zero_padding() {
  // Padding is keyed by the true length, so a short input and the same bytes
  // explicitly zero-padded to the block size hash differently.
  let short = deterministic_bytes(100, 7);
  let mut padded = short.clone();
  padded.resize(CRC256_MIN_LEN, 0);
  assert_ne!(hash_crc256(&short), hash_crc256(&padded));
}

#[test]
fn foreign_kernels_report_unavailable() {
  let data = deterministic_bytes(512, 3);
  #[cfg(not(target_arch = "x86_64"))]
  assert_eq!(dispatch::crc256_with_kernel(CrcKernelId::X86Sse42, &data), None);
  #[cfg(not(target_arch = "aarch64"))]
  assert_eq!(dispatch::crc256_with_kernel(CrcKernelId::Aarch64Crc, &data), None);
  let _ = data;
}

#[test]
fn names_round_trip() {
  for id in CrcKernelId::ALL {
    assert_eq!(dispatch::id_from_name(id.as_str()), Some(id));
  }
  assert_eq!(dispatch::id_from_name("avx512"), None);
}
