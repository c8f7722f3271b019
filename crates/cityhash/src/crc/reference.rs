//! Bitwise CRC-32C: the audit oracle for every CRC step kernel.
//!
//! One bit at a time, no tables. Slow on purpose; the portable and hardware
//! kernels must match it exactly.

#![allow(clippy::indexing_slicing)] // Bounded loop indices in const fn.

/// CRC-32C (Castagnoli), reflected.
pub(crate) const CRC32C_POLY: u32 = 0x82F6_3B78;

/// Bitwise reflected CRC-32 over `data`, no pre/post inversion.
#[must_use]
pub(crate) const fn crc32c_bitwise(init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ CRC32C_POLY } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// CRC-32C step over one little-endian 64-bit word.
///
/// Only the low 32 bits of `crc` participate; the result is zero-extended.
#[inline]
#[must_use]
pub(crate) const fn crc32c_u64(crc: u64, v: u64) -> u64 {
  crc32c_bitwise(crc as u32, &v.to_le_bytes()) as u64
}

/// The 256-bit mixer driven by the bitwise step.
pub(crate) fn crc256_reference(s: &[u8], seed: u32) -> [u64; 4] {
  super::crc256_long(s, seed, crc32c_u64)
}

// CRC-32C check value: init=0xFFFFFFFF, xorout=0xFFFFFFFF over "123456789".
const _: () = {
  let check = crc32c_bitwise(!0u32, b"123456789") ^ !0u32;
  assert!(check == 0xE306_9283);
};
