//! x86_64 CRC step via SSE4.2 `crc32` (CRC-32C polynomial).
//!
//! All unsafe in this file exists to call `#[target_feature]` code.

#[cfg(any(target_feature = "sse4.2", feature = "std"))]
use core::arch::x86_64::_mm_crc32_u64;

/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[cfg(any(target_feature = "sse4.2", feature = "std"))]
#[target_feature(enable = "sse4.2")]
#[inline]
unsafe fn crc32c_u64_sse42(crc: u64, v: u64) -> u64 {
  _mm_crc32_u64(crc as u32 as u64, v)
}

/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[cfg(any(target_feature = "sse4.2", feature = "std"))]
#[target_feature(enable = "sse4.2")]
unsafe fn crc256_sse42_unchecked(s: &[u8], seed: u32) -> [u64; 4] {
  // SAFETY: this closure only runs inside a function that requires `sse4.2`.
  super::crc256_long(s, seed, |crc, v| unsafe { crc32c_u64_sse42(crc, v) })
}

/// The 256-bit mixer with the SSE4.2 step.
#[cfg(any(target_feature = "sse4.2", feature = "std"))]
pub(crate) fn crc256_sse42(s: &[u8], seed: u32) -> [u64; 4] {
  // SAFETY: selected only when `sse4.2` is enabled at compile time or
  // reported by `platform::caps()` (runtime detection or caller override).
  unsafe { crc256_sse42_unchecked(s, seed) }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  use super::*;
  use crate::crc::reference;

  #[test]
  fn step_matches_bitwise_when_available() {
    if !std::arch::is_x86_feature_detected!("sse4.2") {
      return;
    }
    for (crc, v) in [(0u64, 0u64), (0, 1), (0xffff_ffff, 0x0123_4567_89ab_cdef), (0xdead_beef_cafe_f00d, u64::MAX)] {
      // SAFETY: feature checked above.
      let hw = unsafe { crc32c_u64_sse42(crc, v) };
      assert_eq!(hw, reference::crc32c_u64(crc, v));
    }
  }
}
