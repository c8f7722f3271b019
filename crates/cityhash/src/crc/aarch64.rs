//! aarch64 CRC step via the ARMv8 CRC32 extension (`crc32cx`).
//!
//! All unsafe in this file exists to call `#[target_feature]` code.

#[cfg(any(target_feature = "crc", feature = "std"))]
use core::arch::aarch64::__crc32cd;

/// # Safety
/// Caller must ensure the CPU supports the `crc` target feature.
#[cfg(any(target_feature = "crc", feature = "std"))]
#[target_feature(enable = "crc")]
#[inline]
unsafe fn crc32c_u64_crc(crc: u64, v: u64) -> u64 {
  __crc32cd(crc as u32, v) as u64
}

/// # Safety
/// Caller must ensure the CPU supports the `crc` target feature.
#[cfg(any(target_feature = "crc", feature = "std"))]
#[target_feature(enable = "crc")]
unsafe fn crc256_crc_unchecked(s: &[u8], seed: u32) -> [u64; 4] {
  // SAFETY: this closure only runs inside a function that requires `crc`.
  super::crc256_long(s, seed, |crc, v| unsafe { crc32c_u64_crc(crc, v) })
}

/// The 256-bit mixer with the ARMv8 CRC step.
#[cfg(any(target_feature = "crc", feature = "std"))]
pub(crate) fn crc256_crc(s: &[u8], seed: u32) -> [u64; 4] {
  // SAFETY: selected only when `crc` is enabled at compile time or reported
  // by `platform::caps()` (runtime detection or caller override).
  unsafe { crc256_crc_unchecked(s, seed) }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  use super::*;
  use crate::crc::reference;

  #[test]
  fn step_matches_bitwise_when_available() {
    if !std::arch::is_aarch64_feature_detected!("crc") {
      return;
    }
    for (crc, v) in [(0u64, 0u64), (0, 1), (0xffff_ffff, 0x0123_4567_89ab_cdef), (0xdead_beef_cafe_f00d, u64::MAX)] {
      // SAFETY: feature checked above.
      let hw = unsafe { crc32c_u64_crc(crc, v) };
      assert_eq!(hw, reference::crc32c_u64(crc, v));
    }
  }
}
