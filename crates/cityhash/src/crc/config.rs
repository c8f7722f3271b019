//! CRC kernel runtime configuration.
//!
//! One knob: an optional forced backend, read once from
//! `CITYHASH_CRC_FORCE` (std only).
//!
//! Forced modes are always clamped to detected CPU capabilities.

use platform::Caps;

/// Environment variable consulted (once) for a forced backend.
pub const FORCE_ENV: &str = "CITYHASH_CRC_FORCE";

/// Forced backend selection for the CRC step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrcForce {
  /// Best available kernel.
  #[default]
  Auto,
  /// The portable table kernel.
  Portable,
  /// Hardware CRC instructions (if available).
  ///
  /// - x86_64: SSE4.2 `crc32`
  /// - aarch64: ARMv8 CRC extension
  Hwcrc,
}

impl CrcForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::Hwcrc => "hwcrc",
    }
  }

  /// Parse a force mode; case-insensitive, surrounding whitespace ignored.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("portable") || value.eq_ignore_ascii_case("scalar") {
      return Some(Self::Portable);
    }
    if value.eq_ignore_ascii_case("hwcrc") || value.eq_ignore_ascii_case("crc") || value.eq_ignore_ascii_case("crc32c")
    {
      return Some(Self::Hwcrc);
    }
    None
  }
}

/// Effective CRC configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcConfig {
  /// Requested force mode (env).
  pub requested_force: CrcForce,
  /// Force mode clamped to detected CPU capabilities.
  pub effective_force: CrcForce,
}

#[cfg(feature = "std")]
fn requested_force() -> CrcForce {
  use std::sync::OnceLock;
  static FORCE: OnceLock<CrcForce> = OnceLock::new();
  *FORCE.get_or_init(|| std::env::var(FORCE_ENV).ok().as_deref().and_then(CrcForce::parse).unwrap_or_default())
}

#[cfg(not(feature = "std"))]
fn requested_force() -> CrcForce {
  CrcForce::Auto
}

#[inline]
#[must_use]
#[allow(unused_variables)] // `caps` only used on x86_64/aarch64
pub(crate) fn clamp_force_to_caps(requested: CrcForce, caps: Caps) -> CrcForce {
  match requested {
    CrcForce::Auto | CrcForce::Portable => requested,
    CrcForce::Hwcrc => {
      #[cfg(target_arch = "x86_64")]
      {
        if caps.has(platform::caps::x86::CRC32C_READY) {
          return CrcForce::Hwcrc;
        }
      }
      #[cfg(target_arch = "aarch64")]
      {
        if caps.has(platform::caps::aarch64::CRC_READY) {
          return CrcForce::Hwcrc;
        }
      }
      CrcForce::Auto
    }
  }
}

/// Get the effective CRC configuration for the current platform.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  let requested_force = requested_force();
  CrcConfig { requested_force, effective_force: clamp_force_to_caps(requested_force, platform::caps()) }
}
