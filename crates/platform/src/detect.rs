//! Capability detection, caching, and overrides.
//!
//! Detection combines two sources:
//!
//! - Compile-time features (`cfg!(target_feature = "...")`), which are always trusted.
//! - Runtime probing (`is_x86_feature_detected!` / `is_aarch64_feature_detected!`), std only.
//!
//! The result is computed once and cached: `OnceLock` with `std`, an atomic
//! state machine without. Under Miri the answer is always [`Caps::NONE`] so
//! only portable kernels run.
//!
//! An override can replace detection, but only before the first call to
//! [`caps()`]. Afterwards the cached answer is frozen.

use core::fmt;
#[cfg(feature = "std")]
use std::sync::{OnceLock, RwLock};

use crate::caps::Caps;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
use crate::caps::x86;
#[cfg(target_arch = "aarch64")]
use crate::caps::aarch64;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Why a capability override was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OverrideError {
  /// Detection already ran and its result is cached.
  AlreadyInitialized,
  /// This build has no storage for an override (no `std`, no 64-bit atomics).
  Unsupported,
}

impl fmt::Display for OverrideError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::AlreadyInitialized => f.write_str("capabilities were already detected and cached"),
      Self::Unsupported => f.write_str("capability overrides are not supported on this target"),
    }
  }
}

impl core::error::Error for OverrideError {}

// ─────────────────────────────────────────────────────────────────────────────
// Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Features the compiler was told it may assume.
#[must_use]
pub const fn compile_time() -> Caps {
  #[allow(unused_mut)]
  let mut caps = Caps::NONE;

  #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "sse2"))]
  {
    caps = caps.union(x86::SSE2);
  }
  #[cfg(all(any(target_arch = "x86_64", target_arch = "x86"), target_feature = "sse4.2"))]
  {
    caps = caps.union(x86::SSE42);
  }
  #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
  {
    caps = caps.union(aarch64::NEON);
  }
  #[cfg(all(target_arch = "aarch64", target_feature = "crc"))]
  {
    caps = caps.union(aarch64::CRC);
  }

  caps
}

#[cfg(all(feature = "std", any(target_arch = "x86_64", target_arch = "x86")))]
fn runtime() -> Caps {
  let mut caps = Caps::NONE;
  if std::arch::is_x86_feature_detected!("sse2") {
    caps |= x86::SSE2;
  }
  if std::arch::is_x86_feature_detected!("sse4.2") {
    caps |= x86::SSE42;
  }
  caps
}

#[cfg(all(feature = "std", target_arch = "aarch64"))]
fn runtime() -> Caps {
  let mut caps = Caps::NONE;
  if std::arch::is_aarch64_feature_detected!("neon") {
    caps |= aarch64::NEON;
  }
  if std::arch::is_aarch64_feature_detected!("crc") {
    caps |= aarch64::CRC;
  }
  caps
}

#[cfg(not(all(feature = "std", any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64"))))]
fn runtime() -> Caps {
  Caps::NONE
}

/// Detect without consulting the cache or the override.
#[cold]
#[must_use]
pub fn detect_uncached() -> Caps {
  if cfg!(miri) {
    return Caps::NONE;
  }
  compile_time() | runtime()
}

#[cold]
fn detect_with_override() -> Caps {
  #[cfg(feature = "std")]
  {
    if let Ok(guard) = OVERRIDE.read()
      && let Some(ov) = *guard
    {
      return ov;
    }
  }

  #[cfg(all(not(feature = "std"), target_has_atomic = "64"))]
  {
    if let Some(ov) = atomic_cache::get_override() {
      return ov;
    }
  }

  detect_uncached()
}

// ─────────────────────────────────────────────────────────────────────────────
// Cache
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "std")]
static STD_CACHE: OnceLock<Caps> = OnceLock::new();

#[cfg(feature = "std")]
static OVERRIDE: RwLock<Option<Caps>> = RwLock::new(None);

/// Capabilities of the running CPU.
///
/// The first call detects and caches; later calls are a load.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  #[cfg(feature = "std")]
  {
    *STD_CACHE.get_or_init(detect_with_override)
  }

  #[cfg(all(not(feature = "std"), target_has_atomic = "64"))]
  {
    atomic_cache::get_or_init(detect_with_override)
  }

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "64")))]
  {
    detect_with_override()
  }
}

/// Replace detection with `value` (or restore detection with `None`).
///
/// Contract: pre-init only. Once [`caps()`] has cached an answer this returns
/// [`OverrideError::AlreadyInitialized`] and nothing changes.
#[cold]
pub fn try_set_caps_override(value: Option<Caps>) -> Result<(), OverrideError> {
  #[cfg(feature = "std")]
  {
    if STD_CACHE.get().is_some() {
      return Err(OverrideError::AlreadyInitialized);
    }
    match OVERRIDE.write() {
      Ok(mut guard) => {
        *guard = value;
        Ok(())
      }
      Err(_) => Err(OverrideError::Unsupported),
    }
  }

  #[cfg(all(not(feature = "std"), target_has_atomic = "64"))]
  {
    atomic_cache::try_set_override(value)
  }

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "64")))]
  {
    let _ = value;
    Err(OverrideError::Unsupported)
  }
}

/// Whether an override is currently installed.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  #[cfg(feature = "std")]
  {
    OVERRIDE.read().map(|g| g.is_some()).unwrap_or(false)
  }

  #[cfg(all(not(feature = "std"), target_has_atomic = "64"))]
  {
    atomic_cache::has_override()
  }

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "64")))]
  {
    false
  }
}

#[cfg(all(not(feature = "std"), target_has_atomic = "64"))]
mod atomic_cache {
  use core::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};

  use super::{Caps, OverrideError};

  const UNINIT: u8 = 0;
  const BUSY: u8 = 1;
  const READY: u8 = 2;

  static STATE: AtomicU8 = AtomicU8::new(UNINIT);
  static CACHED: AtomicU64 = AtomicU64::new(0);

  static OVERRIDE_SET: AtomicBool = AtomicBool::new(false);
  static OVERRIDE_BITS: AtomicU64 = AtomicU64::new(0);

  pub fn get_or_init(detect: fn() -> Caps) -> Caps {
    if STATE.load(Ordering::Acquire) == READY {
      return Caps(CACHED.load(Ordering::Acquire));
    }

    match STATE.compare_exchange(UNINIT, BUSY, Ordering::AcqRel, Ordering::Acquire) {
      Ok(_) => {
        let caps = detect();
        CACHED.store(caps.0, Ordering::Release);
        STATE.store(READY, Ordering::Release);
        caps
      }
      Err(_) => {
        while STATE.load(Ordering::Acquire) != READY {
          core::hint::spin_loop();
        }
        Caps(CACHED.load(Ordering::Acquire))
      }
    }
  }

  pub fn try_set_override(value: Option<Caps>) -> Result<(), OverrideError> {
    if STATE.load(Ordering::Acquire) != UNINIT {
      return Err(OverrideError::AlreadyInitialized);
    }
    OVERRIDE_BITS.store(value.map_or(0, |caps| caps.0), Ordering::Release);
    OVERRIDE_SET.store(value.is_some(), Ordering::Release);
    Ok(())
  }

  pub fn has_override() -> bool {
    OVERRIDE_SET.load(Ordering::Acquire)
  }

  pub fn get_override() -> Option<Caps> {
    has_override().then(|| Caps(OVERRIDE_BITS.load(Ordering::Acquire)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn compile_time_is_subset_of_detected() {
    if cfg!(miri) {
      return;
    }
    assert!(detect_uncached().has(compile_time()));
  }

  #[test]
  fn cached_answer_is_stable() {
    assert_eq!(caps(), caps());
  }

  #[test]
  fn override_after_init_is_rejected() {
    let _ = caps();
    assert_eq!(try_set_caps_override(Some(Caps::NONE)), Err(OverrideError::AlreadyInitialized));
    assert!(!has_override());
  }

  #[test]
  fn override_error_messages() {
    extern crate alloc;
    use alloc::string::ToString;

    assert!(OverrideError::AlreadyInitialized.to_string().contains("already"));
    assert!(OverrideError::Unsupported.to_string().contains("not supported"));
  }
}
