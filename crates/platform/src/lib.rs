//! CPU capability detection for the cityhash workspace.
//!
//! This crate is the single place that asks the CPU what it can do. Hash
//! kernels never probe features themselves; they call [`caps()`] and test
//! the bits they need.
//!
//! Compile-time target features are always folded in. With `std`, runtime
//! probing adds whatever the CPU reports, once per process. Under Miri the
//! answer is empty so only portable kernels run. Tests and bare-metal users
//! can pin the answer with [`set_caps_override`] before the first query.

#![no_std]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

pub mod caps;
mod detect;

pub use caps::{Arch, Caps};
pub use detect::{OverrideError, caps, compile_time, detect_uncached, has_override, try_set_caps_override};

/// Pin the capability answer before first use.
///
/// # Panics
///
/// Panics if detection already ran. Use [`try_set_caps_override`] to handle
/// that case without panicking.
#[cold]
pub fn set_caps_override(value: Option<Caps>) {
  if let Err(err) = try_set_caps_override(value) {
    panic!("platform::set_caps_override failed: {err}");
  }
}

/// Snapshot of what detection decided, for logs and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Description {
  pub arch: Arch,
  pub caps: Caps,
  pub overridden: bool,
}

impl fmt::Display for Description {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.arch, self.caps)?;
    if self.overridden {
      f.write_str(" (override)")?;
    }
    Ok(())
  }
}

/// Describe the current platform.
#[must_use]
pub fn describe() -> Description {
  Description { arch: Arch::current(), caps: caps(), overridden: has_override() }
}
