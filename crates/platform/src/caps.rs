//! CPU capability bits.
//!
//! [`Caps`] records which instruction-set extensions the CRC kernels may use
//! on this machine. Bits 0-31 belong to x86/x86_64 and bits 32-63 to aarch64,
//! so a set detected on one architecture never satisfies a requirement from
//! another.
//!
//! ```
//! use platform::caps::x86;
//!
//! if platform::caps().has(x86::CRC32C_READY) {
//!   // SSE4.2 `crc32` is safe to call.
//! }
//! ```

use core::fmt;

/// A set of CPU features.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(pub(crate) u64);

impl Caps {
  pub const NONE: Self = Self(0);

  /// Build a set from its raw bit pattern.
  ///
  /// Only available with the `testing` feature or in test builds.
  #[cfg(any(test, feature = "testing"))]
  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u64) -> Self {
    Self(bits)
  }

  /// The raw bit pattern.
  #[cfg(any(test, feature = "testing"))]
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u64 {
    self.0
  }

  /// True when every feature in `required` is present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    self.0 & required.0 == required.0
  }

  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  const fn bit(n: u32) -> Self {
    Self(1 << n)
  }

  /// Names of the known features in this set, lowest bit first.
  pub fn feature_names(self) -> impl Iterator<Item = &'static str> {
    NAMED.iter().filter(move |(cap, _)| self.has(*cap)).map(|&(_, name)| name)
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self {
    self.union(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    self.0 |= rhs.0;
  }
}

impl fmt::Debug for Caps {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.feature_names()).finish()
  }
}

impl fmt::Display for Caps {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut names = self.feature_names();
    match names.next() {
      None => f.write_str("none"),
      Some(first) => {
        f.write_str(first)?;
        names.try_for_each(|name| write!(f, "+{name}"))
      }
    }
  }
}

const NAMED: [(Caps, &str); 4] = [
  (x86::SSE2, "sse2"),
  (x86::SSE42, "sse4.2"),
  (aarch64::NEON, "neon"),
  (aarch64::CRC, "crc"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Architecture
// ─────────────────────────────────────────────────────────────────────────────

/// Architecture this crate was compiled for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  X86_64,
  X86,
  Aarch64,
  Wasm32,
  #[default]
  Other,
}

impl Arch {
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    if cfg!(target_arch = "x86_64") {
      Self::X86_64
    } else if cfg!(target_arch = "x86") {
      Self::X86
    } else if cfg!(target_arch = "aarch64") {
      Self::Aarch64
    } else if cfg!(target_arch = "wasm32") {
      Self::Wasm32
    } else {
      Self::Other
    }
  }

  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::X86 => "x86",
      Self::Aarch64 => "aarch64",
      Self::Wasm32 => "wasm32",
      Self::Other => "other",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature bits
// ─────────────────────────────────────────────────────────────────────────────

/// x86/x86_64 features (bits 0-31).
pub mod x86 {
  use super::Caps;

  pub const SSE2: Caps = Caps::bit(0);
  pub const SSE42: Caps = Caps::bit(1);

  /// What the `crc32` instruction (CRC-32C polynomial) needs.
  pub const CRC32C_READY: Caps = SSE42;
}

/// aarch64 features (bits 32-63).
pub mod aarch64 {
  use super::Caps;

  /// Baseline on every AArch64 target.
  pub const NEON: Caps = Caps::bit(32);
  pub const CRC: Caps = Caps::bit(33);

  /// What the `crc32c*` instructions need.
  pub const CRC_READY: Caps = CRC;
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{string::ToString, vec::Vec};

  use super::*;

  #[test]
  fn empty_set_only_satisfies_empty_requirements() {
    assert!(Caps::NONE.has(Caps::NONE));
    assert!(!Caps::NONE.has(x86::SSE42));
    assert!(Caps::NONE.is_empty());
  }

  #[test]
  fn architectures_do_not_overlap() {
    let x = x86::SSE2 | x86::SSE42;
    let a = aarch64::NEON | aarch64::CRC;
    assert_eq!(x.bits() & a.bits(), 0);
    assert!(x.bits() < 1 << 32);
    assert!(a.bits() >= 1 << 32);
    assert!(!x.has(aarch64::CRC_READY));
    assert!(!a.has(x86::CRC32C_READY));
  }

  #[test]
  fn union_accumulates() {
    let mut caps = Caps::NONE;
    caps |= x86::SSE2;
    caps |= x86::SSE42;
    assert!(caps.has(x86::SSE2 | x86::SSE42));
    assert_eq!(Caps::from_bits(caps.bits()), caps);
  }

  #[test]
  fn display_joins_names() {
    let caps = x86::SSE2 | x86::SSE42;
    assert_eq!(caps.feature_names().collect::<Vec<_>>(), ["sse2", "sse4.2"]);
    assert_eq!(caps.to_string(), "sse2+sse4.2");
    assert_eq!(Caps::NONE.to_string(), "none");
    assert_eq!(Arch::current().to_string(), Arch::current().name());
  }
}
