//! Kernel selection.
//!
//! - [`Candidate`]: a kernel with capability requirements
//! - [`Selected`]: the result of kernel selection
//! - [`select`]: choose the first satisfiable candidate
//!
//! Algorithm crates list candidates from best to worst, normally ending with
//! a portable entry that requires [`Caps::NONE`]:
//!
//! ```ignore
//! use backend::{candidates, dispatch::select};
//! use platform::caps::{Caps, x86};
//!
//! let picked = select(platform::caps(), candidates![
//!     "x86_64/sse4.2" => x86::CRC32C_READY => KernelId::Sse42,
//!     "portable"      => Caps::NONE        => KernelId::Portable,
//! ]);
//! ```

use platform::Caps;

/// A kernel with capability requirements.
///
/// Candidates are ordered from best to worst. The selector takes the first
/// whose requirements are satisfied by the detected capabilities.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<F> {
  /// Human-readable name for diagnostics (e.g. "x86_64/sse4.2").
  pub name: &'static str,
  /// Required CPU capabilities. Must be a subset of detected caps.
  pub requires: Caps,
  /// The kernel (function pointer or kernel id).
  pub func: F,
}

impl<F> Candidate<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, requires: Caps, func: F) -> Self {
    Self { name, requires, func }
  }
}

/// The result of kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selected<F> {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// The selected kernel.
  pub func: F,
}

impl<F> Selected<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

/// Select the best kernel from a candidate list.
///
/// Returns the first candidate whose `requires` is satisfied by `caps`, or
/// `None` when no candidate qualifies. Lists that end in a portable entry
/// never return `None`.
#[inline]
#[must_use]
pub fn select<F: Copy>(caps: Caps, candidates: &[Candidate<F>]) -> Option<Selected<F>> {
  candidates.iter().find(|c| caps.has(c.requires)).map(|c| Selected::new(c.name, c.func))
}

/// Build a `&[Candidate<_>]` from `name => requires => func` rows.
#[macro_export]
macro_rules! candidates {
  ($($name:expr => $requires:expr => $func:expr),+ $(,)?) => {
    &[$($crate::dispatch::Candidate::new($name, $requires, $func)),+]
  };
}

#[cfg(test)]
mod tests {
  use platform::caps::{aarch64, x86};

  use super::*;

  fn fast(x: u32) -> u32 {
    x + 1
  }

  fn slow(x: u32) -> u32 {
    x + 2
  }

  #[test]
  fn first_satisfiable_candidate_wins() {
    let list: &[Candidate<fn(u32) -> u32>] = candidates![
      "fast" => x86::SSE42 => fast as fn(u32) -> u32,
      "slow" => Caps::NONE => slow as fn(u32) -> u32,
    ];

    let picked = select(x86::SSE42 | x86::SSE2, list).map(|s| s.name);
    assert_eq!(picked, Some("fast"));

    let fallback = select(aarch64::CRC, list);
    assert_eq!(fallback.map(|s| s.name), Some("slow"));
    assert_eq!(fallback.map(|s| (s.func)(1)), Some(3));
  }

  #[test]
  fn no_fallback_means_none() {
    let list: &[Candidate<u8>] = candidates!["hw" => aarch64::CRC => 1u8];
    assert_eq!(select(Caps::NONE, list), None);
  }
}
