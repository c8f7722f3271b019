//! Dispatch introspection.
//!
//! Which code path a length takes, and which CRC kernel this process picked,
//! without touching the hot path.
//!
//! ```
//! use cityhash::introspect::{DispatchInfo, Family, kernel_name_for_len};
//!
//! let info = DispatchInfo::current();
//! println!("{info}");
//!
//! assert_eq!(kernel_name_for_len(Family::City64, 10), "city64/0-16");
//! assert_eq!(kernel_name_for_len(Family::City128, 100), "city128/murmur");
//! ```

use core::fmt;

use crate::crc::{
  CRC128_LONG_THRESHOLD,
  dispatch::{self, CrcKernelId},
};

/// Platform capabilities plus the CRC kernel selection.
#[derive(Clone, Copy)]
pub struct DispatchInfo {
  platform: platform::Description,
  crc_kernel: CrcKernelId,
}

impl DispatchInfo {
  /// Snapshot for this process. Cached after the first call.
  #[inline]
  #[must_use]
  pub fn current() -> Self {
    Self { platform: platform::describe(), crc_kernel: dispatch::kernel_id() }
  }

  #[inline]
  #[must_use]
  pub fn platform(&self) -> platform::Description {
    self.platform
  }

  #[inline]
  #[must_use]
  pub fn crc_kernel(&self) -> CrcKernelId {
    self.crc_kernel
  }
}

impl fmt::Display for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} crc={}", self.platform, self.crc_kernel.as_str())
  }
}

impl fmt::Debug for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DispatchInfo")
      .field("platform", &format_args!("{}", self.platform))
      .field("crc_kernel", &self.crc_kernel.as_str())
      .finish()
  }
}

/// Name of the CRC kernel this process selected.
#[inline]
#[must_use]
pub fn crc_kernel_name() -> &'static str {
  dispatch::kernel_name()
}

/// Hash family, for [`kernel_name_for_len`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
  City32,
  City64,
  /// Unseeded CityHash128 (inputs of 16+ bytes lose 16 to the seed).
  City128,
  /// Unseeded CRC-assisted CityHash128.
  Crc128,
}

/// Code path an input of `len` bytes takes through `family`.
#[must_use]
pub fn kernel_name_for_len(family: Family, len: usize) -> &'static str {
  match family {
    Family::City32 => match len {
      0..=4 => "city32/0-4",
      5..=12 => "city32/5-12",
      13..=24 => "city32/13-24",
      _ => "city32/long",
    },
    Family::City64 => match len {
      0..=16 => "city64/0-16",
      17..=32 => "city64/17-32",
      33..=64 => "city64/33-64",
      _ => "city64/long",
    },
    Family::City128 => {
      let body = if len >= 16 { len - 16 } else { len };
      if body < 128 { "city128/murmur" } else { "city128/long" }
    }
    Family::Crc128 if len <= CRC128_LONG_THRESHOLD => kernel_name_for_len(Family::City128, len),
    Family::Crc128 => match dispatch::kernel_id() {
      CrcKernelId::Reference => "crc/reference",
      CrcKernelId::Portable => "crc/portable",
      CrcKernelId::X86Sse42 => "crc/x86_64/sse4.2",
      CrcKernelId::Aarch64Crc => "crc/aarch64/crc",
    },
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn boundaries_switch_paths() {
    assert_eq!(kernel_name_for_len(Family::City32, 4), "city32/0-4");
    assert_eq!(kernel_name_for_len(Family::City32, 5), "city32/5-12");
    assert_eq!(kernel_name_for_len(Family::City32, 25), "city32/long");
    assert_eq!(kernel_name_for_len(Family::City64, 16), "city64/0-16");
    assert_eq!(kernel_name_for_len(Family::City64, 65), "city64/long");
    assert_eq!(kernel_name_for_len(Family::City128, 143), "city128/murmur");
    assert_eq!(kernel_name_for_len(Family::City128, 144), "city128/long");
    assert_eq!(kernel_name_for_len(Family::Crc128, 900), "city128/long");
  }

  #[test]
  fn long_crc_inputs_name_the_selected_kernel() {
    let name = kernel_name_for_len(Family::Crc128, 901);
    assert!(name.starts_with("crc/"));
    assert!(name.ends_with(crc_kernel_name()));
  }

  #[test]
  fn display_mentions_crc_kernel() {
    let info = DispatchInfo::current();
    assert!(info.to_string().contains(crc_kernel_name()));
    assert_eq!(info.crc_kernel().as_str(), crc_kernel_name());
  }
}
