use platform::Caps;

/// A 256-bit mixer: `(input with len >= 240, seed) -> state`.
pub(crate) type Crc256Fn = fn(&[u8], u32) -> [u64; 4];

/// Identifies one implementation of the CRC-32C step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CrcKernelId {
  /// Bitwise oracle. Never auto-selected.
  Reference = 0,
  /// Slicing-by-8 tables.
  Portable = 1,
  /// SSE4.2 `crc32`.
  X86Sse42 = 2,
  /// ARMv8 CRC32 extension.
  Aarch64Crc = 3,
}

impl CrcKernelId {
  pub const ALL: [Self; 4] = [Self::Reference, Self::Portable, Self::X86Sse42, Self::Aarch64Crc];

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Reference => "reference",
      Self::Portable => "portable",
      Self::X86Sse42 => "x86_64/sse4.2",
      Self::Aarch64Crc => "aarch64/crc",
    }
  }
}

#[must_use]
pub fn id_from_name(name: &str) -> Option<CrcKernelId> {
  CrcKernelId::ALL.into_iter().find(|id| id.as_str() == name)
}

/// Capabilities a kernel needs before it may run.
///
/// Kernels for a foreign architecture require a bit this target can never
/// report, so they are never selected.
#[inline]
#[must_use]
pub const fn required_caps(id: CrcKernelId) -> Caps {
  match id {
    CrcKernelId::Reference | CrcKernelId::Portable => Caps::NONE,
    CrcKernelId::X86Sse42 => platform::caps::x86::CRC32C_READY,
    CrcKernelId::Aarch64Crc => platform::caps::aarch64::CRC_READY,
  }
}

/// The mixer for `id`, or `None` when this build carries no code for it.
#[must_use]
pub(crate) fn crc256_fn(id: CrcKernelId) -> Option<Crc256Fn> {
  match id {
    CrcKernelId::Reference => Some(super::reference::crc256_reference),
    CrcKernelId::Portable => Some(super::portable::crc256_portable),
    CrcKernelId::X86Sse42 => {
      #[cfg(all(target_arch = "x86_64", any(target_feature = "sse4.2", feature = "std")))]
      {
        Some(super::x86_64::crc256_sse42)
      }
      #[cfg(not(all(target_arch = "x86_64", any(target_feature = "sse4.2", feature = "std"))))]
      {
        None
      }
    }
    CrcKernelId::Aarch64Crc => {
      #[cfg(all(target_arch = "aarch64", any(target_feature = "crc", feature = "std")))]
      {
        Some(super::aarch64::crc256_crc)
      }
      #[cfg(not(all(target_arch = "aarch64", any(target_feature = "crc", feature = "std"))))]
      {
        None
      }
    }
  }
}
