use backend::{Candidate, OnceCache, candidates, select};
use platform::Caps;

pub use super::kernels::{CrcKernelId, id_from_name, required_caps};
use super::{
  config::{self, CrcForce},
  kernels::{Crc256Fn, crc256_fn},
};

#[derive(Clone, Copy)]
struct ActiveDispatch {
  id: CrcKernelId,
  crc256: Crc256Fn,
}

static ACTIVE: OnceCache<ActiveDispatch> = OnceCache::new();

/// Best first. The reference kernel is never a candidate.
const AUTO: &[Candidate<CrcKernelId>] = candidates![
  CrcKernelId::X86Sse42.as_str() => required_caps(CrcKernelId::X86Sse42) => CrcKernelId::X86Sse42,
  CrcKernelId::Aarch64Crc.as_str() => required_caps(CrcKernelId::Aarch64Crc) => CrcKernelId::Aarch64Crc,
  CrcKernelId::Portable.as_str() => Caps::NONE => CrcKernelId::Portable,
];

const PORTABLE_ONLY: &[Candidate<CrcKernelId>] = candidates![
  CrcKernelId::Portable.as_str() => Caps::NONE => CrcKernelId::Portable,
];

#[inline]
#[must_use]
fn resolve(force: CrcForce, caps: Caps) -> CrcKernelId {
  let list = match force {
    CrcForce::Portable => PORTABLE_ONLY,
    CrcForce::Auto | CrcForce::Hwcrc => AUTO,
  };
  select(caps, list).map_or(CrcKernelId::Portable, |picked| picked.func)
}

const PORTABLE: ActiveDispatch = ActiveDispatch { id: CrcKernelId::Portable, crc256: super::portable::crc256_portable };

#[inline]
#[must_use]
fn active() -> ActiveDispatch {
  ACTIVE.get_or_init(|| {
    let id = resolve(config::get().effective_force, platform::caps());
    match crc256_fn(id) {
      Some(crc256) => ActiveDispatch { id, crc256 },
      None => PORTABLE,
    }
  })
}

#[inline]
pub(crate) fn active_kernel() -> Crc256Fn {
  active().crc256
}

/// The CRC kernel this process selected.
#[inline]
#[must_use]
pub fn kernel_id() -> CrcKernelId {
  active().id
}

/// Name of the CRC kernel this process selected.
#[inline]
#[must_use]
pub fn kernel_name() -> &'static str {
  kernel_id().as_str()
}

/// `hash_crc256` through a specific kernel, bypassing the cached selection.
///
/// Returns `None` when the CPU lacks the kernel's capabilities or this build
/// carries no code for it.
#[must_use]
pub fn crc256_with_kernel(id: CrcKernelId, data: &[u8]) -> Option<[u64; 4]> {
  if !platform::caps().has(required_caps(id)) {
    return None;
  }
  let kernel = crc256_fn(id)?;
  Some(super::crc256_with(kernel, data))
}

#[cfg(test)]
mod tests {
  use platform::caps::{aarch64, x86};

  use super::*;

  #[test]
  fn portable_force_ignores_hardware() {
    assert_eq!(resolve(CrcForce::Portable, x86::SSE42 | aarch64::CRC), CrcKernelId::Portable);
  }

  #[test]
  fn no_caps_means_portable() {
    assert_eq!(resolve(CrcForce::Auto, Caps::NONE), CrcKernelId::Portable);
    assert_eq!(resolve(CrcForce::Hwcrc, Caps::NONE), CrcKernelId::Portable);
  }

  #[test]
  fn hardware_wins_when_present() {
    assert_eq!(resolve(CrcForce::Auto, x86::CRC32C_READY), CrcKernelId::X86Sse42);
    assert_eq!(resolve(CrcForce::Auto, aarch64::CRC_READY), CrcKernelId::Aarch64Crc);
  }

  #[test]
  fn selection_is_never_the_oracle() {
    assert_ne!(kernel_id(), CrcKernelId::Reference);
    assert_eq!(kernel_name(), kernel_id().as_str());
  }

  #[test]
  fn unavailable_kernels_report_none() {
    let data = [0u8; 300];
    for id in CrcKernelId::ALL {
      let runnable = platform::caps().has(required_caps(id)) && crc256_fn(id).is_some();
      assert_eq!(crc256_with_kernel(id, &data).is_some(), runnable, "{}", id.as_str());
    }
  }
}
