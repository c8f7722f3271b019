//! Pointer-and-length entry points.
//!
//! For callers that hold a raw buffer (FFI, memory-mapped regions). A null
//! `ptr` means "no input" and yields `None`; any non-null pointer with
//! `len == 0` yields the ordinary empty-input hash.
//!
//! # Safety
//!
//! Every function here requires that a non-null `ptr` be valid for reads of
//! `len` bytes for the duration of the call, with the usual
//! [`core::slice::from_raw_parts`] rules (single allocation, no concurrent
//! writes, `len <= isize::MAX`).

use crate::Hash128;

/// Borrow `(ptr, len)` as a slice, or `None` for a null pointer.
///
/// # Safety
/// See the [module docs](self).
#[inline]
unsafe fn bytes<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
  if ptr.is_null() {
    return None;
  }
  // SAFETY: non-null, and the caller guarantees `len` readable bytes.
  Some(unsafe { core::slice::from_raw_parts(ptr, len) })
}

/// # Safety
/// See the [module docs](self).
#[inline]
#[must_use]
pub unsafe fn hash32(ptr: *const u8, len: usize) -> Option<u32> {
  // SAFETY: forwarded caller contract.
  let s = unsafe { bytes(ptr, len) }?;
  Some(crate::hash32(s))
}

/// # Safety
/// See the [module docs](self).
#[inline]
#[must_use]
pub unsafe fn hash64(ptr: *const u8, len: usize) -> Option<u64> {
  // SAFETY: forwarded caller contract.
  let s = unsafe { bytes(ptr, len) }?;
  Some(crate::hash64(s))
}

/// # Safety
/// See the [module docs](self).
#[inline]
#[must_use]
pub unsafe fn hash64_with_seed(ptr: *const u8, len: usize, seed: u64) -> Option<u64> {
  // SAFETY: forwarded caller contract.
  let s = unsafe { bytes(ptr, len) }?;
  Some(crate::hash64_with_seed(s, seed))
}

/// # Safety
/// See the [module docs](self).
#[inline]
#[must_use]
pub unsafe fn hash64_with_seeds(ptr: *const u8, len: usize, seed0: u64, seed1: u64) -> Option<u64> {
  // SAFETY: forwarded caller contract.
  let s = unsafe { bytes(ptr, len) }?;
  Some(crate::hash64_with_seeds(s, seed0, seed1))
}

/// # Safety
/// See the [module docs](self).
#[inline]
#[must_use]
pub unsafe fn hash128(ptr: *const u8, len: usize) -> Option<Hash128> {
  // SAFETY: forwarded caller contract.
  let s = unsafe { bytes(ptr, len) }?;
  Some(crate::hash128(s))
}

/// # Safety
/// See the [module docs](self).
#[inline]
#[must_use]
pub unsafe fn hash128_with_seed(ptr: *const u8, len: usize, seed: Hash128) -> Option<Hash128> {
  // SAFETY: forwarded caller contract.
  let s = unsafe { bytes(ptr, len) }?;
  Some(crate::hash128_with_seed(s, seed))
}

/// # Safety
/// See the [module docs](self).
#[inline]
#[must_use]
pub unsafe fn hash_crc128(ptr: *const u8, len: usize) -> Option<Hash128> {
  // SAFETY: forwarded caller contract.
  let s = unsafe { bytes(ptr, len) }?;
  Some(crate::hash_crc128(s))
}

/// # Safety
/// See the [module docs](self).
#[inline]
#[must_use]
pub unsafe fn hash_crc128_with_seed(ptr: *const u8, len: usize, seed: Hash128) -> Option<Hash128> {
  // SAFETY: forwarded caller contract.
  let s = unsafe { bytes(ptr, len) }?;
  Some(crate::hash_crc128_with_seed(s, seed))
}

/// # Safety
/// See the [module docs](self).
#[inline]
#[must_use]
pub unsafe fn hash_crc256(ptr: *const u8, len: usize) -> Option<[u64; 4]> {
  // SAFETY: forwarded caller contract.
  let s = unsafe { bytes(ptr, len) }?;
  Some(crate::hash_crc256(s))
}

#[cfg(test)]
mod tests {
  use core::ptr;

  use super::*;

  #[test]
  fn null_is_absent_for_every_length() {
    for len in [0, 1, 64, 1 << 20] {
      // SAFETY: null pointers are never dereferenced.
      unsafe {
        assert_eq!(hash32(ptr::null(), len), None);
        assert_eq!(hash64(ptr::null(), len), None);
        assert_eq!(hash64_with_seed(ptr::null(), len, 1), None);
        assert_eq!(hash64_with_seeds(ptr::null(), len, 1, 2), None);
        assert_eq!(hash128(ptr::null(), len), None);
        assert_eq!(hash128_with_seed(ptr::null(), len, Hash128::new(1, 2)), None);
        assert_eq!(hash_crc128(ptr::null(), len), None);
        assert_eq!(hash_crc128_with_seed(ptr::null(), len, Hash128::new(1, 2)), None);
        assert_eq!(hash_crc256(ptr::null(), len), None);
      }
    }
  }

  #[test]
  fn empty_non_null_is_the_empty_hash() {
    let dangling = ptr::NonNull::<u8>::dangling().as_ptr();
    // SAFETY: zero-length reads from a dangling, aligned, non-null pointer are valid.
    unsafe {
      assert_eq!(hash64(dangling, 0), Some(crate::K2));
      assert_eq!(hash32(dangling, 0), Some(crate::hash32(b"")));
      assert_eq!(hash128(dangling, 0), Some(crate::hash128(b"")));
    }
  }

  #[test]
  fn matches_slice_entry_points() {
    let data = b"pointer and length agree with the slice";
    let (p, n) = (data.as_ptr(), data.len());
    // SAFETY: `p` is valid for `n` bytes.
    unsafe {
      assert_eq!(hash64(p, n), Some(crate::hash64(data)));
      assert_eq!(hash64_with_seeds(p, n, 3, 4), Some(crate::hash64_with_seeds(data, 3, 4)));
      assert_eq!(hash128(p, n), Some(crate::hash128(data)));
    }
  }
}
