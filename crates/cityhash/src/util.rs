//! Loads, rotations, and the small mixing steps shared by every CityHash path.
//!
//! All multi-byte loads are little-endian regardless of host byte order, so a
//! given byte sequence hashes identically everywhere.

// Some primes between 2^63 and 2^64 for various uses.
pub(crate) const K0: u64 = 0xc3a5_c85c_97cb_3127;
pub(crate) const K1: u64 = 0xb492_b66f_be98_f273;
pub(crate) const K2: u64 = 0x9ae1_6a3b_2f90_404f;

// Murmur3 32-bit multipliers.
pub(crate) const C1: u32 = 0xcc9e_2d51;
pub(crate) const C2: u32 = 0x1b87_3593;

#[inline(always)]
pub(crate) fn fetch32(input: &[u8], offset: usize) -> u32 {
  debug_assert!(offset + 4 <= input.len());
  // SAFETY: caller ensures `offset + 4 <= input.len()`, and `read_unaligned` supports unaligned
  // loads.
  let v = unsafe { core::ptr::read_unaligned(input.as_ptr().add(offset) as *const u32) };
  u32::from_le(v)
}

#[inline(always)]
pub(crate) fn fetch64(input: &[u8], offset: usize) -> u64 {
  debug_assert!(offset + 8 <= input.len());
  // SAFETY: caller ensures `offset + 8 <= input.len()`, and `read_unaligned` supports unaligned
  // loads.
  let v = unsafe { core::ptr::read_unaligned(input.as_ptr().add(offset) as *const u64) };
  u64::from_le(v)
}

/// Right-rotate. A shift of zero returns `v` unchanged.
#[inline(always)]
pub(crate) const fn rotate(v: u64, shift: u32) -> u64 {
  v.rotate_right(shift)
}

#[inline(always)]
pub(crate) const fn rotate32(v: u32, shift: u32) -> u32 {
  v.rotate_right(shift)
}

#[inline(always)]
pub(crate) const fn shift_mix(v: u64) -> u64 {
  v ^ (v >> 47)
}

/// Murmur3 32-bit finalizer.
#[inline(always)]
pub(crate) const fn fmix(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

/// One Murmur3-style round folding `a` into `h`.
#[inline(always)]
pub(crate) const fn mur(mut a: u32, mut h: u32) -> u32 {
  a = a.wrapping_mul(C1);
  a = rotate32(a, 17);
  a = a.wrapping_mul(C2);
  h ^= a;
  h = rotate32(h, 19);
  h.wrapping_mul(5).wrapping_add(0xe654_6b64)
}
