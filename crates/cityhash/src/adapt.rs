//! Thin callers of the byte-slice core.
//!
//! Nothing here changes a hash: each adapter produces exactly the bytes it
//! would hand to [`hash64`] and so on, then calls the core.

use traits::CapacityError;

use crate::{Hash128, fold128_to_64, hash32, hash64, hash64_with_seed, hash64_with_seeds, hash128, hash128_with_seed};

/// Hash the UTF-8 bytes of `s`.
#[inline]
#[must_use]
pub fn hash64_str(s: &str) -> u64 {
  hash64(s.as_bytes())
}

/// Hash a fixed-size array. Same result as hashing it as a slice.
#[inline]
#[must_use]
pub fn hash64_array<const N: usize>(bytes: &[u8; N]) -> u64 {
  hash64(bytes)
}

/// Hash the 8 little-endian bytes of `v`, e.g. to re-hash a previous hash.
#[inline]
#[must_use]
pub fn hash64_value(v: u64) -> u64 {
  hash64(&v.to_le_bytes())
}

// ─────────────────────────────────────────────────────────────────────────────
// Wide text
// ─────────────────────────────────────────────────────────────────────────────

/// Stack scratch for re-encoding wide text. Longer input is refused, never
/// truncated and never spilled to the heap.
pub const WIDE_SCRATCH: usize = 512;

/// A wide-text code unit that is hashed as its little-endian bytes.
pub trait WideUnit: Copy {
  /// Encoded width in bytes.
  const WIDTH: usize;

  /// Write `self` into `out` (`out.len() == WIDTH`).
  fn write_le(self, out: &mut [u8]);
}

impl WideUnit for u16 {
  const WIDTH: usize = 2;

  #[inline]
  fn write_le(self, out: &mut [u8]) {
    out.copy_from_slice(&self.to_le_bytes());
  }
}

impl WideUnit for u32 {
  const WIDTH: usize = 4;

  #[inline]
  fn write_le(self, out: &mut [u8]) {
    out.copy_from_slice(&self.to_le_bytes());
  }
}

impl WideUnit for char {
  const WIDTH: usize = 4;

  #[inline]
  fn write_le(self, out: &mut [u8]) {
    (self as u32).write_le(out);
  }
}

/// Hash wide text by re-encoding it into a fixed stack buffer.
///
/// # Errors
///
/// [`CapacityError`] when the encoded form exceeds [`WIDE_SCRATCH`] bytes.
pub fn try_hash64_wide<U: WideUnit>(units: &[U]) -> Result<u64, CapacityError> {
  let encoded = units.len().saturating_mul(U::WIDTH);
  if encoded > WIDE_SCRATCH {
    return Err(CapacityError::new(encoded, WIDE_SCRATCH));
  }

  let mut buf = [0u8; WIDE_SCRATCH];
  for (unit, out) in units.iter().zip(buf.chunks_exact_mut(U::WIDTH)) {
    unit.write_le(out);
  }
  let (bytes, _) = buf.split_at(encoded);
  Ok(hash64(bytes))
}

/// [`try_hash64_wide`], with "too long" reported as absent.
#[inline]
#[must_use]
pub fn hash64_wide<U: WideUnit>(units: &[U]) -> Option<u64> {
  try_hash64_wide(units).ok()
}

// ─────────────────────────────────────────────────────────────────────────────
// Function packs
// ─────────────────────────────────────────────────────────────────────────────

/// A table of hash functions for tools that are generic over the hash family.
#[derive(Clone, Copy, Debug)]
pub struct HashPack {
  pub name: &'static str,
  pub hash32: fn(&[u8]) -> u32,
  pub hash64: fn(&[u8]) -> u64,
  pub hash64_with_seed: fn(&[u8], u64) -> u64,
  pub hash64_with_seeds: fn(&[u8], u64, u64) -> u64,
  pub hash128: fn(&[u8]) -> Hash128,
  pub hash128_with_seed: fn(&[u8], Hash128) -> Hash128,
  pub fold: fn(Hash128) -> u64,
}

/// Portable CityHash.
pub const CITY: HashPack = HashPack {
  name: "city",
  hash32,
  hash64,
  hash64_with_seed,
  hash64_with_seeds,
  hash128,
  hash128_with_seed,
  fold: fold128_to_64,
};

/// CityHash with the 128-bit slots bound to the CRC-assisted family.
pub const CITY_CRC: HashPack = HashPack {
  name: "city-crc",
  hash128: crate::hash_crc128,
  hash128_with_seed: crate::hash_crc128_with_seed,
  ..CITY
};

/// Every pack this crate ships.
pub const PACKS: [HashPack; 2] = [CITY, CITY_CRC];

/// Find a pack by [`HashPack::name`].
#[must_use]
pub fn pack_by_name(name: &str) -> Option<HashPack> {
  PACKS.into_iter().find(|p| p.name == name)
}
