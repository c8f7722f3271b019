//! [`FastHash`] implementations for each CityHash family.

use traits::FastHash;

use crate::{Hash128, city32, city64, city128, crc};

/// CityHash32. Unseeded.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHash32;

/// CityHash64. `hash` is the unseeded variant; seeds go through
/// [`hash64_with_seed`](crate::hash64_with_seed).
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHash64;

/// CityHash128. `hash` derives its seed from the input.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHash128;

/// CRC-assisted CityHash128.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityHashCrc128;

impl FastHash for CityHash32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = ();

  #[inline]
  fn hash_with_seed((): (), data: &[u8]) -> u32 {
    city32::hash32(data)
  }
}

impl FastHash for CityHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash(data: &[u8]) -> u64 {
    city64::hash64(data)
  }

  #[inline]
  fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
    city64::hash64_with_seed(data, seed)
  }
}

impl FastHash for CityHash128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = Hash128;
  type Seed = Hash128;

  #[inline]
  fn hash(data: &[u8]) -> Hash128 {
    city128::hash128(data)
  }

  #[inline]
  fn hash_with_seed(seed: Hash128, data: &[u8]) -> Hash128 {
    city128::hash128_with_seed(data, seed)
  }
}

impl FastHash for CityHashCrc128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = Hash128;
  type Seed = Hash128;

  #[inline]
  fn hash(data: &[u8]) -> Hash128 {
    crc::hash_crc128(data)
  }

  #[inline]
  fn hash_with_seed(seed: Hash128, data: &[u8]) -> Hash128 {
    crc::hash_crc128_with_seed(data, seed)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn via_trait<H: FastHash>(data: &[u8]) -> H::Output {
    H::hash(data)
  }

  #[test]
  fn trait_matches_free_functions() {
    let data = b"The quick brown fox jumps over the lazy dog";
    assert_eq!(via_trait::<CityHash32>(data), crate::hash32(data));
    assert_eq!(via_trait::<CityHash64>(data), crate::hash64(data));
    assert_eq!(via_trait::<CityHash128>(data), crate::hash128(data));
    assert_eq!(via_trait::<CityHashCrc128>(data), crate::hash_crc128(data));
    assert_eq!(CityHash64::hash_with_seed(7, data), crate::hash64_with_seed(data, 7));
  }

  #[test]
  fn output_sizes() {
    assert_eq!(CityHash32::OUTPUT_SIZE, 4);
    assert_eq!(CityHash64::OUTPUT_SIZE, 8);
    assert_eq!(CityHash128::OUTPUT_SIZE, core::mem::size_of::<Hash128>());
  }
}
