//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is intentionally one-shot. Families whose mixing depends on the
/// total input length (dispatch by size, tail handled from the end) cannot be
/// fed incrementally, so no streaming counterpart exists.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (`()` for families without a seeded variant).
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` with the family's unseeded variant.
  ///
  /// The default forwards to [`hash_with_seed`](Self::hash_with_seed) with
  /// `Seed::default()`. Families whose unseeded variant is not "seed zero"
  /// override this.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::FastHash;

  struct Sum;

  impl FastHash for Sum {
    const OUTPUT_SIZE: usize = 8;
    type Output = u64;
    type Seed = u64;

    fn hash_with_seed(seed: u64, data: &[u8]) -> u64 {
      data.iter().fold(seed, |acc, &b| acc.wrapping_add(b as u64))
    }
  }

  #[test]
  fn default_hash_uses_default_seed() {
    assert_eq!(Sum::hash(b"abc"), Sum::hash_with_seed(0, b"abc"));
    assert_ne!(Sum::hash(b"abc"), Sum::hash_with_seed(1, b"abc"));
  }
}
