//! CityHash fingerprints (**NOT CRYPTO**).
//!
//! Fast 32-, 64-, and 128-bit hashes of byte strings, bit-compatible with
//! CityHash v1.1, plus the CRC-assisted 128/256-bit variants.
//!
//! ```
//! let h = cityhash::hash64(b"hello");
//! assert_eq!(h, cityhash::hash64(b"hello"));
//!
//! let wide = cityhash::hash128(b"hello");
//! assert_eq!(wide.fold(), cityhash::fold128_to_64(wide));
//! ```
//!
//! # Layout
//!
//! - Slice entry points ([`hash32`], [`hash64`], [`hash128`], ...) are total.
//! - [`raw`] takes `(pointer, length)` and returns `None` for a null pointer.
//! - [`crc`] holds the CRC-assisted family; its hardware kernels are picked
//!   once per process and only change speed, never output.
//! - [`adapt`] and [`io`] are thin callers for strings, arrays, wide text,
//!   readers, and files.
//!
//! None of these functions support incremental input: every path needs the
//! total length before it starts mixing.
//!
//! # Fallibility Discipline
//!
//! Non-test code denies `unwrap`/`expect`. The only failure the core knows
//! is "no input" (null pointer), modelled as `None`.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod adapt;
mod city128;
mod city32;
mod city64;
pub mod crc;
mod fast;
pub mod introspect;
#[cfg(feature = "std")]
pub mod io;
mod mix;
pub mod raw;
mod util;
mod value;

pub use city32::hash32;
pub use city64::{hash64, hash64_with_seed, hash64_with_seeds};
pub use city128::{hash128, hash128_with_seed};
pub use crc::{hash_crc128, hash_crc128_with_seed, hash_crc256};
pub use fast::{CityHash32, CityHash64, CityHash128, CityHashCrc128};
pub use traits::{CapacityError, FastHash};
pub use value::Hash128;

/// Seed constant of the 64-bit family: `hash64(b"") == K2` and
/// `hash64_with_seed(s, x) == hash64_with_seeds(s, K2, x)`.
pub const K2: u64 = util::K2;

/// Fold a 128-bit hash to 64 bits.
///
/// Total: defined for every pair, including `(0, 0)`.
#[inline]
#[must_use]
pub const fn fold128_to_64(h: Hash128) -> u64 {
  h.fold()
}
