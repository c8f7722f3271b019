//! Core hashing traits for the cityhash workspace.
//!
//! This crate provides the foundational traits that every hash family in the
//! workspace conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot non-cryptographic hashing | CityHash32, CityHash64, CityHash128 |
//!
//! # Error Types
//!
//! - [`CapacityError`] - Input does not fit a fixed-size scratch buffer
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;

pub use error::CapacityError;
pub use fast_hash::FastHash;
