//! Kernel selection and lazy caching primitives.
//!
//! Algorithm crates use this crate for two things:
//!
//! - **Dispatch**: pick a kernel from an ordered candidate list using the
//!   capabilities reported by `platform`.
//! - **Caching**: remember that choice in a [`OnceCache`] so every later call
//!   is a single load plus an indirect call.
//!
//! Both work without `std`.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod cache;
pub mod dispatch;

pub use cache::OnceCache;
pub use dispatch::{Candidate, Selected, select};
