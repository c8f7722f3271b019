//! Error types shared across the workspace.
//!
//! Small, `Copy` error types. Individual crates may define additional errors
//! as needed.

use core::fmt;

/// Input does not fit a fixed-size scratch buffer.
///
/// Returned by adapters that re-encode their input into a bounded stack
/// buffer before hashing. The adapter never truncates: an oversized input is
/// rejected as a whole.
///
/// # Examples
///
/// ```
/// use traits::CapacityError;
///
/// let err = CapacityError::new(1024, 512);
/// assert_eq!(err.encoded_len(), 1024);
/// assert_eq!(err.capacity(), 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct CapacityError {
  len: usize,
  capacity: usize,
}

impl CapacityError {
  /// Create a new capacity error for an encoded length of `len` bytes.
  #[inline]
  #[must_use]
  pub const fn new(len: usize, capacity: usize) -> Self {
    Self { len, capacity }
  }

  /// Encoded size of the rejected input, in bytes.
  #[inline]
  #[must_use]
  pub const fn encoded_len(&self) -> usize {
    self.len
  }

  /// Scratch buffer capacity, in bytes.
  #[inline]
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }
}

impl fmt::Display for CapacityError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "encoded input of {} bytes exceeds the {}-byte scratch buffer",
      self.len, self.capacity
    )
  }
}

impl core::error::Error for CapacityError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(
      CapacityError::new(600, 512).to_string(),
      "encoded input of 600 bytes exceeds the 512-byte scratch buffer"
    );
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", CapacityError::new(2, 1));
    assert_eq!(dbg, "CapacityError { len: 2, capacity: 1 }");
  }

  #[test]
  fn accessors() {
    let err = CapacityError::new(7, 3);
    assert_eq!(err.encoded_len(), 7);
    assert_eq!(err.capacity(), 3);
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<CapacityError>();
    assert_sync::<CapacityError>();
    assert_error::<CapacityError>();
  }

  #[test]
  fn error_has_no_source() {
    use core::error::Error;

    assert!(CapacityError::new(1, 0).source().is_none());
  }
}
