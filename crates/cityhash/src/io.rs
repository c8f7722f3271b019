//! Whole-input hashing of files and readers.
//!
//! CityHash needs the full length before it starts mixing, so these read the
//! entire input into memory first. For inputs too large for that, hash
//! fixed-size pieces yourself and combine the results (e.g. with
//! [`hash64_with_seed`](crate::hash64_with_seed) chaining); the outcome will
//! differ from hashing the whole input at once.
//!
//! ```no_run
//! let h = cityhash::io::hash64_file("Cargo.toml")?;
//! println!("{h:016x}");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::{fs, io::Read, path::Path, vec::Vec};

/// CityHash64 of the full contents of the file at `path`.
///
/// # Errors
///
/// Any error from opening or reading the file.
pub fn hash64_file(path: impl AsRef<Path>) -> std::io::Result<u64> {
  let contents = fs::read(path)?;
  Ok(crate::hash64(&contents))
}

/// CityHash64 of everything `reader` yields until EOF.
///
/// # Errors
///
/// Any error from reading.
pub fn hash64_reader(mut reader: impl Read) -> std::io::Result<u64> {
  let mut contents = Vec::new();
  reader.read_to_end(&mut contents)?;
  Ok(crate::hash64(&contents))
}

#[cfg(test)]
mod tests {
  use std::io::{self, Cursor};

  use super::*;

  struct Broken;

  impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
      Err(io::Error::other("boom"))
    }
  }

  #[test]
  fn reader_matches_slice() {
    let data = std::vec![0x42u8; 5000];
    assert_eq!(hash64_reader(Cursor::new(&data)).ok(), Some(crate::hash64(&data)));
    assert_eq!(hash64_reader(io::empty()).ok(), Some(crate::K2));
  }

  #[test]
  fn read_errors_propagate() {
    assert_eq!(hash64_reader(Broken).map_err(|e| e.kind()), Err(io::ErrorKind::Other));
  }

  #[test]
  fn file_matches_slice() {
    let path = std::env::temp_dir().join(std::format!("cityhash-io-{}.bin", std::process::id()));
    let data: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
    fs::write(&path, &data).unwrap();
    let hashed = hash64_file(&path);
    let _ = fs::remove_file(&path);
    assert_eq!(hashed.ok(), Some(crate::hash64(&data)));
  }

  #[test]
  fn missing_file_is_an_error() {
    let err = hash64_file("/definitely/not/a/real/path/cityhash").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
  }
}
