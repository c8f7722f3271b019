//! Portable CRC-32C step: slicing-by-8 tables built at compile time.

#![allow(clippy::indexing_slicing)] // Table lookups are masked to 0..256.

use super::reference::CRC32C_POLY;

const fn table_entry(index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ CRC32C_POLY;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// `TABLES[k][i]` is the CRC of byte `i` followed by `k` zero bytes.
const fn generate_tables() -> [[u32; 256]; 8] {
  let mut tables = [[0u32; 256]; 8];

  let mut i = 0usize;
  while i < 256 {
    tables[0][i] = table_entry(i as u8);
    i += 1;
  }

  let mut k = 1;
  while k < 8 {
    let mut i = 0;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = (prev >> 8) ^ tables[0][(prev & 0xff) as usize];
      i += 1;
    }
    k += 1;
  }

  tables
}

static TABLES: [[u32; 256]; 8] = generate_tables();

/// CRC-32C step over one little-endian 64-bit word, eight bytes per lookup round.
#[inline(always)]
pub(crate) fn crc32c_u64(crc: u64, v: u64) -> u64 {
  let x = (crc as u32 as u64) ^ v;
  let t = &TABLES;
  (t[7][(x & 0xff) as usize]
    ^ t[6][((x >> 8) & 0xff) as usize]
    ^ t[5][((x >> 16) & 0xff) as usize]
    ^ t[4][((x >> 24) & 0xff) as usize]
    ^ t[3][((x >> 32) & 0xff) as usize]
    ^ t[2][((x >> 40) & 0xff) as usize]
    ^ t[1][((x >> 48) & 0xff) as usize]
    ^ t[0][(x >> 56) as usize]) as u64
}

/// The 256-bit mixer driven by the table step.
pub(crate) fn crc256_portable(s: &[u8], seed: u32) -> [u64; 4] {
  super::crc256_long(s, seed, crc32c_u64)
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;
  use crate::crc::reference;

  #[test]
  fn first_table_matches_known_entries() {
    assert_eq!(TABLES[0][0], 0);
    assert_eq!(TABLES[0][1], 0xf26b_8303);
    assert_eq!(TABLES[0][128], CRC32C_POLY);
  }

  proptest! {
    #[test]
    fn step_matches_bitwise(crc in any::<u32>(), v in any::<u64>()) {
      prop_assert_eq!(crc32c_u64(crc as u64, v), reference::crc32c_u64(crc as u64, v));
    }
  }
}
