//! Whole-image scans and saved listings.
//!
//! A [`Listing`] is the decoded form of a program image: one [`Entry`] per
//! instruction or undecodable word, in address order. Scans never stop at a
//! bad word; they record it and resume at the next word boundary.
//!
//! ## File format
//!
//! ```text
//! +------------------+
//! | Magic "AVRL"     |  4 bytes
//! +------------------+
//! | Format version   |  u32 little-endian (currently 1)
//! +------------------+
//! | Compressed data  |  deflate-compressed bincode payload
//! +------------------+
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::context::{read_word, WORD_BYTES};
use crate::decoder::decode_at;
use crate::disasm::format_entry;
use crate::opcodes::Instruction;

/// Magic bytes identifying a saved listing.
const MAGIC: &[u8; 4] = b"AVRL";
/// Current listing format version.
const FORMAT_VERSION: u32 = 1;
const HEADER_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file too small for a listing header")]
    TooSmall,
    #[error("not a listing file (bad magic)")]
    BadMagic,
    #[error("unsupported listing version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("decompress error: {0}")]
    Decompress(String),
    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// One line of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    Decoded {
        /// Byte offset into the image.
        offset: usize,
        word: u16,
        /// Second word of a two-word instruction.
        extra: Option<u16>,
        insn: Instruction,
    },
    Invalid {
        offset: usize,
        address: u32,
        word: u16,
    },
}

impl Entry {
    pub fn offset(&self) -> usize {
        match *self {
            Entry::Decoded { offset, .. } | Entry::Invalid { offset, .. } => offset,
        }
    }

    pub fn address(&self) -> u32 {
        match *self {
            Entry::Decoded { insn, .. } => insn.address,
            Entry::Invalid { address, .. } => address,
        }
    }

    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            Entry::Decoded { insn, .. } => Some(insn),
            Entry::Invalid { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Word address of image offset 0.
    pub base: u32,
    pub entries: Vec<Entry>,
}

impl Listing {
    /// Decode a whole image.
    pub fn scan(code: &[u8], base: u32) -> Self {
        Self::scan_range(code, base, 0, code.len())
    }

    /// Decode `code[start..end]`, aligning `start` down to a word boundary.
    ///
    /// Addresses are in words: the instruction at byte offset `o` sits at
    /// `base + o / 2`. A trailing odd byte is not listed.
    pub fn scan_range(code: &[u8], base: u32, start: usize, end: usize) -> Self {
        let end = end.min(code.len());
        let mut entries = Vec::new();
        let mut offset = start & !1;

        while offset < end {
            let Some(word) = read_word(code, offset) else { break };
            let address = base.wrapping_add((offset / WORD_BYTES) as u32);
            match decode_at(code, offset, address) {
                Ok(insn) => {
                    let size = insn.size_bytes();
                    let extra = if size > WORD_BYTES { read_word(code, offset + WORD_BYTES) } else { None };
                    entries.push(Entry::Decoded { offset, word, extra, insn });
                    offset += size;
                }
                Err(e) => {
                    debug!("{}", e);
                    entries.push(Entry::Invalid { offset, address, word });
                    offset += WORD_BYTES;
                }
            }
        }

        Listing { base, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decoded instructions, skipping invalid words.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.entries.iter().filter_map(Entry::instruction)
    }

    pub fn invalid_count(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, Entry::Invalid { .. })).count()
    }

    /// Render every entry as a text line.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(format_entry).collect()
    }

    /// Serialize with header and deflate compression.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ListingError> {
        let payload = bincode::serialize(self)?;
        let compressed = miniz_oxide::deflate::compress_to_vec(&payload, 6);

        let mut out = Vec::with_capacity(HEADER_LEN + compressed.len());
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        out.extend_from_slice(&compressed);
        Ok(out)
    }

    /// Parse bytes produced by [`Listing::to_bytes`], verifying magic and version.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ListingError> {
        if data.len() < HEADER_LEN {
            return Err(ListingError::TooSmall);
        }
        if &data[0..4] != MAGIC {
            return Err(ListingError::BadMagic);
        }
        let version = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        if version != FORMAT_VERSION {
            return Err(ListingError::UnsupportedVersion { found: version, expected: FORMAT_VERSION });
        }

        let decompressed = miniz_oxide::inflate::decompress_to_vec(&data[HEADER_LEN..])
            .map_err(|e| ListingError::Decompress(format!("{:?}", e)))?;

        Ok(bincode::deserialize(&decompressed)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ListingError> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ListingError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }
}
