//! Decode failures.
//!
//! Leaves report [`Fault`]s; the entry points in [`crate::decoder`] attach the
//! offending word and address and surface them as [`DecodeError`]. A pruned
//! tree branch ("no match") is not an error and never appears here.

use thiserror::Error;

/// Why a well-sized word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    /// No leaf of either root accepted the word (including words whose
    /// selector bits matched but whose reserved bits did not).
    Unmatched,
    /// A register field selected a reserved or out-of-range table slot.
    RegisterGap { table: &'static str, index: u16 },
}

impl std::fmt::Display for Invalid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Invalid::Unmatched => write!(f, "no encoding matches"),
            Invalid::RegisterGap { table, index } => {
                write!(f, "register index {} is reserved in table {}", index, table)
            }
        }
    }
}

/// Failure of a single decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid instruction 0x{word:04X} at 0x{address:04X}: {reason}")]
    InvalidEncoding { word: u16, address: u32, reason: Invalid },

    #[error("buffer underrun at 0x{address:04X}: need {needed} bytes at offset {offset}, {available} available")]
    BufferUnderrun {
        /// First instruction word, if it could be read.
        word: Option<u16>,
        address: u32,
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl DecodeError {
    /// Address of the instruction that failed to decode.
    pub fn address(&self) -> u32 {
        match *self {
            DecodeError::InvalidEncoding { address, .. } => address,
            DecodeError::BufferUnderrun { address, .. } => address,
        }
    }

    /// The first instruction word, when the buffer held one.
    pub fn word(&self) -> Option<u16> {
        match *self {
            DecodeError::InvalidEncoding { word, .. } => Some(word),
            DecodeError::BufferUnderrun { word, .. } => word,
        }
    }
}

/// Leaf-level failure, raised while a matched leaf resolves its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    RegisterGap { table: &'static str, index: u16 },
    /// The second instruction word lies past the end of the buffer.
    Truncated { needed: usize, available: usize },
}
