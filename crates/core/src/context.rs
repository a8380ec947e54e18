//! Per-call decode state.
//!
//! A [`DecodeContext`] is built on the caller's stack for every decode and
//! handed by reference to the tree and the leaves; the shared tables hold
//! no per-call state, so one decoder serves any number of threads.

use crate::bits::sign_extend;
use crate::error::Fault;

/// Bytes per instruction word.
pub const WORD_BYTES: usize = 2;

/// Read a little-endian word at `offset`, if two bytes are available.
#[inline(always)]
pub fn read_word(code: &[u8], offset: usize) -> Option<u16> {
    let end = offset.checked_add(WORD_BYTES)?;
    let bytes = code.get(offset..end)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    code: &'a [u8],
    offset: usize,
    address: u32,
    word: u16,
}

impl<'a> DecodeContext<'a> {
    /// Build a context for the word at `offset`, or `None` if fewer than two
    /// bytes remain.
    pub fn new(code: &'a [u8], offset: usize, address: u32) -> Option<Self> {
        let word = read_word(code, offset)?;
        Some(DecodeContext { code, offset, address, word })
    }

    /// First instruction word.
    #[inline(always)]
    pub fn word(&self) -> u16 {
        self.word
    }

    /// Address of the instruction being decoded.
    #[inline(always)]
    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Fetch the word following the first one, for two-word encodings.
    pub fn second_word(&self) -> Result<u16, Fault> {
        let at = self.offset.saturating_add(WORD_BYTES);
        read_word(self.code, at).ok_or(Fault::Truncated {
            needed: 2 * WORD_BYTES,
            available: self.code.len().saturating_sub(self.offset),
        })
    }

    /// Resolve a relative offset whose sign bit is `sign_bit`.
    ///
    /// The reference point is the word after the current one.
    #[inline(always)]
    pub fn relative(&self, raw: u16, sign_bit: u8) -> i32 {
        sign_extend(raw as u32, sign_bit)
            .wrapping_add(self.address as i32)
            .wrapping_add(1)
    }
}
