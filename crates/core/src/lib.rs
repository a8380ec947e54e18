//! # avr-decode
//!
//! Instruction decoder for the 8-bit AVR instruction set (ATmega class).
//!
//! Turns raw little-endian program bytes into typed [`Instruction`] values
//! with fully resolved operands: register identities instead of raw indices,
//! absolute branch targets instead of signed offsets. Decoding is a pure
//! function over an immutable tree of static tables, so a single decoder can
//! be shared by any number of threads.
//!
//! ## Architecture
//!
//! - [`bits`]: Bit-field extraction, sign extension, single-bit access
//! - [`registers`]: Register identities and per-operand register tables
//! - [`opcodes`]: The [`Instruction`] / [`Op`] model
//! - [`context`]: Per-call decode state
//! - [`leaves`]: One decoder per concrete encoding
//! - [`tree`]: Data-driven decision tree with primary and displacement roots
//! - [`decoder`]: [`decode`] and [`decode_at`] entry points
//! - [`disasm`]: Assembly text formatter
//! - [`listing`]: Whole-image scans, saved to and loaded from disk
//! - [`hex`]: Intel HEX loader
//!
//! ## Example
//!
//! ```
//! use avr_decode::{decode, Op};
//!
//! let insn = decode(&[0x08, 0x95], 0, 0).unwrap();
//! assert_eq!(insn.op, Op::Ret);
//! assert!(decode(&[0xFF, 0xFF], 0, 0).is_err());
//! ```

pub mod bits;
pub mod registers;
pub mod opcodes;
pub mod context;
pub mod error;
pub mod leaves;
pub mod tree;
pub mod decoder;
pub mod disasm;
pub mod listing;
pub mod hex;

#[cfg(test)]
mod encode;

pub use decoder::{decode, decode_at};
pub use disasm::{disassemble, disassemble_range};
pub use error::{DecodeError, Invalid};
pub use listing::{Entry, Listing, ListingError};
pub use opcodes::{Instruction, Op};
pub use registers::Register;
