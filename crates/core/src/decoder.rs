//! Top-level decode entry points.

use log::trace;

use crate::context::{DecodeContext, WORD_BYTES};
use crate::error::{DecodeError, Fault, Invalid};
use crate::opcodes::Instruction;
use crate::tree::{walk, Outcome, ROOTS};

/// Decode the instruction at `code[offset..]`.
///
/// The instruction's address is `base + offset`. Use [`decode_at`] to
/// supply the address directly (e.g. in word units).
pub fn decode(code: &[u8], base: u32, offset: usize) -> Result<Instruction, DecodeError> {
    decode_at(code, offset, base.wrapping_add(offset as u32))
}

/// Decode the instruction at `code[offset..]`, reporting it at `address`.
///
/// Relative branch targets are resolved against `address`.
pub fn decode_at(code: &[u8], offset: usize, address: u32) -> Result<Instruction, DecodeError> {
    let ctx = DecodeContext::new(code, offset, address).ok_or(DecodeError::BufferUnderrun {
        word: None,
        address,
        offset,
        needed: WORD_BYTES,
        available: code.len().saturating_sub(offset),
    })?;

    for (name, root) in ROOTS.iter() {
        match walk(root, &ctx) {
            Outcome::Matched(op) => return Ok(Instruction::new(address, op)),
            Outcome::Invalid(fault) => return Err(surface(&ctx, fault)),
            Outcome::NoMatch => {
                trace!("0x{:04X} at 0x{:04X}: no match under {} root", ctx.word(), address, name);
            }
        }
    }

    Err(DecodeError::InvalidEncoding {
        word: ctx.word(),
        address,
        reason: Invalid::Unmatched,
    })
}

fn surface(ctx: &DecodeContext<'_>, fault: Fault) -> DecodeError {
    match fault {
        Fault::RegisterGap { table, index } => DecodeError::InvalidEncoding {
            word: ctx.word(),
            address: ctx.address(),
            reason: Invalid::RegisterGap { table, index },
        },
        Fault::Truncated { needed, available } => DecodeError::BufferUnderrun {
            word: Some(ctx.word()),
            address: ctx.address(),
            offset: ctx.offset(),
            needed,
            available,
        },
    }
}
