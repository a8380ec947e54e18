//! Data-driven decision tree.
//!
//! Every interior node extracts one bit-slice of the first instruction word
//! and picks a child by its value; every leaf carries a fixed-bit constraint
//! and the decoder that builds the [`Op`]. Both roots are immutable statics
//! shared by all decode calls.
//!
//! The primary root partitions the encoding space by bits 15..12. The
//! displacement family (`LDD`/`STD`) is only identified by bits 15..14 and 12
//! and lives under its own root, probed after the primary root finds nothing.

use crate::bits::extract_field;
use crate::context::DecodeContext;
use crate::error::Fault;
use crate::leaves::{self, LeafFn};
use crate::opcodes::Op;

/// A node of the decision tree.
pub enum Node {
    /// Extract `(word >> shift) & mask` and descend into the matching arm.
    Switch {
        shift: u8,
        mask: u16,
        arms: &'static [(u16, Node)],
    },
    /// Accept the word if `word & fixed_mask == fixed_bits`, then decode.
    Leaf {
        fixed_mask: u16,
        fixed_bits: u16,
        decode: LeafFn,
    },
}

/// Result of walking one root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched(Op),
    /// No arm or leaf constraint accepted the word. Not an error.
    NoMatch,
    /// A leaf matched but could not resolve its operands.
    Invalid(Fault),
}

/// Walk `root` for the word held by `ctx`.
pub fn walk(root: &Node, ctx: &DecodeContext<'_>) -> Outcome {
    let word = ctx.word();
    let mut node = root;
    loop {
        match node {
            Node::Switch { shift, mask, arms } => {
                let key = extract_field(word, *shift, *mask);
                match arms.iter().find(|(k, _)| *k == key) {
                    Some((_, child)) => node = child,
                    None => return Outcome::NoMatch,
                }
            }
            Node::Leaf { fixed_mask, fixed_bits, decode } => {
                if word & fixed_mask != *fixed_bits {
                    return Outcome::NoMatch;
                }
                return match decode(ctx) {
                    Ok(op) => Outcome::Matched(op),
                    Err(fault) => Outcome::Invalid(fault),
                };
            }
        }
    }
}

macro_rules! leaf {
    ($decode:path) => {
        Node::Leaf { fixed_mask: 0, fixed_bits: 0, decode: $decode }
    };
    ($decode:path, $mask:expr => $bits:expr) => {
        Node::Leaf { fixed_mask: $mask, fixed_bits: $bits, decode: $decode }
    };
}

macro_rules! switch {
    ($shift:expr, $mask:expr, [$($key:expr => $node:expr),* $(,)?]) => {
        Node::Switch { shift: $shift, mask: $mask, arms: &[$(($key, $node)),*] }
    };
}

const BIT0: u16 = 0x0001;
const BIT3: u16 = 0x0008;

/// Root keyed on bits 15..12.
pub static PRIMARY: Node = switch!(12, 0xF, [
    0x0 => switch!(10, 0x3, [
        0 => switch!(8, 0x3, [
            0 => leaf!(leaves::nop, 0x00FF => 0x0000),
            1 => leaf!(leaves::movw),
            2 => leaf!(leaves::muls),
            3 => switch!(7, 0x1, [
                0 => switch!(3, 0x1, [0 => leaf!(leaves::mulsu), 1 => leaf!(leaves::fmul)]),
                1 => switch!(3, 0x1, [0 => leaf!(leaves::fmuls), 1 => leaf!(leaves::fmulsu)]),
            ]),
        ]),
        1 => leaf!(leaves::cpc),
        2 => leaf!(leaves::sbc),
        3 => leaf!(leaves::add),
    ]),
    0x1 => switch!(10, 0x3, [
        0 => leaf!(leaves::cpse),
        1 => leaf!(leaves::cp),
        2 => leaf!(leaves::sub),
        3 => leaf!(leaves::adc),
    ]),
    0x2 => switch!(10, 0x3, [
        0 => leaf!(leaves::and),
        1 => leaf!(leaves::eor),
        2 => leaf!(leaves::or),
        3 => leaf!(leaves::mov),
    ]),
    0x3 => leaf!(leaves::cpi),
    0x4 => leaf!(leaves::sbci),
    0x5 => leaf!(leaves::subi),
    0x6 => leaf!(leaves::ori),
    0x7 => leaf!(leaves::andi),
    // LD/ST through Y or Z with every displacement bit clear
    0x8 => switch!(9, 0x7, [
        0 => switch!(0, 0xF, [0x0 => leaf!(leaves::ld_z), 0x8 => leaf!(leaves::ld_y)]),
        1 => switch!(0, 0xF, [0x0 => leaf!(leaves::st_z), 0x8 => leaf!(leaves::st_y)]),
    ]),
    0x9 => switch!(10, 0x3, [
        0 => switch!(9, 0x1, [
            0 => switch!(0, 0xF, [
                0x0 => leaf!(leaves::lds),
                0x1 => leaf!(leaves::ldpi_z),
                0x2 => leaf!(leaves::ldpd_z),
                0x4 => leaf!(leaves::lpmd),
                0x5 => leaf!(leaves::lpmpi),
                0x6 => leaf!(leaves::elpmd),
                0x7 => leaf!(leaves::elpmpi),
                0x9 => leaf!(leaves::ldpi_y),
                0xA => leaf!(leaves::ldpd_y),
                0xC => leaf!(leaves::ld_x),
                0xD => leaf!(leaves::ldpi_x),
                0xE => leaf!(leaves::ldpd_x),
                0xF => leaf!(leaves::pop),
            ]),
            1 => switch!(0, 0xF, [
                0x0 => leaf!(leaves::sts),
                0x1 => leaf!(leaves::stpi_z),
                0x2 => leaf!(leaves::stpd_z),
                0x9 => leaf!(leaves::stpi_y),
                0xA => leaf!(leaves::stpd_y),
                0xC => leaf!(leaves::st_x),
                0xD => leaf!(leaves::stpi_x),
                0xE => leaf!(leaves::stpd_x),
                0xF => leaf!(leaves::push),
            ]),
        ]),
        1 => switch!(9, 0x1, [
            0 => switch!(1, 0x7, [
                0 => switch!(0, 0x1, [0 => leaf!(leaves::com), 1 => leaf!(leaves::neg)]),
                1 => switch!(0, 0x1, [0 => leaf!(leaves::swap), 1 => leaf!(leaves::inc)]),
                2 => leaf!(leaves::asr, BIT0 => BIT0),
                3 => switch!(0, 0x1, [0 => leaf!(leaves::lsr), 1 => leaf!(leaves::ror)]),
                4 => switch!(4, 0x1F, [
                    0x00 => switch!(0, 0x1, [0 => leaf!(leaves::sec), 1 => leaf!(leaves::ijmp)]),
                    0x01 => switch!(0, 0x1, [0 => leaf!(leaves::sez), 1 => leaf!(leaves::eijmp)]),
                    0x02 => leaf!(leaves::sen, BIT0 => 0),
                    0x03 => leaf!(leaves::sev, BIT0 => 0),
                    0x04 => leaf!(leaves::ses, BIT0 => 0),
                    0x05 => leaf!(leaves::seh, BIT0 => 0),
                    0x06 => leaf!(leaves::set, BIT0 => 0),
                    0x07 => leaf!(leaves::sei, BIT0 => 0),
                    0x08 => leaf!(leaves::clc, BIT0 => 0),
                    0x09 => leaf!(leaves::clz, BIT0 => 0),
                    0x0A => leaf!(leaves::cln, BIT0 => 0),
                    0x0B => leaf!(leaves::clv, BIT0 => 0),
                    0x0C => leaf!(leaves::cls, BIT0 => 0),
                    0x0D => leaf!(leaves::clh, BIT0 => 0),
                    0x0E => leaf!(leaves::clt, BIT0 => 0),
                    0x0F => leaf!(leaves::cli, BIT0 => 0),
                    0x10 => switch!(0, 0x1, [0 => leaf!(leaves::ret), 1 => leaf!(leaves::icall)]),
                    0x11 => switch!(0, 0x1, [0 => leaf!(leaves::reti), 1 => leaf!(leaves::eicall)]),
                    0x18 => leaf!(leaves::sleep, BIT0 => 0),
                    0x19 => leaf!(leaves::break_, BIT0 => 0),
                    0x1A => leaf!(leaves::wdr, BIT0 => 0),
                    0x1C => leaf!(leaves::lpm, BIT0 => 0),
                    0x1D => leaf!(leaves::elpm, BIT0 => 0),
                    0x1E => leaf!(leaves::spm, BIT0 => 0),
                ]),
                5 => leaf!(leaves::dec, BIT0 => 0),
                6 => leaf!(leaves::jmp),
                7 => leaf!(leaves::call),
            ]),
            1 => switch!(8, 0x1, [0 => leaf!(leaves::adiw), 1 => leaf!(leaves::sbiw)]),
        ]),
        2 => switch!(8, 0x3, [
            0 => leaf!(leaves::cbi),
            1 => leaf!(leaves::sbic),
            2 => leaf!(leaves::sbi),
            3 => leaf!(leaves::sbis),
        ]),
        3 => leaf!(leaves::mul),
    ]),
    0xB => switch!(11, 0x1, [0 => leaf!(leaves::in_), 1 => leaf!(leaves::out)]),
    0xC => leaf!(leaves::rjmp),
    0xD => leaf!(leaves::rcall),
    0xE => leaf!(leaves::ldi),
    0xF => switch!(10, 0x3, [
        0 => switch!(0, 0x7, [
            0 => leaf!(leaves::brcs),
            1 => leaf!(leaves::breq),
            2 => leaf!(leaves::brmi),
            3 => leaf!(leaves::brvs),
            4 => leaf!(leaves::brlt),
            5 => leaf!(leaves::brhs),
            6 => leaf!(leaves::brts),
            7 => leaf!(leaves::brie),
        ]),
        1 => switch!(0, 0x7, [
            0 => leaf!(leaves::brcc),
            1 => leaf!(leaves::brne),
            2 => leaf!(leaves::brpl),
            3 => leaf!(leaves::brvc),
            4 => leaf!(leaves::brge),
            5 => leaf!(leaves::brhc),
            6 => leaf!(leaves::brtc),
            7 => leaf!(leaves::brid),
        ]),
        2 => switch!(9, 0x1, [
            0 => leaf!(leaves::bld, BIT3 => 0),
            1 => leaf!(leaves::bst, BIT3 => 0),
        ]),
        3 => switch!(9, 0x1, [
            0 => leaf!(leaves::sbrc, BIT3 => 0),
            1 => leaf!(leaves::sbrs, BIT3 => 0),
        ]),
    ]),
]);

/// Root for `10q0 qqsd dddd pqqq`: LDD (s = 0) and STD (s = 1).
pub static DISPLACEMENT: Node = switch!(14, 0x3, [
    2 => switch!(12, 0x1, [
        0 => switch!(9, 0x1, [0 => leaf!(leaves::ldd), 1 => leaf!(leaves::std)]),
    ]),
]);

/// Roots in probe order.
pub static ROOTS: [(&str, &Node); 2] = [("primary", &PRIMARY), ("displacement", &DISPLACEMENT)];
