//! AVR instruction disassembler.
//!
//! Converts decoded [`Instruction`] values to human-readable assembly text.
//! Operands are printed exactly as decoded; nothing is re-derived from raw bits.

use crate::listing::{Entry, Listing};
use crate::opcodes::{Instruction, Op};
use crate::registers::Register;

/// Placeholder printed for words that do not decode.
pub const INVALID_TEXT: &str = "invalid instruction";

/// Code address, signed for relative targets that fall below zero.
fn code_addr(target: i64) -> String {
    if target < 0 {
        format!("-0x{:04X}", -target)
    } else {
        format!("0x{:04X}", target)
    }
}

/// Register pair written high:low, e.g. `R25:R24`.
fn pair(low: Register) -> String {
    match low.number() {
        Some(n) => format!("R{}:R{}", n + 1, n),
        None => low.to_string(),
    }
}

/// Format a decoded instruction as an assembly string.
///
/// The output follows AVR assembly conventions (e.g. `ADD R1, R2`).
pub fn disassemble(insn: &Instruction) -> String {
    let m = insn.op.mnemonic();
    match insn.op {
        Op::Add { rd, rr } | Op::Adc { rd, rr } | Op::Sub { rd, rr }
        | Op::Sbc { rd, rr } | Op::And { rd, rr } | Op::Or { rd, rr }
        | Op::Eor { rd, rr } | Op::Cp { rd, rr } | Op::Cpc { rd, rr }
        | Op::Cpse { rd, rr } | Op::Mov { rd, rr } | Op::Mul { rd, rr }
        | Op::Muls { rd, rr } | Op::Mulsu { rd, rr } | Op::Fmul { rd, rr }
        | Op::Fmuls { rd, rr } | Op::Fmulsu { rd, rr } => format!("{} {}, {}", m, rd, rr),
        Op::Movw { rd, rr } => format!("{} {}, {}", m, pair(rd), pair(rr)),

        Op::Subi { rd, imm } | Op::Sbci { rd, imm } | Op::Andi { rd, imm }
        | Op::Ori { rd, imm } | Op::Cpi { rd, imm } | Op::Ldi { rd, imm } => {
            format!("{} {}, 0x{:02X}", m, rd, imm)
        }
        Op::Adiw { rd, imm } | Op::Sbiw { rd, imm } => format!("{} {}, {}", m, pair(rd), imm),

        Op::Com { rd } | Op::Neg { rd } | Op::Swap { rd } | Op::Inc { rd }
        | Op::Dec { rd } | Op::Asr { rd } | Op::Lsr { rd } | Op::Ror { rd }
        | Op::Pop { rd } => format!("{} {}", m, rd),
        Op::Push { rr } => format!("{} {}", m, rr),

        Op::Bst { rr, bit } | Op::Sbrc { rr, bit } | Op::Sbrs { rr, bit } => {
            format!("{} {}, {}", m, rr, bit)
        }
        Op::Bld { rd, bit } => format!("{} {}, {}", m, rd, bit),
        Op::Sbi { ior, bit } | Op::Cbi { ior, bit } | Op::Sbic { ior, bit }
        | Op::Sbis { ior, bit } => format!("{} 0x{:02X}, {}", m, ior, bit),

        Op::In { rd, ior } => format!("{} {}, 0x{:02X}", m, rd, ior),
        Op::Out { ior, rr } => format!("{} 0x{:02X}, {}", m, ior, rr),

        Op::Jmp { target } | Op::Call { target } => format!("{} 0x{:06X}", m, target),
        Op::Rjmp { .. } | Op::Rcall { .. }
        | Op::Brcs { .. } | Op::Breq { .. } | Op::Brmi { .. } | Op::Brvs { .. }
        | Op::Brlt { .. } | Op::Brhs { .. } | Op::Brts { .. } | Op::Brie { .. }
        | Op::Brcc { .. } | Op::Brne { .. } | Op::Brpl { .. } | Op::Brvc { .. }
        | Op::Brge { .. } | Op::Brhc { .. } | Op::Brtc { .. } | Op::Brid { .. } => {
            let target = insn.op.branch_target().unwrap_or_default();
            format!("{} {}", m, code_addr(target))
        }

        Op::Lds { rd, addr } => format!("{} {}, 0x{:04X}", m, rd, addr),
        Op::Sts { addr, rr } => format!("{} 0x{:04X}, {}", m, addr, rr),
        Op::Ld { rd, ar } => format!("{} {}, {}", m, rd, ar),
        Op::Ldpi { rd, ar } => format!("{} {}, {}+", m, rd, ar),
        Op::Ldpd { rd, ar } => format!("{} {}, -{}", m, rd, ar),
        Op::Ldd { rd, ar, imm } => format!("{} {}, {}+{}", m, rd, ar, imm),
        Op::St { ar, rr } => format!("{} {}, {}", m, ar, rr),
        Op::Stpi { ar, rr } => format!("{} {}+, {}", m, ar, rr),
        Op::Stpd { ar, rr } => format!("{} -{}, {}", m, ar, rr),
        Op::Std { ar, imm, rr } => format!("{} {}+{}, {}", m, ar, imm, rr),

        Op::Lpmd { rd, z } | Op::Elpmd { rd, z } => format!("{} {}, {}", m, rd, z),
        Op::Lpmpi { rd, z } | Op::Elpmpi { rd, z } => format!("{} {}, {}+", m, rd, z),

        Op::Ijmp | Op::Icall | Op::Eijmp | Op::Eicall | Op::Ret | Op::Reti
        | Op::Lpm | Op::Elpm | Op::Spm
        | Op::Sec | Op::Clc | Op::Sez | Op::Clz | Op::Sen | Op::Cln
        | Op::Sev | Op::Clv | Op::Ses | Op::Cls | Op::Seh | Op::Clh
        | Op::Set | Op::Clt | Op::Sei | Op::Cli
        | Op::Nop | Op::Sleep | Op::Break | Op::Wdr => m.into(),
    }
}

/// Format one listing entry as `"0xAAAA: WWWW [WWWW]  TEXT"`.
pub fn format_entry(entry: &Entry) -> String {
    match *entry {
        Entry::Decoded { word, extra: Some(extra), ref insn, .. } => {
            format!("0x{:04X}: {:04X} {:04X}  {}", insn.address, word, extra, disassemble(insn))
        }
        Entry::Decoded { word, extra: None, ref insn, .. } => {
            format!("0x{:04X}: {:04X}       {}", insn.address, word, disassemble(insn))
        }
        Entry::Invalid { address, word, .. } => {
            format!("0x{:04X}: {:04X}       {}", address, word, INVALID_TEXT)
        }
    }
}

/// Disassemble a byte range of a program image.
///
/// Returns one line per instruction for `code[start..end]`; `base` is the word
/// address of `code[0]`. Words that do not decode print [`INVALID_TEXT`] and
/// scanning resumes at the next word.
pub fn disassemble_range(code: &[u8], base: u32, start: usize, end: usize) -> Vec<String> {
    Listing::scan_range(code, base, start, end).lines()
}
