//! Decoded AVR instruction model.
//!
//! An [`Instruction`] pairs the program address it was decoded at with an
//! [`Op`]: one variant per mnemonic/addressing-mode combination, each with
//! fully resolved operands. Register fields hold [`Register`] identities
//! (never raw indices), relative branches hold their absolute target, and
//! I/O numbers are the raw 5- or 6-bit I/O space number.

use serde::{Deserialize, Serialize};

use crate::registers::Register;

/// A decoded instruction at a program address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Address the instruction begins at.
    pub address: u32,
    pub op: Op,
}

impl Instruction {
    pub fn new(address: u32, op: Op) -> Self {
        Instruction { address, op }
    }

    /// Encoded length in bytes (2 or 4).
    pub fn size_bytes(&self) -> usize {
        self.op.size_words() * 2
    }
}

/// Operation and operands of a decoded instruction.
///
/// Field names follow the datasheet: `rd` destination, `rr` source, `imm`
/// immediate, `ior` I/O register number, `bit` bit index 0–7, `ar` pointer
/// register, `target` resolved code address, `addr` data-space address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    // Arithmetic and logic, register/register
    Add { rd: Register, rr: Register },
    Adc { rd: Register, rr: Register },
    Sub { rd: Register, rr: Register },
    Sbc { rd: Register, rr: Register },
    And { rd: Register, rr: Register },
    Or { rd: Register, rr: Register },
    Eor { rd: Register, rr: Register },
    Cp { rd: Register, rr: Register },
    Cpc { rd: Register, rr: Register },
    Cpse { rd: Register, rr: Register },
    Mov { rd: Register, rr: Register },
    Movw { rd: Register, rr: Register },
    // Multiply
    Mul { rd: Register, rr: Register },
    Muls { rd: Register, rr: Register },
    Mulsu { rd: Register, rr: Register },
    Fmul { rd: Register, rr: Register },
    Fmuls { rd: Register, rr: Register },
    Fmulsu { rd: Register, rr: Register },
    // Register/immediate
    Subi { rd: Register, imm: u8 },
    Sbci { rd: Register, imm: u8 },
    Andi { rd: Register, imm: u8 },
    Ori { rd: Register, imm: u8 },
    Cpi { rd: Register, imm: u8 },
    Ldi { rd: Register, imm: u8 },
    Adiw { rd: Register, imm: u8 },
    Sbiw { rd: Register, imm: u8 },
    // Single register
    Com { rd: Register },
    Neg { rd: Register },
    Swap { rd: Register },
    Inc { rd: Register },
    Dec { rd: Register },
    Asr { rd: Register },
    Lsr { rd: Register },
    Ror { rd: Register },
    Push { rr: Register },
    Pop { rd: Register },
    // Bits
    Bst { rr: Register, bit: u8 },
    Bld { rd: Register, bit: u8 },
    Sbrc { rr: Register, bit: u8 },
    Sbrs { rr: Register, bit: u8 },
    Sbi { ior: u8, bit: u8 },
    Cbi { ior: u8, bit: u8 },
    Sbic { ior: u8, bit: u8 },
    Sbis { ior: u8, bit: u8 },
    // I/O
    In { rd: Register, ior: u8 },
    Out { ior: u8, rr: Register },
    // Relative control flow
    Rjmp { target: i32 },
    Rcall { target: i32 },
    Brcs { target: i32 },
    Breq { target: i32 },
    Brmi { target: i32 },
    Brvs { target: i32 },
    Brlt { target: i32 },
    Brhs { target: i32 },
    Brts { target: i32 },
    Brie { target: i32 },
    Brcc { target: i32 },
    Brne { target: i32 },
    Brpl { target: i32 },
    Brvc { target: i32 },
    Brge { target: i32 },
    Brhc { target: i32 },
    Brtc { target: i32 },
    Brid { target: i32 },
    // Absolute control flow (two words)
    Jmp { target: u32 },
    Call { target: u32 },
    // Indirect and returns
    Ijmp,
    Icall,
    Eijmp,
    Eicall,
    Ret,
    Reti,
    // Data space loads and stores
    Lds { rd: Register, addr: u16 },
    Sts { addr: u16, rr: Register },
    Ld { rd: Register, ar: Register },
    Ldd { rd: Register, ar: Register, imm: u8 },
    Ldpi { rd: Register, ar: Register },
    Ldpd { rd: Register, ar: Register },
    St { ar: Register, rr: Register },
    Std { ar: Register, imm: u8, rr: Register },
    Stpi { ar: Register, rr: Register },
    Stpd { ar: Register, rr: Register },
    // Program memory
    Lpm,
    Lpmd { rd: Register, z: Register },
    Lpmpi { rd: Register, z: Register },
    Elpm,
    Elpmd { rd: Register, z: Register },
    Elpmpi { rd: Register, z: Register },
    Spm,
    // Status register
    Sec,
    Clc,
    Sez,
    Clz,
    Sen,
    Cln,
    Sev,
    Clv,
    Ses,
    Cls,
    Seh,
    Clh,
    Set,
    Clt,
    Sei,
    Cli,
    // MCU control
    Nop,
    Sleep,
    Break,
    Wdr,
}

impl Op {
    /// Encoded length in 16-bit words.
    pub fn size_words(&self) -> usize {
        match self {
            Op::Jmp { .. } | Op::Call { .. } | Op::Lds { .. } | Op::Sts { .. } => 2,
            _ => 1,
        }
    }

    /// Relative or absolute branch destination, if the instruction has one.
    pub fn branch_target(&self) -> Option<i64> {
        match *self {
            Op::Rjmp { target } | Op::Rcall { target }
            | Op::Brcs { target } | Op::Breq { target } | Op::Brmi { target }
            | Op::Brvs { target } | Op::Brlt { target } | Op::Brhs { target }
            | Op::Brts { target } | Op::Brie { target } | Op::Brcc { target }
            | Op::Brne { target } | Op::Brpl { target } | Op::Brvc { target }
            | Op::Brge { target } | Op::Brhc { target } | Op::Brtc { target }
            | Op::Brid { target } => Some(target as i64),
            Op::Jmp { target } | Op::Call { target } => Some(target as i64),
            _ => None,
        }
    }

    /// Upper-case assembler mnemonic.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Op::Add { .. } => "ADD",
            Op::Adc { .. } => "ADC",
            Op::Sub { .. } => "SUB",
            Op::Sbc { .. } => "SBC",
            Op::And { .. } => "AND",
            Op::Or { .. } => "OR",
            Op::Eor { .. } => "EOR",
            Op::Cp { .. } => "CP",
            Op::Cpc { .. } => "CPC",
            Op::Cpse { .. } => "CPSE",
            Op::Mov { .. } => "MOV",
            Op::Movw { .. } => "MOVW",
            Op::Mul { .. } => "MUL",
            Op::Muls { .. } => "MULS",
            Op::Mulsu { .. } => "MULSU",
            Op::Fmul { .. } => "FMUL",
            Op::Fmuls { .. } => "FMULS",
            Op::Fmulsu { .. } => "FMULSU",
            Op::Subi { .. } => "SUBI",
            Op::Sbci { .. } => "SBCI",
            Op::Andi { .. } => "ANDI",
            Op::Ori { .. } => "ORI",
            Op::Cpi { .. } => "CPI",
            Op::Ldi { .. } => "LDI",
            Op::Adiw { .. } => "ADIW",
            Op::Sbiw { .. } => "SBIW",
            Op::Com { .. } => "COM",
            Op::Neg { .. } => "NEG",
            Op::Swap { .. } => "SWAP",
            Op::Inc { .. } => "INC",
            Op::Dec { .. } => "DEC",
            Op::Asr { .. } => "ASR",
            Op::Lsr { .. } => "LSR",
            Op::Ror { .. } => "ROR",
            Op::Push { .. } => "PUSH",
            Op::Pop { .. } => "POP",
            Op::Bst { .. } => "BST",
            Op::Bld { .. } => "BLD",
            Op::Sbrc { .. } => "SBRC",
            Op::Sbrs { .. } => "SBRS",
            Op::Sbi { .. } => "SBI",
            Op::Cbi { .. } => "CBI",
            Op::Sbic { .. } => "SBIC",
            Op::Sbis { .. } => "SBIS",
            Op::In { .. } => "IN",
            Op::Out { .. } => "OUT",
            Op::Rjmp { .. } => "RJMP",
            Op::Rcall { .. } => "RCALL",
            Op::Brcs { .. } => "BRCS",
            Op::Breq { .. } => "BREQ",
            Op::Brmi { .. } => "BRMI",
            Op::Brvs { .. } => "BRVS",
            Op::Brlt { .. } => "BRLT",
            Op::Brhs { .. } => "BRHS",
            Op::Brts { .. } => "BRTS",
            Op::Brie { .. } => "BRIE",
            Op::Brcc { .. } => "BRCC",
            Op::Brne { .. } => "BRNE",
            Op::Brpl { .. } => "BRPL",
            Op::Brvc { .. } => "BRVC",
            Op::Brge { .. } => "BRGE",
            Op::Brhc { .. } => "BRHC",
            Op::Brtc { .. } => "BRTC",
            Op::Brid { .. } => "BRID",
            Op::Jmp { .. } => "JMP",
            Op::Call { .. } => "CALL",
            Op::Ijmp => "IJMP",
            Op::Icall => "ICALL",
            Op::Eijmp => "EIJMP",
            Op::Eicall => "EICALL",
            Op::Ret => "RET",
            Op::Reti => "RETI",
            Op::Lds { .. } => "LDS",
            Op::Sts { .. } => "STS",
            Op::Ld { .. } | Op::Ldpi { .. } | Op::Ldpd { .. } => "LD",
            Op::Ldd { .. } => "LDD",
            Op::St { .. } | Op::Stpi { .. } | Op::Stpd { .. } => "ST",
            Op::Std { .. } => "STD",
            Op::Lpm | Op::Lpmd { .. } | Op::Lpmpi { .. } => "LPM",
            Op::Elpm | Op::Elpmd { .. } | Op::Elpmpi { .. } => "ELPM",
            Op::Spm => "SPM",
            Op::Sec => "SEC",
            Op::Clc => "CLC",
            Op::Sez => "SEZ",
            Op::Clz => "CLZ",
            Op::Sen => "SEN",
            Op::Cln => "CLN",
            Op::Sev => "SEV",
            Op::Clv => "CLV",
            Op::Ses => "SES",
            Op::Cls => "CLS",
            Op::Seh => "SEH",
            Op::Clh => "CLH",
            Op::Set => "SET",
            Op::Clt => "CLT",
            Op::Sei => "SEI",
            Op::Cli => "CLI",
            Op::Nop => "NOP",
            Op::Sleep => "SLEEP",
            Op::Break => "BREAK",
            Op::Wdr => "WDR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::Register::*;

    #[test]
    fn test_sizes() {
        assert_eq!(Op::Jmp { target: 0 }.size_words(), 2);
        assert_eq!(Op::Sts { addr: 0x100, rr: R0 }.size_words(), 2);
        assert_eq!(Op::Lds { rd: R1, addr: 0x100 }.size_words(), 2);
        assert_eq!(Op::Ldd { rd: R0, ar: Y, imm: 3 }.size_words(), 1);
        assert_eq!(Instruction::new(0, Op::Call { target: 4 }).size_bytes(), 4);
        assert_eq!(Instruction::new(0, Op::Ret).size_bytes(), 2);
    }

    #[test]
    fn test_branch_target() {
        assert_eq!(Op::Brne { target: -3 }.branch_target(), Some(-3));
        assert_eq!(Op::Call { target: 0x3F1234 }.branch_target(), Some(0x3F1234));
        assert_eq!(Op::Ijmp.branch_target(), None);
    }

    #[test]
    fn test_mnemonics() {
        assert_eq!(Op::Ldpi { rd: R0, ar: X }.mnemonic(), "LD");
        assert_eq!(Op::Stpd { ar: Z, rr: R1 }.mnemonic(), "ST");
        assert_eq!(Op::Elpmpi { rd: R0, z: Z }.mnemonic(), "ELPM");
        assert_eq!(Op::Fmulsu { rd: R16, rr: R17 }.mnemonic(), "FMULSU");
    }
}
