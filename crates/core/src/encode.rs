//! Instruction encoder for round-trip tests.

use crate::opcodes::Op;
use crate::registers::{Register, RegisterTable, EGPR, GPR, HGPR, MGPR, RDL};

fn idx(table: &RegisterTable, reg: Register) -> u16 {
    table
        .index_of(reg)
        .unwrap_or_else(|| panic!("{} not encodable in {}", reg, table.name))
}

/// `xxxx xxrd dddd rrrr`
fn reg_reg(opc: u16, rd: Register, rr: Register) -> u16 {
    let (d, r) = (idx(&GPR, rd), idx(&GPR, rr));
    opc | ((r & 0x10) << 5) | (d << 4) | (r & 0xF)
}

/// `xxxx KKKK dddd KKKK`
fn reg_imm(opc: u16, rd: Register, imm: u8) -> u16 {
    let k = imm as u16;
    opc | ((k & 0xF0) << 4) | (idx(&HGPR, rd) << 4) | (k & 0xF)
}

/// `xxxx xxxx KKdd KKKK`
fn word_imm(opc: u16, rd: Register, imm: u8) -> u16 {
    let k = imm as u16;
    opc | ((k & 0x30) << 2) | (idx(&RDL, rd) << 4) | (k & 0xF)
}

/// `xxxx xxxx xddd xrrr`
fn mul3(opc: u16, rd: Register, rr: Register) -> u16 {
    opc | (idx(&MGPR, rd) << 4) | idx(&MGPR, rr)
}

/// `xxxx xxxd dddd xxxx`
fn single(opc: u16, r: Register) -> u16 {
    opc | (idx(&GPR, r) << 4)
}

fn reg_bit(opc: u16, r: Register, bit: u8) -> u16 {
    single(opc, r) | (bit as u16 & 0x7)
}

fn io_bit(opc: u16, ior: u8, bit: u8) -> u16 {
    opc | ((ior as u16 & 0x1F) << 3) | (bit as u16 & 0x7)
}

/// `xxxx xAAr rrrr AAAA`
fn io(opc: u16, r: Register, ior: u8) -> u16 {
    let a = ior as u16;
    single(opc, r) | ((a & 0x30) << 5) | (a & 0xF)
}

fn offset(target: i32, address: u32) -> u16 {
    target.wrapping_sub(address as i32).wrapping_sub(1) as u16
}

fn branch7(opc: u16, target: i32, address: u32) -> u16 {
    opc | ((offset(target, address) & 0x7F) << 3)
}

fn branch12(opc: u16, target: i32, address: u32) -> u16 {
    opc | (offset(target, address) & 0xFFF)
}

fn long(opc: u16, target: u32) -> Vec<u16> {
    let hi = (((target >> 17) & 0x1F) << 4) | ((target >> 16) & 0x1);
    vec![opc | hi as u16, target as u16]
}

/// `10q0 qqsd dddd pqqq`
fn displaced(opc: u16, ar: Register, imm: u8, r: Register) -> u16 {
    let q = imm as u16;
    let p = if ar == Register::Y { 0x8 } else { 0x0 };
    single(opc, r) | ((q & 0x20) << 8) | ((q & 0x18) << 7) | p | (q & 0x7)
}

/// Pick the opcode for the X, Y or Z form of an indirect access.
fn via(ar: Register, x: u16, y: u16, z: u16) -> u16 {
    match ar {
        Register::X => x,
        Register::Y => y,
        Register::Z => z,
        other => panic!("{} is not a pointer", other),
    }
}

/// Encode `op` as it would sit at `address`.
pub(crate) fn encode(op: &Op, address: u32) -> Vec<u16> {
    let w = match *op {
        Op::Add { rd, rr } => reg_reg(0x0C00, rd, rr),
        Op::Adc { rd, rr } => reg_reg(0x1C00, rd, rr),
        Op::Sub { rd, rr } => reg_reg(0x1800, rd, rr),
        Op::Sbc { rd, rr } => reg_reg(0x0800, rd, rr),
        Op::And { rd, rr } => reg_reg(0x2000, rd, rr),
        Op::Or { rd, rr } => reg_reg(0x2800, rd, rr),
        Op::Eor { rd, rr } => reg_reg(0x2400, rd, rr),
        Op::Cp { rd, rr } => reg_reg(0x1400, rd, rr),
        Op::Cpc { rd, rr } => reg_reg(0x0400, rd, rr),
        Op::Cpse { rd, rr } => reg_reg(0x1000, rd, rr),
        Op::Mov { rd, rr } => reg_reg(0x2C00, rd, rr),
        Op::Mul { rd, rr } => reg_reg(0x9C00, rd, rr),
        Op::Movw { rd, rr } => 0x0100 | (idx(&EGPR, rd) << 4) | idx(&EGPR, rr),
        Op::Muls { rd, rr } => 0x0200 | (idx(&HGPR, rd) << 4) | idx(&HGPR, rr),
        Op::Mulsu { rd, rr } => mul3(0x0300, rd, rr),
        Op::Fmul { rd, rr } => mul3(0x0308, rd, rr),
        Op::Fmuls { rd, rr } => mul3(0x0380, rd, rr),
        Op::Fmulsu { rd, rr } => mul3(0x0388, rd, rr),

        Op::Subi { rd, imm } => reg_imm(0x5000, rd, imm),
        Op::Sbci { rd, imm } => reg_imm(0x4000, rd, imm),
        Op::Andi { rd, imm } => reg_imm(0x7000, rd, imm),
        Op::Ori { rd, imm } => reg_imm(0x6000, rd, imm),
        Op::Cpi { rd, imm } => reg_imm(0x3000, rd, imm),
        Op::Ldi { rd, imm } => reg_imm(0xE000, rd, imm),
        Op::Adiw { rd, imm } => word_imm(0x9600, rd, imm),
        Op::Sbiw { rd, imm } => word_imm(0x9700, rd, imm),

        Op::Com { rd } => single(0x9400, rd),
        Op::Neg { rd } => single(0x9401, rd),
        Op::Swap { rd } => single(0x9402, rd),
        Op::Inc { rd } => single(0x9403, rd),
        Op::Asr { rd } => single(0x9405, rd),
        Op::Lsr { rd } => single(0x9406, rd),
        Op::Ror { rd } => single(0x9407, rd),
        Op::Dec { rd } => single(0x940A, rd),
        Op::Push { rr } => single(0x920F, rr),
        Op::Pop { rd } => single(0x900F, rd),

        Op::Bld { rd, bit } => reg_bit(0xF800, rd, bit),
        Op::Bst { rr, bit } => reg_bit(0xFA00, rr, bit),
        Op::Sbrc { rr, bit } => reg_bit(0xFC00, rr, bit),
        Op::Sbrs { rr, bit } => reg_bit(0xFE00, rr, bit),
        Op::Cbi { ior, bit } => io_bit(0x9800, ior, bit),
        Op::Sbic { ior, bit } => io_bit(0x9900, ior, bit),
        Op::Sbi { ior, bit } => io_bit(0x9A00, ior, bit),
        Op::Sbis { ior, bit } => io_bit(0x9B00, ior, bit),

        Op::In { rd, ior } => io(0xB000, rd, ior),
        Op::Out { ior, rr } => io(0xB800, rr, ior),

        Op::Rjmp { target } => branch12(0xC000, target, address),
        Op::Rcall { target } => branch12(0xD000, target, address),
        Op::Brcs { target } => branch7(0xF000, target, address),
        Op::Breq { target } => branch7(0xF001, target, address),
        Op::Brmi { target } => branch7(0xF002, target, address),
        Op::Brvs { target } => branch7(0xF003, target, address),
        Op::Brlt { target } => branch7(0xF004, target, address),
        Op::Brhs { target } => branch7(0xF005, target, address),
        Op::Brts { target } => branch7(0xF006, target, address),
        Op::Brie { target } => branch7(0xF007, target, address),
        Op::Brcc { target } => branch7(0xF400, target, address),
        Op::Brne { target } => branch7(0xF401, target, address),
        Op::Brpl { target } => branch7(0xF402, target, address),
        Op::Brvc { target } => branch7(0xF403, target, address),
        Op::Brge { target } => branch7(0xF404, target, address),
        Op::Brhc { target } => branch7(0xF405, target, address),
        Op::Brtc { target } => branch7(0xF406, target, address),
        Op::Brid { target } => branch7(0xF407, target, address),

        Op::Jmp { target } => return long(0x940C, target),
        Op::Call { target } => return long(0x940E, target),
        Op::Lds { rd, addr } => return vec![single(0x9000, rd), addr],
        Op::Sts { addr, rr } => return vec![single(0x9200, rr), addr],

        Op::Ld { rd, ar } => single(via(ar, 0x900C, 0x8008, 0x8000), rd),
        Op::Ldpi { rd, ar } => single(via(ar, 0x900D, 0x9009, 0x9001), rd),
        Op::Ldpd { rd, ar } => single(via(ar, 0x900E, 0x900A, 0x9002), rd),
        Op::St { ar, rr } => single(via(ar, 0x920C, 0x8208, 0x8200), rr),
        Op::Stpi { ar, rr } => single(via(ar, 0x920D, 0x9209, 0x9201), rr),
        Op::Stpd { ar, rr } => single(via(ar, 0x920E, 0x920A, 0x9202), rr),
        Op::Ldd { rd, ar, imm } => displaced(0x8000, ar, imm, rd),
        Op::Std { ar, imm, rr } => displaced(0x8200, ar, imm, rr),

        Op::Lpmd { rd, .. } => single(0x9004, rd),
        Op::Lpmpi { rd, .. } => single(0x9005, rd),
        Op::Elpmd { rd, .. } => single(0x9006, rd),
        Op::Elpmpi { rd, .. } => single(0x9007, rd),

        Op::Ijmp => 0x9409,
        Op::Eijmp => 0x9419,
        Op::Icall => 0x9509,
        Op::Eicall => 0x9519,
        Op::Ret => 0x9508,
        Op::Reti => 0x9518,
        Op::Sec => 0x9408,
        Op::Sez => 0x9418,
        Op::Sen => 0x9428,
        Op::Sev => 0x9438,
        Op::Ses => 0x9448,
        Op::Seh => 0x9458,
        Op::Set => 0x9468,
        Op::Sei => 0x9478,
        Op::Clc => 0x9488,
        Op::Clz => 0x9498,
        Op::Cln => 0x94A8,
        Op::Clv => 0x94B8,
        Op::Cls => 0x94C8,
        Op::Clh => 0x94D8,
        Op::Clt => 0x94E8,
        Op::Cli => 0x94F8,
        Op::Sleep => 0x9588,
        Op::Break => 0x9598,
        Op::Wdr => 0x95A8,
        Op::Lpm => 0x95C8,
        Op::Elpm => 0x95D8,
        Op::Spm => 0x95E8,
        Op::Nop => 0x0000,
    };
    vec![w]
}

pub(crate) fn to_bytes(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_at;
    use crate::registers::Register::*;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::mem::discriminant;

    const ADDR: u32 = 0x0800;
    const T: i32 = ADDR as i32;

    /// One representative per variant, plus every pointer form.
    fn samples() -> Vec<Op> {
        vec![
            Op::Add { rd: R1, rr: R30 },
            Op::Adc { rd: R17, rr: R2 },
            Op::Sub { rd: R31, rr: R16 },
            Op::Sbc { rd: R0, rr: R0 },
            Op::And { rd: R5, rr: R21 },
            Op::Or { rd: R24, rr: R25 },
            Op::Eor { rd: R1, rr: R1 },
            Op::Cp { rd: R12, rr: R13 },
            Op::Cpc { rd: R19, rr: R31 },
            Op::Cpse { rd: R2, rr: R3 },
            Op::Mov { rd: R28, rr: R14 },
            Op::Movw { rd: R30, rr: R24 },
            Op::Mul { rd: R20, rr: R19 },
            Op::Muls { rd: R16, rr: R31 },
            Op::Mulsu { rd: R17, rr: R22 },
            Op::Fmul { rd: R23, rr: R16 },
            Op::Fmuls { rd: R18, rr: R19 },
            Op::Fmulsu { rd: R21, rr: R20 },
            Op::Subi { rd: R16, imm: 0x80 },
            Op::Sbci { rd: R17, imm: 0xFF },
            Op::Andi { rd: R24, imm: 0x0F },
            Op::Ori { rd: R25, imm: 0xF0 },
            Op::Cpi { rd: R30, imm: 0x5A },
            Op::Ldi { rd: R31, imm: 0x00 },
            Op::Adiw { rd: R24, imm: 63 },
            Op::Sbiw { rd: R30, imm: 1 },
            Op::Com { rd: R4 },
            Op::Neg { rd: R5 },
            Op::Swap { rd: R6 },
            Op::Inc { rd: R7 },
            Op::Dec { rd: R8 },
            Op::Asr { rd: R9 },
            Op::Lsr { rd: R10 },
            Op::Ror { rd: R11 },
            Op::Push { rr: R29 },
            Op::Pop { rd: R28 },
            Op::Bst { rr: R3, bit: 7 },
            Op::Bld { rd: R4, bit: 0 },
            Op::Sbrc { rr: R31, bit: 3 },
            Op::Sbrs { rr: R16, bit: 5 },
            Op::Sbi { ior: 0x1F, bit: 7 },
            Op::Cbi { ior: 0x05, bit: 2 },
            Op::Sbic { ior: 0x09, bit: 4 },
            Op::Sbis { ior: 0x00, bit: 0 },
            Op::In { rd: R16, ior: 0x3F },
            Op::Out { ior: 0x3E, rr: R29 },
            Op::Rjmp { target: T - 2047 },
            Op::Rcall { target: T + 2048 },
            Op::Brcs { target: T - 63 },
            Op::Breq { target: T + 64 },
            Op::Brmi { target: T },
            Op::Brvs { target: T + 1 },
            Op::Brlt { target: T + 2 },
            Op::Brhs { target: T - 1 },
            Op::Brts { target: T + 10 },
            Op::Brie { target: T - 10 },
            Op::Brcc { target: T + 3 },
            Op::Brne { target: T - 3 },
            Op::Brpl { target: T + 30 },
            Op::Brvc { target: T - 30 },
            Op::Brge { target: T + 5 },
            Op::Brhc { target: T - 5 },
            Op::Brtc { target: T + 50 },
            Op::Brid { target: T - 50 },
            Op::Jmp { target: 0x3F1234 },
            Op::Call { target: 0x000100 },
            Op::Ijmp,
            Op::Icall,
            Op::Eijmp,
            Op::Eicall,
            Op::Ret,
            Op::Reti,
            Op::Lds { rd: R24, addr: 0x0123 },
            Op::Sts { addr: 0xFFFF, rr: R0 },
            Op::Ld { rd: R0, ar: X },
            Op::Ld { rd: R1, ar: Y },
            Op::Ld { rd: R2, ar: Z },
            Op::Ldpi { rd: R3, ar: X },
            Op::Ldpi { rd: R4, ar: Y },
            Op::Ldpi { rd: R5, ar: Z },
            Op::Ldpd { rd: R6, ar: X },
            Op::Ldpd { rd: R7, ar: Y },
            Op::Ldpd { rd: R8, ar: Z },
            Op::St { ar: X, rr: R9 },
            Op::St { ar: Y, rr: R10 },
            Op::St { ar: Z, rr: R11 },
            Op::Stpi { ar: X, rr: R12 },
            Op::Stpi { ar: Y, rr: R13 },
            Op::Stpi { ar: Z, rr: R14 },
            Op::Stpd { ar: X, rr: R15 },
            Op::Stpd { ar: Y, rr: R16 },
            Op::Stpd { ar: Z, rr: R17 },
            Op::Ldd { rd: R18, ar: Y, imm: 1 },
            Op::Ldd { rd: R19, ar: Z, imm: 63 },
            Op::Std { ar: Y, imm: 32, rr: R20 },
            Op::Std { ar: Z, imm: 24, rr: R21 },
            Op::Lpm,
            Op::Lpmd { rd: R22, z: Z },
            Op::Lpmpi { rd: R23, z: Z },
            Op::Elpm,
            Op::Elpmd { rd: R24, z: Z },
            Op::Elpmpi { rd: R25, z: Z },
            Op::Spm,
            Op::Sec,
            Op::Clc,
            Op::Sez,
            Op::Clz,
            Op::Sen,
            Op::Cln,
            Op::Sev,
            Op::Clv,
            Op::Ses,
            Op::Cls,
            Op::Seh,
            Op::Clh,
            Op::Set,
            Op::Clt,
            Op::Sei,
            Op::Cli,
            Op::Nop,
            Op::Sleep,
            Op::Break,
            Op::Wdr,
        ]
    }

    fn roundtrip(op: Op) -> Op {
        let words = encode(&op, ADDR);
        assert_eq!(words.len(), op.size_words(), "{:?}", op);
        decode_at(&to_bytes(&words), 0, ADDR)
            .unwrap_or_else(|e| panic!("{:?} -> {:04X?}: {}", op, words, e))
            .op
    }

    #[test]
    fn test_every_variant_roundtrips() {
        let samples = samples();
        let kinds: HashSet<_> = samples.iter().map(discriminant).collect();
        assert_eq!(kinds.len(), 109);
        for op in samples {
            assert_eq!(roundtrip(op), op);
        }
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(encode(&Op::Ret, 0), vec![0x9508]);
        assert_eq!(encode(&Op::Jmp { target: 0x1234 }, 0), vec![0x940C, 0x1234]);
        assert_eq!(encode(&Op::Ldi { rd: R16, imm: 0xFF }, 0), vec![0xEF0F]);
        assert_eq!(encode(&Op::Std { ar: Y, imm: 63, rr: R31 }, 0), vec![0xAFFF]);
        assert_eq!(encode(&Op::Breq { target: 0x100 }, 0x100), vec![0xF3F9]);
    }

    #[test]
    fn test_zero_displacement_reads_as_plain_pointer() {
        let words = encode(&Op::Ldd { rd: R3, ar: Y, imm: 0 }, 0);
        let insn = decode_at(&to_bytes(&words), 0, 0).unwrap();
        assert_eq!(insn.op, Op::Ld { rd: R3, ar: Y });
    }

    fn gpr() -> impl Strategy<Value = Register> {
        (0usize..32).prop_map(|i| Register::GENERAL[i])
    }

    fn upper() -> impl Strategy<Value = Register> {
        (16usize..32).prop_map(|i| Register::GENERAL[i])
    }

    fn yz() -> impl Strategy<Value = Register> {
        prop_oneof![Just(Y), Just(Z)]
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (gpr(), gpr()).prop_map(|(rd, rr)| Op::Add { rd, rr }),
            (gpr(), gpr()).prop_map(|(rd, rr)| Op::Mul { rd, rr }),
            (upper(), any::<u8>()).prop_map(|(rd, imm)| Op::Ldi { rd, imm }),
            (prop_oneof![Just(R24), Just(R26), Just(R28), Just(R30)], 0u8..64)
                .prop_map(|(rd, imm)| Op::Adiw { rd, imm }),
            (gpr(), yz(), 1u8..64).prop_map(|(rd, ar, imm)| Op::Ldd { rd, ar, imm }),
            (yz(), 1u8..64, gpr()).prop_map(|(ar, imm, rr)| Op::Std { ar, imm, rr }),
            (gpr(), 0u8..64).prop_map(|(rd, ior)| Op::In { rd, ior }),
            (0u8..32, 0u8..8).prop_map(|(ior, bit)| Op::Sbic { ior, bit }),
            (gpr(), 0u8..8).prop_map(|(rr, bit)| Op::Sbrs { rr, bit }),
            (-64i32..64).prop_map(|o| Op::Brne { target: T + 1 + o }),
            (-2048i32..2048).prop_map(|o| Op::Rcall { target: T + 1 + o }),
            (0u32..0x40_0000).prop_map(|target| Op::Call { target }),
            (gpr(), any::<u16>()).prop_map(|(rd, addr)| Op::Lds { rd, addr }),
        ]
    }

    proptest! {
        #[test]
        fn encode_decode_roundtrip(op in arb_op()) {
            prop_assert_eq!(roundtrip(op), op);
        }
    }
}
