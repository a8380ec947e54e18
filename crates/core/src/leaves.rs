//! Leaf decoders: one per concrete encoding.
//!
//! A leaf runs only after the tree has matched its selector bits and the
//! leaf's fixed-bit constraint (see [`crate::tree`]). It reassembles the
//! operand fields, resolves register indices through the register tables
//! and builds the [`Op`]. Register resolution is the only way a leaf fails,
//! apart from the two-word leaves reading past the end of the buffer.
//!
//! Bit layouts below are written most-significant bit first, `d`/`r` for
//! register index bits, `K` immediate, `A` I/O number, `b` bit index,
//! `k` code offset or address, `q` displacement.

use crate::bits::{extract_field, get_bit, set_bit};
use crate::context::DecodeContext;
use crate::error::Fault;
use crate::opcodes::Op;
use crate::registers::{lookup, Register, EGPR, GPR, HGPR, MGPR, RDL, YZ, Z_ONLY};

/// Signature shared by every leaf decoder.
pub type LeafFn = fn(&DecodeContext<'_>) -> Result<Op, Fault>;

// ─── Field extractors ───────────────────────────────────────────────────────

/// `xxxx xxxd dddd xxxx`
#[inline(always)]
fn rd5(w: u16) -> u16 {
    extract_field(w, 4, 0x1F)
}

/// `xxxx xxrx xxxx rrrr`
#[inline(always)]
fn rr5(w: u16) -> u16 {
    (extract_field(w, 9, 0x1) << 4) | extract_field(w, 0, 0xF)
}

/// `xxxx KKKK xxxx KKKK`
#[inline(always)]
fn imm8(w: u16) -> u8 {
    ((extract_field(w, 8, 0xF) << 4) | extract_field(w, 0, 0xF)) as u8
}

/// `xxxx xAAx xxxx AAAA`
#[inline(always)]
fn ior6(w: u16) -> u8 {
    ((extract_field(w, 9, 0x3) << 4) | extract_field(w, 0, 0xF)) as u8
}

/// `xxxx xxxx AAAA Abbb`
#[inline(always)]
fn ior5(w: u16) -> u8 {
    extract_field(w, 3, 0x1F) as u8
}

#[inline(always)]
fn bit3(w: u16) -> u8 {
    extract_field(w, 0, 0x7) as u8
}

/// `xxqx qqxx xxxx xqqq`: bit 13 → q5, bits 11:10 → q4:3, bits 2:0 → q2:0
fn displacement(w: u16) -> u8 {
    let mut q = set_bit(0, 5, get_bit(w, 13));
    q |= extract_field(w, 10, 0x3) << 3;
    q |= extract_field(w, 0, 0x7);
    q as u8
}

// ─── Shapes ─────────────────────────────────────────────────────────────────

/// `xxxx xxrd dddd rrrr` over the full register file.
fn reg_reg(ctx: &DecodeContext<'_>, make: fn(Register, Register) -> Op) -> Result<Op, Fault> {
    let w = ctx.word();
    Ok(make(lookup(&GPR, rd5(w))?, lookup(&GPR, rr5(w))?))
}

/// `xxxx KKKK dddd KKKK`, Rd in R16–R31.
fn reg_imm(ctx: &DecodeContext<'_>, make: fn(Register, u8) -> Op) -> Result<Op, Fault> {
    let w = ctx.word();
    Ok(make(lookup(&HGPR, extract_field(w, 4, 0xF))?, imm8(w)))
}

/// `xxxx xxxd dddd xxxx`
fn single(ctx: &DecodeContext<'_>, make: fn(Register) -> Op) -> Result<Op, Fault> {
    Ok(make(lookup(&GPR, rd5(ctx.word()))?))
}

/// `xxxx xxxd dddd xbbb`
fn reg_bit(ctx: &DecodeContext<'_>, make: fn(Register, u8) -> Op) -> Result<Op, Fault> {
    let w = ctx.word();
    Ok(make(lookup(&GPR, rd5(w))?, bit3(w)))
}

/// `xxxx xxxx AAAA Abbb`
fn io_bit(ctx: &DecodeContext<'_>, make: fn(u8, u8) -> Op) -> Result<Op, Fault> {
    let w = ctx.word();
    Ok(make(ior5(w), bit3(w)))
}

/// `xxxx xxxx xddd xrrr`, both in R16–R23.
fn mul3(ctx: &DecodeContext<'_>, make: fn(Register, Register) -> Op) -> Result<Op, Fault> {
    let w = ctx.word();
    let rd = lookup(&MGPR, extract_field(w, 4, 0x7))?;
    let rr = lookup(&MGPR, extract_field(w, 0, 0x7))?;
    Ok(make(rd, rr))
}

/// `xxxx xxxx KKdd KKKK`, Rd one of R24/R26/R28/R30.
fn word_imm(ctx: &DecodeContext<'_>, make: fn(Register, u8) -> Op) -> Result<Op, Fault> {
    let w = ctx.word();
    let rd = lookup(&RDL, extract_field(w, 4, 0x3))?;
    let imm = (extract_field(w, 6, 0x3) << 4) | extract_field(w, 0, 0xF);
    Ok(make(rd, imm as u8))
}

/// `xxxx xxkk kkkk kxxx`, 7-bit signed offset.
fn branch7(ctx: &DecodeContext<'_>, make: fn(i32) -> Op) -> Result<Op, Fault> {
    let raw = extract_field(ctx.word(), 3, 0x7F);
    Ok(make(ctx.relative(raw, 6)))
}

/// `xxxx kkkk kkkk kkkk`, 12-bit signed offset.
fn branch12(ctx: &DecodeContext<'_>, make: fn(i32) -> Op) -> Result<Op, Fault> {
    let raw = extract_field(ctx.word(), 0, 0xFFF);
    Ok(make(ctx.relative(raw, 11)))
}

/// `xxxx xxxk kkkk xxxk kkkk kkkk kkkk kkkk`, 22-bit code address.
fn long_target(ctx: &DecodeContext<'_>) -> Result<u32, Fault> {
    let w = ctx.word();
    let w2 = ctx.second_word()?;
    let mut target = (extract_field(w, 4, 0x1F) as u32) << 17;
    target |= (extract_field(w, 0, 0x1) as u32) << 16;
    target |= w2 as u32;
    Ok(target)
}

/// `xxxx xxxd dddd xxxx` loading through a fixed pointer.
fn load_via(ctx: &DecodeContext<'_>, ar: Register, make: fn(Register, Register) -> Op) -> Result<Op, Fault> {
    Ok(make(lookup(&GPR, rd5(ctx.word()))?, ar))
}

/// `xxxx xxxr rrrr xxxx` storing through a fixed pointer.
fn store_via(ctx: &DecodeContext<'_>, ar: Register, make: fn(Register, Register) -> Op) -> Result<Op, Fault> {
    Ok(make(ar, lookup(&GPR, rd5(ctx.word()))?))
}

/// `xxxx xxxd dddd xxxx` reading program memory through Z.
fn program_load(ctx: &DecodeContext<'_>, make: fn(Register, Register) -> Op) -> Result<Op, Fault> {
    let rd = lookup(&GPR, rd5(ctx.word()))?;
    Ok(make(rd, lookup(&Z_ONLY, 0)?))
}

// ─── Register/register ──────────────────────────────────────────────────────

pub fn add(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Add { rd, rr }) }
pub fn adc(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Adc { rd, rr }) }
pub fn sub(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Sub { rd, rr }) }
pub fn sbc(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Sbc { rd, rr }) }
pub fn and(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::And { rd, rr }) }
pub fn or(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Or { rd, rr }) }
pub fn eor(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Eor { rd, rr }) }
pub fn cp(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Cp { rd, rr }) }
pub fn cpc(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Cpc { rd, rr }) }
pub fn cpse(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Cpse { rd, rr }) }
pub fn mov(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Mov { rd, rr }) }
pub fn mul(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_reg(ctx, |rd, rr| Op::Mul { rd, rr }) }

/// MOVW: `0000 0001 dddd rrrr`, register pairs by even index.
pub fn movw(ctx: &DecodeContext<'_>) -> Result<Op, Fault> {
    let w = ctx.word();
    let rd = lookup(&EGPR, extract_field(w, 4, 0xF))?;
    let rr = lookup(&EGPR, extract_field(w, 0, 0xF))?;
    Ok(Op::Movw { rd, rr })
}

/// MULS: `0000 0010 dddd rrrr`
pub fn muls(ctx: &DecodeContext<'_>) -> Result<Op, Fault> {
    let w = ctx.word();
    let rd = lookup(&HGPR, extract_field(w, 4, 0xF))?;
    let rr = lookup(&HGPR, extract_field(w, 0, 0xF))?;
    Ok(Op::Muls { rd, rr })
}

pub fn mulsu(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { mul3(ctx, |rd, rr| Op::Mulsu { rd, rr }) }
pub fn fmul(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { mul3(ctx, |rd, rr| Op::Fmul { rd, rr }) }
pub fn fmuls(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { mul3(ctx, |rd, rr| Op::Fmuls { rd, rr }) }
pub fn fmulsu(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { mul3(ctx, |rd, rr| Op::Fmulsu { rd, rr }) }

// ─── Register/immediate ─────────────────────────────────────────────────────

pub fn subi(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_imm(ctx, |rd, imm| Op::Subi { rd, imm }) }
pub fn sbci(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_imm(ctx, |rd, imm| Op::Sbci { rd, imm }) }
pub fn andi(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_imm(ctx, |rd, imm| Op::Andi { rd, imm }) }
pub fn ori(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_imm(ctx, |rd, imm| Op::Ori { rd, imm }) }
pub fn cpi(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_imm(ctx, |rd, imm| Op::Cpi { rd, imm }) }
pub fn ldi(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_imm(ctx, |rd, imm| Op::Ldi { rd, imm }) }
pub fn adiw(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { word_imm(ctx, |rd, imm| Op::Adiw { rd, imm }) }
pub fn sbiw(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { word_imm(ctx, |rd, imm| Op::Sbiw { rd, imm }) }

// ─── Single register ────────────────────────────────────────────────────────

pub fn com(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { single(ctx, |rd| Op::Com { rd }) }
pub fn neg(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { single(ctx, |rd| Op::Neg { rd }) }
pub fn swap(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { single(ctx, |rd| Op::Swap { rd }) }
pub fn inc(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { single(ctx, |rd| Op::Inc { rd }) }
pub fn dec(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { single(ctx, |rd| Op::Dec { rd }) }
pub fn asr(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { single(ctx, |rd| Op::Asr { rd }) }
pub fn lsr(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { single(ctx, |rd| Op::Lsr { rd }) }
pub fn ror(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { single(ctx, |rd| Op::Ror { rd }) }
pub fn push(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { single(ctx, |rr| Op::Push { rr }) }
pub fn pop(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { single(ctx, |rd| Op::Pop { rd }) }

// ─── Bits ───────────────────────────────────────────────────────────────────

pub fn bst(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_bit(ctx, |rr, bit| Op::Bst { rr, bit }) }
pub fn bld(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_bit(ctx, |rd, bit| Op::Bld { rd, bit }) }
pub fn sbrc(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_bit(ctx, |rr, bit| Op::Sbrc { rr, bit }) }
pub fn sbrs(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { reg_bit(ctx, |rr, bit| Op::Sbrs { rr, bit }) }
pub fn sbi(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { io_bit(ctx, |ior, bit| Op::Sbi { ior, bit }) }
pub fn cbi(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { io_bit(ctx, |ior, bit| Op::Cbi { ior, bit }) }
pub fn sbic(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { io_bit(ctx, |ior, bit| Op::Sbic { ior, bit }) }
pub fn sbis(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { io_bit(ctx, |ior, bit| Op::Sbis { ior, bit }) }

// ─── I/O ────────────────────────────────────────────────────────────────────

/// IN: `1011 0AAd dddd AAAA`
pub fn in_(ctx: &DecodeContext<'_>) -> Result<Op, Fault> {
    let w = ctx.word();
    Ok(Op::In { rd: lookup(&GPR, rd5(w))?, ior: ior6(w) })
}

/// OUT: `1011 1AAr rrrr AAAA`
pub fn out(ctx: &DecodeContext<'_>) -> Result<Op, Fault> {
    let w = ctx.word();
    Ok(Op::Out { ior: ior6(w), rr: lookup(&GPR, rd5(w))? })
}

// ─── Control flow ───────────────────────────────────────────────────────────

pub fn rjmp(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch12(ctx, |target| Op::Rjmp { target }) }
pub fn rcall(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch12(ctx, |target| Op::Rcall { target }) }

pub fn brcs(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brcs { target }) }
pub fn breq(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Breq { target }) }
pub fn brmi(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brmi { target }) }
pub fn brvs(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brvs { target }) }
pub fn brlt(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brlt { target }) }
pub fn brhs(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brhs { target }) }
pub fn brts(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brts { target }) }
pub fn brie(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brie { target }) }
pub fn brcc(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brcc { target }) }
pub fn brne(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brne { target }) }
pub fn brpl(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brpl { target }) }
pub fn brvc(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brvc { target }) }
pub fn brge(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brge { target }) }
pub fn brhc(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brhc { target }) }
pub fn brtc(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brtc { target }) }
pub fn brid(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { branch7(ctx, |target| Op::Brid { target }) }

/// JMP: `1001 010k kkkk 110k` + 16-bit word
pub fn jmp(ctx: &DecodeContext<'_>) -> Result<Op, Fault> {
    Ok(Op::Jmp { target: long_target(ctx)? })
}

/// CALL: `1001 010k kkkk 111k` + 16-bit word
pub fn call(ctx: &DecodeContext<'_>) -> Result<Op, Fault> {
    Ok(Op::Call { target: long_target(ctx)? })
}

pub fn ijmp(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Ijmp) }
pub fn icall(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Icall) }
pub fn eijmp(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Eijmp) }
pub fn eicall(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Eicall) }
pub fn ret(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Ret) }
pub fn reti(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Reti) }

// ─── Loads and stores ───────────────────────────────────────────────────────

/// LDS: `1001 000d dddd 0000` + 16-bit data address
pub fn lds(ctx: &DecodeContext<'_>) -> Result<Op, Fault> {
    let addr = ctx.second_word()?;
    Ok(Op::Lds { rd: lookup(&GPR, rd5(ctx.word()))?, addr })
}

/// STS: `1001 001r rrrr 0000` + 16-bit data address
pub fn sts(ctx: &DecodeContext<'_>) -> Result<Op, Fault> {
    let addr = ctx.second_word()?;
    Ok(Op::Sts { addr, rr: lookup(&GPR, rd5(ctx.word()))? })
}

pub fn ld_x(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { load_via(ctx, Register::X, |rd, ar| Op::Ld { rd, ar }) }
pub fn ld_y(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { load_via(ctx, Register::Y, |rd, ar| Op::Ld { rd, ar }) }
pub fn ld_z(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { load_via(ctx, Register::Z, |rd, ar| Op::Ld { rd, ar }) }
pub fn ldpi_x(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { load_via(ctx, Register::X, |rd, ar| Op::Ldpi { rd, ar }) }
pub fn ldpi_y(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { load_via(ctx, Register::Y, |rd, ar| Op::Ldpi { rd, ar }) }
pub fn ldpi_z(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { load_via(ctx, Register::Z, |rd, ar| Op::Ldpi { rd, ar }) }
pub fn ldpd_x(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { load_via(ctx, Register::X, |rd, ar| Op::Ldpd { rd, ar }) }
pub fn ldpd_y(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { load_via(ctx, Register::Y, |rd, ar| Op::Ldpd { rd, ar }) }
pub fn ldpd_z(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { load_via(ctx, Register::Z, |rd, ar| Op::Ldpd { rd, ar }) }

pub fn st_x(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { store_via(ctx, Register::X, |ar, rr| Op::St { ar, rr }) }
pub fn st_y(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { store_via(ctx, Register::Y, |ar, rr| Op::St { ar, rr }) }
pub fn st_z(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { store_via(ctx, Register::Z, |ar, rr| Op::St { ar, rr }) }
pub fn stpi_x(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { store_via(ctx, Register::X, |ar, rr| Op::Stpi { ar, rr }) }
pub fn stpi_y(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { store_via(ctx, Register::Y, |ar, rr| Op::Stpi { ar, rr }) }
pub fn stpi_z(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { store_via(ctx, Register::Z, |ar, rr| Op::Stpi { ar, rr }) }
pub fn stpd_x(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { store_via(ctx, Register::X, |ar, rr| Op::Stpd { ar, rr }) }
pub fn stpd_y(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { store_via(ctx, Register::Y, |ar, rr| Op::Stpd { ar, rr }) }
pub fn stpd_z(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { store_via(ctx, Register::Z, |ar, rr| Op::Stpd { ar, rr }) }

/// LDD: `10q0 qq0d dddd pqqq`, p selects Y (1) or Z (0)
pub fn ldd(ctx: &DecodeContext<'_>) -> Result<Op, Fault> {
    let w = ctx.word();
    let rd = lookup(&GPR, rd5(w))?;
    let ar = lookup(&YZ, get_bit(w, 3) as u16)?;
    Ok(Op::Ldd { rd, ar, imm: displacement(w) })
}

/// STD: `10q0 qq1r rrrr pqqq`
pub fn std(ctx: &DecodeContext<'_>) -> Result<Op, Fault> {
    let w = ctx.word();
    let ar = lookup(&YZ, get_bit(w, 3) as u16)?;
    let rr = lookup(&GPR, rd5(w))?;
    Ok(Op::Std { ar, imm: displacement(w), rr })
}

// ─── Program memory ─────────────────────────────────────────────────────────

pub fn lpm(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Lpm) }
pub fn elpm(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Elpm) }
pub fn spm(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Spm) }
pub fn lpmd(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { program_load(ctx, |rd, z| Op::Lpmd { rd, z }) }
pub fn lpmpi(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { program_load(ctx, |rd, z| Op::Lpmpi { rd, z }) }
pub fn elpmd(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { program_load(ctx, |rd, z| Op::Elpmd { rd, z }) }
pub fn elpmpi(ctx: &DecodeContext<'_>) -> Result<Op, Fault> { program_load(ctx, |rd, z| Op::Elpmpi { rd, z }) }

// ─── Status register and MCU control ────────────────────────────────────────

pub fn sec(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Sec) }
pub fn clc(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Clc) }
pub fn sez(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Sez) }
pub fn clz(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Clz) }
pub fn sen(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Sen) }
pub fn cln(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Cln) }
pub fn sev(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Sev) }
pub fn clv(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Clv) }
pub fn ses(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Ses) }
pub fn cls(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Cls) }
pub fn seh(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Seh) }
pub fn clh(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Clh) }
pub fn set(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Set) }
pub fn clt(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Clt) }
pub fn sei(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Sei) }
pub fn cli(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Cli) }

pub fn nop(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Nop) }
pub fn sleep(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Sleep) }
pub fn break_(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Break) }
pub fn wdr(_: &DecodeContext<'_>) -> Result<Op, Fault> { Ok(Op::Wdr) }
