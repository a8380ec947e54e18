//! Bit-field helpers shared by the decision tree and the leaf decoders.
//!
//! AVR encodings scatter operand bits across the instruction word (the
//! 6-bit LDD/STD displacement is split 1+2+3, I/O numbers are split 2+4),
//! so most leaves rebuild a field from several extracts OR-ed together.

/// Extract `(word >> shift) & mask`.
#[inline(always)]
pub fn extract_field(word: u16, shift: u8, mask: u16) -> u16 {
    (word >> shift) & mask
}

/// Sign-extend `value`, treating bit `high_bit` as the sign bit of a
/// `high_bit + 1`-wide two's-complement number.
///
/// Bits above `high_bit` are ignored.
#[inline(always)]
pub fn sign_extend(value: u32, high_bit: u8) -> i32 {
    let shift = 31 - high_bit as u32;
    ((value << shift) as i32) >> shift
}

/// Read bit `n` of `word`.
#[inline(always)]
pub fn get_bit(word: u16, n: u8) -> bool {
    (word >> n) & 1 != 0
}

/// Return `acc` with bit `n` forced to `value`.
#[inline(always)]
pub fn set_bit(acc: u16, n: u8, value: bool) -> u16 {
    if value { acc | (1 << n) } else { acc & !(1 << n) }
}
