//! Intel HEX file parser.
//!
//! Parses Intel HEX format strings (`:LLAAAATT[DD...]CC`) into a flat program
//! image. Supports record types 00 (data), 01 (EOF), 02 (extended segment
//! address) and 04 (extended linear address); start-address records 03 and
//! 05 are accepted and ignored. Bytes no record writes read as `0xFF`, the
//! erased-flash value.

use thiserror::Error;

/// Value of flash bytes no record wrote.
pub const ERASED: u8 = 0xFF;

/// Largest image the loader will build (16 MiB).
const MAX_IMAGE: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("line {line}: odd number of hex characters")]
    OddLength { line: usize },
    #[error("line {line}: invalid hex character {ch:?}")]
    BadChar { line: usize, ch: char },
    #[error("line {line}: record too short")]
    TooShort { line: usize },
    #[error("line {line}: byte count {count} does not match record length")]
    CountMismatch { line: usize, count: usize },
    #[error("line {line}: checksum error (sum=0x{sum:02X})")]
    Checksum { line: usize, sum: u8 },
    #[error("line {line}: unsupported record type 0x{kind:02X}")]
    UnknownRecord { line: usize, kind: u8 },
    #[error("line {line}: address 0x{address:X} exceeds the image limit")]
    TooLarge { line: usize, address: usize },
}

/// Parse Intel HEX text into a program image.
///
/// The image spans address 0 up to the highest byte written.
pub fn parse_hex(hex: &str) -> Result<Vec<u8>, HexError> {
    let mut image = Vec::new();
    let mut base_addr: usize = 0;

    for (index, line) in hex.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if !line.starts_with(':') {
            continue; // skip blank and non-record lines
        }

        let bytes = hex_line_to_bytes(&line[1..], line_no)?;
        if bytes.len() < 5 {
            return Err(HexError::TooShort { line: line_no });
        }

        let byte_count = bytes[0] as usize;
        if bytes.len() != byte_count + 5 {
            return Err(HexError::CountMismatch { line: line_no, count: byte_count });
        }
        let addr = ((bytes[1] as usize) << 8) | bytes[2] as usize;
        let record_type = bytes[3];
        let data = &bytes[4..4 + byte_count];

        let sum: u8 = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
        if sum != 0 {
            return Err(HexError::Checksum { line: line_no, sum });
        }

        match record_type {
            0x00 => {
                let start = base_addr + addr;
                let end = start + data.len();
                if end > MAX_IMAGE {
                    return Err(HexError::TooLarge { line: line_no, address: end - 1 });
                }
                if image.len() < end {
                    image.resize(end, ERASED);
                }
                image[start..end].copy_from_slice(data);
            }
            0x01 => break,
            0x02 if data.len() >= 2 => {
                base_addr = (((data[0] as usize) << 8) | data[1] as usize) << 4;
            }
            0x04 if data.len() >= 2 => {
                base_addr = (((data[0] as usize) << 8) | data[1] as usize) << 16;
            }
            0x02 | 0x04 => return Err(HexError::TooShort { line: line_no }),
            0x03 | 0x05 => {}
            kind => return Err(HexError::UnknownRecord { line: line_no, kind }),
        }
    }

    Ok(image)
}

/// Convert hex character pairs to bytes
fn hex_line_to_bytes(hex_str: &str, line: usize) -> Result<Vec<u8>, HexError> {
    let chars: Vec<char> = hex_str.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(HexError::OddLength { line });
    }

    chars
        .chunks(2)
        .map(|pair| -> Result<u8, HexError> {
            Ok((hex_char(pair[0], line)? << 4) | hex_char(pair[1], line)?)
        })
        .collect()
}

fn hex_char(c: char, line: usize) -> Result<u8, HexError> {
    c.to_digit(16).map(|d| d as u8).ok_or(HexError::BadChar { line, ch: c })
}
