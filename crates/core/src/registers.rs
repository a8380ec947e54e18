//! AVR register identities and the per-operand register tables.
//!
//! Each table projects the register file onto the index space of one
//! operand slot. A `None` slot is a reserved encoding; [`lookup`] rejects it
//! instead of substituting some default register.

use serde::{Deserialize, Serialize};

use crate::error::Fault;

/// A register operand: one of R0–R31 or a pointer pair.
///
/// `X`, `Y` and `Z` name the fixed pairs R27:R26, R29:R28 and R31:R30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Register {
    R0, R1, R2, R3, R4, R5, R6, R7,
    R8, R9, R10, R11, R12, R13, R14, R15,
    R16, R17, R18, R19, R20, R21, R22, R23,
    R24, R25, R26, R27, R28, R29, R30, R31,
    X,
    Y,
    Z,
}

impl Register {
    /// General-purpose registers in register-file order.
    pub const GENERAL: [Register; 32] = [
        Register::R0, Register::R1, Register::R2, Register::R3,
        Register::R4, Register::R5, Register::R6, Register::R7,
        Register::R8, Register::R9, Register::R10, Register::R11,
        Register::R12, Register::R13, Register::R14, Register::R15,
        Register::R16, Register::R17, Register::R18, Register::R19,
        Register::R20, Register::R21, Register::R22, Register::R23,
        Register::R24, Register::R25, Register::R26, Register::R27,
        Register::R28, Register::R29, Register::R30, Register::R31,
    ];

    /// Register-file number for R0–R31, `None` for the pointer pairs.
    pub fn number(self) -> Option<u8> {
        Self::GENERAL.iter().position(|&r| r == self).map(|n| n as u8)
    }

    /// The low register of the pair a pointer names (R26, R28, R30).
    pub fn pair_base(self) -> Option<u8> {
        match self {
            Register::X => Some(26),
            Register::Y => Some(28),
            Register::Z => Some(30),
            _ => None,
        }
    }

    pub fn is_pointer(self) -> bool {
        matches!(self, Register::X | Register::Y | Register::Z)
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number() {
            Some(n) => write!(f, "R{}", n),
            None => write!(f, "{:?}", self),
        }
    }
}

/// A fixed index → register projection for one operand slot.
#[derive(Debug)]
pub struct RegisterTable {
    pub name: &'static str,
    pub slots: &'static [Option<Register>],
}

impl RegisterTable {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Table index of `reg`, if the table can express it.
    pub fn index_of(&self, reg: Register) -> Option<u16> {
        self.slots.iter().position(|&s| s == Some(reg)).map(|i| i as u16)
    }
}

/// Resolve `index` through `table`.
///
/// Out-of-bounds indices and reserved slots fail the same way.
pub fn lookup(table: &RegisterTable, index: u16) -> Result<Register, Fault> {
    table
        .slots
        .get(index as usize)
        .copied()
        .flatten()
        .ok_or(Fault::RegisterGap { table: table.name, index })
}

use Register::*;

/// R0–R31.
pub static GPR: RegisterTable = RegisterTable {
    name: "GPR",
    slots: &[
        Some(R0), Some(R1), Some(R2), Some(R3), Some(R4), Some(R5), Some(R6), Some(R7),
        Some(R8), Some(R9), Some(R10), Some(R11), Some(R12), Some(R13), Some(R14), Some(R15),
        Some(R16), Some(R17), Some(R18), Some(R19), Some(R20), Some(R21), Some(R22), Some(R23),
        Some(R24), Some(R25), Some(R26), Some(R27), Some(R28), Some(R29), Some(R30), Some(R31),
    ],
};

/// R16–R31, for the 4-bit register field of immediate instructions.
pub static HGPR: RegisterTable = RegisterTable {
    name: "HGPR",
    slots: &[
        Some(R16), Some(R17), Some(R18), Some(R19), Some(R20), Some(R21), Some(R22), Some(R23),
        Some(R24), Some(R25), Some(R26), Some(R27), Some(R28), Some(R29), Some(R30), Some(R31),
    ],
};

/// R16–R23, for the 3-bit fields of the signed/fractional multiplies.
pub static MGPR: RegisterTable = RegisterTable {
    name: "MGPR",
    slots: &[
        Some(R16), Some(R17), Some(R18), Some(R19), Some(R20), Some(R21), Some(R22), Some(R23),
    ],
};

/// Even registers, for MOVW register pairs.
pub static EGPR: RegisterTable = RegisterTable {
    name: "EGPR",
    slots: &[
        Some(R0), Some(R2), Some(R4), Some(R6), Some(R8), Some(R10), Some(R12), Some(R14),
        Some(R16), Some(R18), Some(R20), Some(R22), Some(R24), Some(R26), Some(R28), Some(R30),
    ],
};

/// Upper register pairs accepted by ADIW/SBIW.
pub static RDL: RegisterTable = RegisterTable {
    name: "RDL",
    slots: &[Some(R24), Some(R26), Some(R28), Some(R30)],
};

/// Displacement base for LDD/STD, selected by bit 3 (0 = Z).
pub static YZ: RegisterTable = RegisterTable {
    name: "YZ",
    slots: &[Some(Z), Some(Y)],
};

/// Program-memory pointer.
pub static Z_ONLY: RegisterTable = RegisterTable {
    name: "Z",
    slots: &[Some(Z)],
};

/// The three pointer pairs; slot 3 is reserved.
pub static XYZ: RegisterTable = RegisterTable {
    name: "XYZ",
    slots: &[Some(X), Some(Y), Some(Z), None],
};
