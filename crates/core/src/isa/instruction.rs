//! Instruction field extraction utilities.
//!
//! Provides fixed-position bit extraction for the MIPS32 instruction layouts:
//!
//! ```text
//! R-type: [op:6][rs:5][rt:5][rd:5][shamt:5][func:6]
//! I-type: [op:6][rs:5][rt:5][immediate:16]
//! J-type: [op:6][target:26]
//! ```
//!
//! Bit positions below count from the least-significant bit, so the opcode
//! occupies bits 26-31.

/// Total width of a MIPS32 instruction in bits.
pub const INSTRUCTION_WIDTH: u32 = 32;

/// Bit mask for the opcode field (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit mask for a register field (5 bits).
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the shift-amount field (5 bits).
pub const SHAMT_MASK: u32 = 0x1F;
/// Bit mask for the function-code field (6 bits).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the immediate field (16 bits).
pub const IMMEDIATE_MASK: u32 = 0xFFFF;
/// Bit mask for the jump-target field (26 bits).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every accessor extracts its field unconditionally; whether the field is
/// meaningful for a given word depends on the word's format.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    ///
    /// The opcode is the primary format discriminator.
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 21-25).
    fn rs(&self) -> u32;

    /// Extracts the second source / target register field (bits 16-20).
    fn rt(&self) -> u32;

    /// Extracts the destination register field (bits 11-15).
    fn rd(&self) -> u32;

    /// Extracts the shift-amount field (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the function-code field (bits 0-5).
    ///
    /// Only consulted when the opcode is zero, where it selects the operation.
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate field (bits 0-15), without sign extension.
    fn immediate(&self) -> u32;

    /// Extracts the 26-bit jump-target field (bits 0-25).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> 26) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> u32 {
        (self >> 21) & REG_MASK
    }

    #[inline(always)]
    fn rt(&self) -> u32 {
        (self >> 16) & REG_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u32 {
        (self >> 11) & REG_MASK
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & SHAMT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn immediate(&self) -> u32 {
        self & IMMEDIATE_MASK
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}
