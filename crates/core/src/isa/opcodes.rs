//! Opcode and function-code constants used by format classification.

/// SPECIAL opcode: every R-format instruction, selected further by function code.
pub const OP_SPECIAL: u32 = 0b000000;

/// Jump.
pub const OP_J: u32 = 0b000010;

/// Jump and link.
pub const OP_JAL: u32 = 0b000011;

/// Add immediate, the canonical I-format example.
pub const OP_ADDI: u32 = 0b001000;

/// Shift left logical.
pub const FUNCT_SLL: u32 = 0b000000;
/// Shift right logical.
pub const FUNCT_SRL: u32 = 0b000010;
/// Shift right arithmetic.
pub const FUNCT_SRA: u32 = 0b000011;
/// Shift left logical variable.
pub const FUNCT_SLLV: u32 = 0b000100;
/// Shift right logical variable.
pub const FUNCT_SRLV: u32 = 0b000110;
/// Shift right arithmetic variable.
pub const FUNCT_SRAV: u32 = 0b000111;

/// Add (with overflow).
pub const FUNCT_ADD: u32 = 0b100000;

/// Function codes that select the shift operand layout under `OP_SPECIAL`.
pub const SHIFT_FUNCTS: [u32; 6] = [
    FUNCT_SLL, FUNCT_SLLV, FUNCT_SRA, FUNCT_SRAV, FUNCT_SRL, FUNCT_SRLV,
];

/// Returns `true` if `opcode` is one of the two J-format opcodes.
#[inline]
pub const fn is_jump(opcode: u32) -> bool {
    matches!(opcode, OP_J | OP_JAL)
}

/// Returns `true` if `funct` belongs to the shift operation set.
#[inline]
pub const fn is_shift(funct: u32) -> bool {
    matches!(
        funct,
        FUNCT_SLL | FUNCT_SLLV | FUNCT_SRA | FUNCT_SRAV | FUNCT_SRL | FUNCT_SRLV
    )
}
