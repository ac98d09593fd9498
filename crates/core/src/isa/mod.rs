//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the MIPS32 instruction formats, field extraction, register names,
//! the opcode/function mnemonic table, and the disassembler built on them.
//!
//! # Layers
//!
//! * `format`: classification of a word into one of four format descriptors.
//! * `instruction` / `decode`: bit-field extraction.
//! * `registers` / `table`: the naming vocabulary.
//! * `disasm`: human-readable rendering.

/// Instruction decoding into format and field values.
pub mod decode;

/// Instruction disassembler for listings and diagnostics.
pub mod disasm;

/// Format descriptors and the format classifier.
pub mod format;

/// Fixed-position field extraction.
pub mod instruction;

/// Opcode and function-code constants.
pub mod opcodes;

/// Integer register names and rendering.
pub mod registers;

/// Opcode/function-code mnemonic table.
pub mod table;

/// Textual instruction word parsing.
pub mod word;

pub use format::{FormatDescriptor, FormatKind, classify, classify_bits};
