//! MIPS machine-code format classification library.
//!
//! This crate decides which instruction format a 32-bit MIPS word uses and
//! what that format implies:
//! 1. **Classification:** R, I, J, or the shift variant of R, from the opcode and function code.
//! 2. **Layout:** Field names and widths of each format, and the operand order for listings.
//! 3. **Vocabulary:** Register names and an opcode/function mnemonic table.
//! 4. **Disassembly:** Rendering of whole words built on the three above.
//!
//! All tables are immutable statics, so every function here is safe to call
//! from any thread without synchronization.

/// Shared types (errors).
pub mod common;
/// Rendering and table configuration loaded from JSON.
pub mod config;
/// Instruction set (formats, decode, registers, mnemonic table, disassembler).
pub mod isa;

/// Crate error type.
pub use crate::common::{Error, Result};
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Format classifier entry points.
pub use crate::isa::format::{FormatDescriptor, FormatKind, classify, classify_bits};
