//! # Unit Components
//!
//! Organizes the unit tests by library module: shared error types,
//! configuration loading, and the instruction set definitions.


/// Configuration loading and default tests.
pub mod config;

/// Instruction set tests.
///
/// This module covers classification, decoding, registers, the mnemonic table,
/// word parsing, and disassembly.
pub mod isa;
