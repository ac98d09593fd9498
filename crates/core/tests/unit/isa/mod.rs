//! # ISA Unit Tests
//!
//! This module contains unit tests for the instruction set definitions.
//! It covers format classification, decoding, registers, mnemonic lookup,
//! word parsing, and disassembly.

/// Format descriptor invariants.
///
/// Verifies field widths, operand orders, and the fixed descriptor table.
pub mod descriptor_invariants;





/// Mnemonic table lookup and JSON loading tests.
pub mod table;
