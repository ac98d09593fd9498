//! Error definitions.
//!
//! Every fallible operation in the crate reports one of the variants below. The
//! failures fall into three groups:
//! 1. **Word validation:** textual instruction words that do not describe exactly 32 bits.
//! 2. **Register vocabulary:** codes or names outside the named register set.
//! 3. **Tables and configuration:** missing mnemonics and malformed JSON inputs.
//!
//! None of these are transient, so callers should report them rather than retry.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while validating, classifying, or rendering instructions.
#[derive(Debug, Error)]
pub enum Error {
    /// Textual input does not contain exactly 32 bit characters.
    #[error("instruction word must be 32 bits, got {found}")]
    InvalidEncodingLength {
        /// Number of characters actually supplied.
        found: usize,
    },

    /// Textual input contains something other than `'0'` or `'1'`.
    #[error("invalid bit character {character:?} at position {position}")]
    InvalidBitCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index, counted from the most-significant bit.
        position: usize,
    },

    /// A hexadecimal word literal is empty, malformed, or wider than 32 bits.
    #[error("invalid hexadecimal instruction word {0:?}")]
    InvalidHexWord(String),

    /// The register code is out of range or reserved (26, 27).
    #[error("unknown register code {0}")]
    UnknownRegisterCode(u32),

    /// The register name is not part of the register vocabulary.
    #[error("unknown register name {0:?}")]
    UnknownRegisterName(String),

    /// The mnemonic table has no entry for this opcode/function pair.
    #[error("no mnemonic for opcode {opcode:06b}{}", .funct.map(|f| format!(" function {f:06b}")).unwrap_or_default())]
    UnknownMnemonic {
        /// Six-bit opcode.
        opcode: u32,
        /// Six-bit function code, present for opcode `000000`.
        funct: Option<u32>,
    },

    /// A mnemonic table key is not a six-character binary string.
    #[error("invalid table key {0:?}, expected six binary digits")]
    InvalidTableKey(String),

    /// Malformed JSON in a mnemonic table or configuration file.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A table or configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
