//! Opcode and function-code mnemonic table.
//!
//! The classifier only needs the opcode and function bits to pick a format; the
//! names behind those bits live here. [`MnemonicTable::default`] covers the MIPS I
//! integer instructions, and a replacement can be loaded from JSON in the shape
//!
//! ```json
//! { "opcodes": { "001000": "addi" }, "functions": { "100000": "add" } }
//! ```
//!
//! where every key is a six-digit binary string.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Error, Result};
use crate::isa::instruction::{FUNCT_MASK, InstructionBits, OPCODE_MASK};
use crate::isa::opcodes::OP_SPECIAL;

/// Width of opcode and function-code keys in bits.
const KEY_BITS: usize = 6;

/// Built-in primary opcodes (everything except `SPECIAL`).
const BUILTIN_OPCODES: &[(u32, &str)] = &[
    (0b000010, "j"),
    (0b000011, "jal"),
    (0b000100, "beq"),
    (0b000101, "bne"),
    (0b000110, "blez"),
    (0b000111, "bgtz"),
    (0b001000, "addi"),
    (0b001001, "addiu"),
    (0b001010, "slti"),
    (0b001011, "sltiu"),
    (0b001100, "andi"),
    (0b001101, "ori"),
    (0b001110, "xori"),
    (0b001111, "lui"),
    (0b100000, "lb"),
    (0b100001, "lh"),
    (0b100011, "lw"),
    (0b100100, "lbu"),
    (0b100101, "lhu"),
    (0b101000, "sb"),
    (0b101001, "sh"),
    (0b101011, "sw"),
];

/// Built-in `SPECIAL` function codes.
const BUILTIN_FUNCTIONS: &[(u32, &str)] = &[
    (0b000000, "sll"),
    (0b000010, "srl"),
    (0b000011, "sra"),
    (0b000100, "sllv"),
    (0b000110, "srlv"),
    (0b000111, "srav"),
    (0b001000, "jr"),
    (0b001001, "jalr"),
    (0b001100, "syscall"),
    (0b001101, "break"),
    (0b010000, "mfhi"),
    (0b010001, "mthi"),
    (0b010010, "mflo"),
    (0b010011, "mtlo"),
    (0b011000, "mult"),
    (0b011001, "multu"),
    (0b011010, "div"),
    (0b011011, "divu"),
    (0b100000, "add"),
    (0b100001, "addu"),
    (0b100010, "sub"),
    (0b100011, "subu"),
    (0b100100, "and"),
    (0b100101, "or"),
    (0b100110, "xor"),
    (0b100111, "nor"),
    (0b101010, "slt"),
    (0b101011, "sltu"),
];

/// Resolves opcode/function-code pairs to mnemonics.
///
/// `funct` is `Some` only for opcode `000000`, where the function code names
/// the operation.
pub trait MnemonicLookup {
    /// Returns the mnemonic for `opcode` (and `funct`), if known.
    fn resolve_mnemonic(&self, opcode: u32, funct: Option<u32>) -> Option<&str>;

    /// Resolves the mnemonic of a whole instruction word.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMnemonic`] if the table has no entry.
    fn mnemonic_for(&self, word: u32) -> Result<&str> {
        let opcode = word.opcode();
        let funct = (opcode == OP_SPECIAL).then(|| word.funct());
        self.resolve_mnemonic(opcode, funct)
            .ok_or(Error::UnknownMnemonic { opcode, funct })
    }
}

/// Opcode and function-code names keyed by their six-bit values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MnemonicTable {
    opcodes: BTreeMap<u32, String>,
    functions: BTreeMap<u32, String>,
}

/// On-disk table shape.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    #[serde(default)]
    opcodes: BTreeMap<String, String>,
    #[serde(default)]
    functions: BTreeMap<String, String>,
}

impl MnemonicTable {
    /// Creates an empty table.
    pub const fn empty() -> Self {
        Self {
            opcodes: BTreeMap::new(),
            functions: BTreeMap::new(),
        }
    }

    /// Parses a table from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON and [`Error::InvalidTableKey`]
    /// for keys that are not six binary digits.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(json)?;
        let table = Self {
            opcodes: convert_keys(raw.opcodes)?,
            functions: convert_keys(raw.functions)?,
        };
        tracing::debug!(
            opcodes = table.opcodes.len(),
            functions = table.functions.len(),
            "loaded mnemonic table"
        );
        Ok(table)
    }

    /// Reads and parses a JSON table file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`MnemonicTable::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Adds or replaces a primary opcode entry.
    pub fn insert_opcode(&mut self, opcode: u32, mnemonic: impl Into<String>) {
        let _ = self.opcodes.insert(opcode & OPCODE_MASK, mnemonic.into());
    }

    /// Adds or replaces a `SPECIAL` function-code entry.
    pub fn insert_function(&mut self, funct: u32, mnemonic: impl Into<String>) {
        let _ = self.functions.insert(funct & FUNCT_MASK, mnemonic.into());
    }

    /// Iterates over primary opcode entries in ascending order.
    pub fn opcodes(&self) -> impl Iterator<Item = (u32, &str)> {
        self.opcodes.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Iterates over function-code entries in ascending order.
    pub fn functions(&self) -> impl Iterator<Item = (u32, &str)> {
        self.functions.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.opcodes.len() + self.functions.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.opcodes.is_empty() && self.functions.is_empty()
    }
}

impl Default for MnemonicTable {
    /// The built-in MIPS I integer table.
    fn default() -> Self {
        let mut table = Self::empty();
        for &(opcode, name) in BUILTIN_OPCODES {
            table.insert_opcode(opcode, name);
        }
        for &(funct, name) in BUILTIN_FUNCTIONS {
            table.insert_function(funct, name);
        }
        table
    }
}

impl MnemonicLookup for MnemonicTable {
    fn resolve_mnemonic(&self, opcode: u32, funct: Option<u32>) -> Option<&str> {
        match funct {
            Some(funct) => self.functions.get(&funct),
            None => self.opcodes.get(&opcode),
        }
        .map(String::as_str)
    }
}

fn convert_keys(raw: BTreeMap<String, String>) -> Result<BTreeMap<u32, String>> {
    raw.into_iter()
        .map(|(key, name)| parse_key(&key).map(|code| (code, name)))
        .collect()
}

fn parse_key(key: &str) -> Result<u32> {
    if key.len() != KEY_BITS || !key.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(Error::InvalidTableKey(key.to_owned()));
    }
    u32::from_str_radix(key, 2).map_err(|_| Error::InvalidTableKey(key.to_owned()))
}
