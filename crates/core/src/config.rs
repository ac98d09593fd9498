//! Configuration for the disassembler and its front ends.
//!
//! This module defines the configuration structures used to parameterize
//! rendering and table selection. It provides:
//! 1. **Defaults:** Baseline number formats for immediates and jump targets.
//! 2. **Structures:** General, disassembly, and mnemonic-table sections.
//! 3. **Loading:** JSON parsing with every field optional.
//!
//! Use `Config::default()` when no configuration file is supplied.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::{Error, Result};
use crate::isa::table::MnemonicTable;

/// Default configuration constants.
mod defaults {
    use super::Radix;

    /// Immediates read naturally as signed decimal offsets and constants.
    pub const IMMEDIATE_RADIX: Radix = Radix::Decimal;

    /// Jump targets are word addresses, conventionally shown in hex.
    pub const TARGET_RADIX: Radix = Radix::Hex;
}

/// Number base used when rendering numeric operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    /// Base 10. Immediates are sign-extended first.
    Decimal,
    /// Base 16 with a `0x` prefix, raw field bits.
    Hex,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Disassembly rendering settings.
    #[serde(default)]
    pub disasm: DisasmConfig,

    /// Mnemonic table selection.
    #[serde(default)]
    pub table: TableConfig,
}

impl Config {
    /// Parses a configuration from JSON text. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON or unknown keys.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Loads the configured mnemonic table, or the built-in one if no path is set.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`MnemonicTable::from_path`].
    pub fn mnemonic_table(&self) -> Result<MnemonicTable> {
        match &self.table.path {
            Some(path) => MnemonicTable::from_path(path),
            None => Ok(MnemonicTable::default()),
        }
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit trace-level log events (one per disassembled word).
    #[serde(default)]
    pub trace: bool,
}

/// Disassembly rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisasmConfig {
    /// Base for the 16-bit immediate operand.
    #[serde(default = "DisasmConfig::default_immediate_radix")]
    pub immediate_radix: Radix,

    /// Base for the 26-bit jump target operand.
    #[serde(default = "DisasmConfig::default_target_radix")]
    pub target_radix: Radix,
}

impl DisasmConfig {
    fn default_immediate_radix() -> Radix {
        defaults::IMMEDIATE_RADIX
    }

    fn default_target_radix() -> Radix {
        defaults::TARGET_RADIX
    }
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            immediate_radix: defaults::IMMEDIATE_RADIX,
            target_radix: defaults::TARGET_RADIX,
        }
    }
}

/// Mnemonic table selection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// JSON table replacing the built-in one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
