//! # Configuration Tests
//!
//! Tests for configuration defaults, deserialization, and table selection.

use std::io::Write;

use mdma_core::Error;
use mdma_core::config::*;
use mdma_core::isa::table::{MnemonicLookup, MnemonicTable};
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace);
    assert_eq!(config.disasm.immediate_radix, Radix::Decimal);
    assert_eq!(config.disasm.target_radix, Radix::Hex);
    assert_eq!(config.table.path, None);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.disasm, DisasmConfig::default());
    assert!(!config.general.trace);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_json_str(r#"{ "disasm": { "immediate_radix": "hex" } }"#).unwrap();
    assert_eq!(config.disasm.immediate_radix, Radix::Hex);
    assert_eq!(config.disasm.target_radix, Radix::Hex);
}

#[test]
fn test_full_config() {
    let json = r#"{
        "general": { "trace": true },
        "disasm": { "immediate_radix": "hex", "target_radix": "decimal" },
        "table": { "path": "tables/mips.json" }
    }"#;
    let config = Config::from_json_str(json).unwrap();
    assert!(config.general.trace);
    assert_eq!(config.disasm.target_radix, Radix::Decimal);
    assert_eq!(config.table.path.as_deref(), Some(std::path::Path::new("tables/mips.json")));
}

#[test]
fn test_unknown_keys_rejected() {
    assert!(matches!(
        Config::from_json_str(r#"{ "disasm": { "radix": "hex" } }"#).unwrap_err(),
        Error::Json(_)
    ));
    assert!(matches!(
        Config::from_json_str(r#"{ "disasm": { "immediate_radix": "octal" } }"#).unwrap_err(),
        Error::Json(_)
    ));
}

#[test]
fn test_default_table_is_builtin() {
    let table = Config::default().mnemonic_table().unwrap();
    assert_eq!(table, MnemonicTable::default());
}

#[test]
fn test_table_path_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "functions": { "100000": "plus" } }"#).unwrap();

    let json = format!(r#"{{ "table": {{ "path": {:?} }} }}"#, file.path());
    let config = Config::from_json_str(&json).unwrap();
    let table = config.mnemonic_table().unwrap();
    assert_eq!(table.mnemonic_for(0x012A_4020).unwrap(), "plus");
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "general": { "trace": true } }"#).unwrap();
    assert!(Config::from_path(file.path()).unwrap().general.trace);
    assert!(matches!(
        Config::from_path("/nonexistent/mdma.json").unwrap_err(),
        Error::Io { .. }
    ));
}
