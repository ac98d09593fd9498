//! # Mnemonic Table Tests
//!
//! Covers lookup through the `MnemonicLookup` trait, JSON loading, and parity
//! between the built-in table and the bundled data file.

use std::io::Write;

use mdma_core::Error;
use mdma_core::isa::table::{MnemonicLookup, MnemonicTable};
use pretty_assertions::assert_eq;

const BUNDLED: &str = include_str!("../../../data/func_and_opcodes.json");

#[test]
fn builtin_resolves_opcodes_and_functions() {
    let table = MnemonicTable::default();
    assert_eq!(table.resolve_mnemonic(0b001000, None), Some("addi"));
    assert_eq!(table.resolve_mnemonic(0b000010, None), Some("j"));
    assert_eq!(table.resolve_mnemonic(0, Some(0b100000)), Some("add"));
    assert_eq!(table.resolve_mnemonic(0, Some(0b000000)), Some("sll"));
}

#[test]
fn special_opcode_needs_function_code() {
    let table = MnemonicTable::default();
    assert_eq!(table.resolve_mnemonic(0, None), None);
}

#[test]
fn mnemonic_for_whole_words() {
    let table = MnemonicTable::default();
    assert_eq!(table.mnemonic_for(0x012A_4020).unwrap(), "add");
    assert_eq!(table.mnemonic_for(0x2108_0001).unwrap(), "addi");
    assert_eq!(table.mnemonic_for(0x0C00_0000).unwrap(), "jal");
}

#[test]
fn unknown_entries_report_bits() {
    let table = MnemonicTable::default();
    let err = table.mnemonic_for(0x0000_003F).unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownMnemonic {
            opcode: 0,
            funct: Some(0x3F)
        }
    ));
    assert_eq!(err.to_string(), "no mnemonic for opcode 000000 function 111111");

    let err = table.mnemonic_for(0xFC00_0000).unwrap_err();
    assert_eq!(err.to_string(), "no mnemonic for opcode 111111");
}

#[test]
fn bundled_file_matches_builtin() {
    let loaded = MnemonicTable::from_json_str(BUNDLED).unwrap();
    assert_eq!(loaded, MnemonicTable::default());
}

#[test]
fn sections_are_optional() {
    let table = MnemonicTable::from_json_str(r#"{ "functions": { "100000": "add" } }"#).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.resolve_mnemonic(0, Some(0x20)), Some("add"));
    assert!(MnemonicTable::from_json_str("{}").unwrap().is_empty());
}

#[test]
fn bad_key_is_rejected() {
    let err = MnemonicTable::from_json_str(r#"{ "opcodes": { "0010": "addi" } }"#).unwrap_err();
    assert!(matches!(err, Error::InvalidTableKey(ref k) if k == "0010"));
}

#[test]
fn malformed_json_is_rejected() {
    let err = MnemonicTable::from_json_str(r#"{ "opcodes": [] }"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    let err = MnemonicTable::from_json_str(r#"{ "registers": {} }"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "opcodes": { "001000": "addi" } }"#).unwrap();
    let table = MnemonicTable::from_path(file.path()).unwrap();
    assert_eq!(table.opcodes().collect::<Vec<_>>(), vec![(0b001000, "addi")]);
}

#[test]
fn missing_file_names_path() {
    let err = MnemonicTable::from_path("/nonexistent/table.json").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/table.json"));
}

#[test]
fn inserts_override_and_mask() {
    let mut table = MnemonicTable::empty();
    table.insert_opcode(0b001000, "addi");
    table.insert_opcode(0b001000 | 0x40, "addi.alias");
    assert_eq!(table.len(), 1);
    assert_eq!(table.resolve_mnemonic(0b001000, None), Some("addi.alias"));

    table.insert_function(0b100000 | 0xC0, "add");
    assert_eq!(table.resolve_mnemonic(0, Some(0b100000)), Some("add"));
    assert_eq!(table.opcodes().collect::<Vec<_>>(), vec![(0b001000, "addi.alias")]);
    assert_eq!(table.functions().collect::<Vec<_>>(), vec![(0b100000, "add")]);
}

/// A lookup that answers every query, to show the trait is the only seam the
/// disassembler needs.
struct Fixed;

impl MnemonicLookup for Fixed {
    fn resolve_mnemonic(&self, _opcode: u32, _funct: Option<u32>) -> Option<&str> {
        Some("op")
    }
}

#[test]
fn custom_lookup_implementations() {
    assert_eq!(Fixed.mnemonic_for(0xFFFF_FFFF).unwrap(), "op");
}
