//! Instruction Disassembler for MIPS32.
//!
//! Converts a 32-bit instruction encoding into a human-readable line such as
//! `add $t0, $t1, $t2`. The format descriptor chosen by
//! [`classify`](crate::isa::format::classify) fixes which fields are printed and
//! in what order; the mnemonic comes from a [`MnemonicLookup`].
//!
//! # Operand rendering
//!
//! - `op` / `func`: the mnemonic, always printed first.
//! - `rs`, `rt`, `rd`: register names with the `$` sigil.
//! - `shamt`: unsigned decimal.
//! - `immediate`: sign-extended decimal, or raw hex (see [`DisasmConfig`]).
//! - `target`: hex, or decimal (see [`DisasmConfig`]).
//!
//! # Usage
//!
//! ```ignore
//! use mdma_core::isa::disasm::disassemble;
//! let text = disassemble(0x012A_4020)?;
//! assert_eq!(text, "add $t0, $t1, $t2");
//! ```

use std::sync::LazyLock;

use crate::common::Result;
use crate::config::{DisasmConfig, Radix};
use crate::isa::decode::decode;
use crate::isa::format::FieldName;
use crate::isa::registers;
use crate::isa::table::{MnemonicLookup, MnemonicTable};

static BUILTIN_TABLE: LazyLock<MnemonicTable> = LazyLock::new(MnemonicTable::default);

/// Renders instruction words using a mnemonic table and rendering settings.
#[derive(Debug)]
pub struct Disassembler<'a, T: MnemonicLookup + ?Sized> {
    table: &'a T,
    config: DisasmConfig,
}

impl<'a, T: MnemonicLookup + ?Sized> Disassembler<'a, T> {
    /// Creates a disassembler over `table`.
    pub const fn new(table: &'a T, config: DisasmConfig) -> Self {
        Self { table, config }
    }

    /// Disassembles one instruction word.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownMnemonic`](crate::common::Error::UnknownMnemonic) if the
    ///   table does not know the opcode or function code.
    /// * [`Error::UnknownRegisterCode`](crate::common::Error::UnknownRegisterCode)
    ///   if a register operand is one of the reserved codes.
    pub fn disassemble(&self, word: u32) -> Result<String> {
        let decoded = decode(word);
        let mut mnemonic = "";
        let mut operands = Vec::with_capacity(decoded.format.operand_order().len());

        for &name in decoded.format.operand_order() {
            let Some(value) = decoded.field(name) else {
                continue;
            };
            match name {
                FieldName::Op | FieldName::Func => mnemonic = self.table.mnemonic_for(word)?,
                FieldName::Rs | FieldName::Rt | FieldName::Rd => {
                    operands.push(registers::render(value)?);
                }
                FieldName::Shamt => operands.push(value.to_string()),
                FieldName::Immediate => operands.push(self.immediate(value)),
                FieldName::Target => operands.push(self.target(value)),
            }
        }

        let text = if operands.is_empty() {
            mnemonic.to_owned()
        } else {
            format!("{mnemonic} {}", operands.join(", "))
        };
        tracing::trace!(
            word = %format_args!("{word:#010x}"),
            format = %decoded.format,
            %text,
            "disassembled"
        );
        Ok(text)
    }

    fn immediate(&self, value: u32) -> String {
        match self.config.immediate_radix {
            Radix::Decimal => (value as u16 as i16).to_string(),
            Radix::Hex => format!("{value:#06x}"),
        }
    }

    fn target(&self, value: u32) -> String {
        match self.config.target_radix {
            Radix::Decimal => value.to_string(),
            Radix::Hex => format!("{value:#x}"),
        }
    }
}

/// Disassembles `inst` with the built-in table and default settings.
///
/// # Errors
///
/// As [`Disassembler::disassemble`].
pub fn disassemble(inst: u32) -> Result<String> {
    Disassembler::new(&*BUILTIN_TABLE, DisasmConfig::default()).disassemble(inst)
}
