//! MIPS instruction decoder.
//!
//! Splits a 32-bit word into the fields named by its format descriptor. The
//! descriptor decides which fields exist; extraction itself goes through the
//! descriptor's bit ranges, so a decoded R word carries `shamt` and `func` while
//! a J word carries only `op` and `target`.

use std::fmt;

use crate::isa::format::{FieldName, FormatDescriptor, classify};

/// Decoded instruction: the raw word, its format, and every field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Format the word was classified as.
    pub format: &'static FormatDescriptor,
    /// Field values in most-significant-first order.
    pub fields: Vec<(FieldName, u32)>,
}

impl Decoded {
    /// Returns the value of field `name`, if the format has one.
    pub fn field(&self, name: FieldName) -> Option<u32> {
        self.fields
            .iter()
            .find_map(|&(field, value)| (field == name).then_some(value))
    }
}

impl fmt::Display for Decoded {
    /// Formats as `format: name=value ...`, each value in binary at its field width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.format)?;
        for (field, &(name, value)) in self.format.fields().iter().zip(&self.fields) {
            write!(f, " {name}={value:0width$b}", width = field.width as usize)?;
        }
        Ok(())
    }
}

/// Decodes `inst` into its format and field values.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
pub fn decode(inst: u32) -> Decoded {
    let format = classify(inst);
    let fields = format
        .fields()
        .iter()
        .filter_map(|field| {
            format
                .extract(inst, field.name)
                .map(|value| (field.name, value))
        })
        .collect();

    Decoded {
        raw: inst,
        format,
        fields,
    }
}
