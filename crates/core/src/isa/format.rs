//! Instruction format classification.
//!
//! Every MIPS32 word follows one of three bit layouts (R, I, J). Shift
//! operations share the R layout bit for bit but are written with a different
//! operand order, so they get a descriptor of their own. The four descriptors
//! are immutable statics and [`classify`] only ever hands out references to them.
//!
//! # Classification
//!
//! 1. Opcode `000000` selects the R family; the function code then picks
//!    between [`SHIFT_FORMAT`] and [`R_FORMAT`].
//! 2. Opcodes `000010` and `000011` are jumps ([`J_FORMAT`]).
//! 3. Every other opcode is I-format ([`I_FORMAT`]).

use std::fmt;
use std::ops::Range;

use crate::common::Result;
use crate::isa::instruction::{INSTRUCTION_WIDTH, InstructionBits};
use crate::isa::opcodes::{OP_SPECIAL, is_jump, is_shift};
use crate::isa::word;

/// The three fundamental MIPS bit layouts.
///
/// Shift instructions are tagged [`FormatKind::R`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Register format.
    R,
    /// Immediate format.
    I,
    /// Jump format.
    J,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::R => "R",
            Self::I => "I",
            Self::J => "J",
        };
        f.write_str(s)
    }
}

/// Names of the bit fields an instruction word can be split into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Primary opcode.
    Op,
    /// First source register.
    Rs,
    /// Second source or target register.
    Rt,
    /// Destination register.
    Rd,
    /// Shift amount.
    Shamt,
    /// Function code.
    Func,
    /// 16-bit immediate.
    Immediate,
    /// 26-bit jump target.
    Target,
}

impl FieldName {
    /// Returns the lowercase field name used in listings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Op => "op",
            Self::Rs => "rs",
            Self::Rt => "rt",
            Self::Rd => "rd",
            Self::Shamt => "shamt",
            Self::Func => "func",
            Self::Immediate => "immediate",
            Self::Target => "target",
        }
    }

    /// Returns `true` for fields that hold a register code.
    pub const fn is_register(self) -> bool {
        matches!(self, Self::Rs | Self::Rt | Self::Rd)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named slice of an instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: FieldName,
    /// Width in bits.
    pub width: u32,
}

impl Field {
    const fn new(name: FieldName, width: u32) -> Self {
        Self { name, width }
    }
}

/// Layout and rendering order of one instruction format.
///
/// Only the four statics in this module exist; fields are read through the
/// accessors.
#[derive(Debug, PartialEq, Eq)]
pub struct FormatDescriptor {
    name: &'static str,
    kind: FormatKind,
    fields: &'static [Field],
    operand_order: &'static [FieldName],
}

impl FormatDescriptor {
    /// Short display name (`"R"`, `"shift"`, `"I"`, `"J"`).
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Fundamental format this descriptor belongs to.
    #[inline(always)]
    pub const fn kind(&self) -> FormatKind {
        self.kind
    }

    /// Fields in most-significant-first order. Widths sum to 32.
    #[inline(always)]
    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Order in which fields appear in the human-readable form.
    #[inline(always)]
    pub const fn operand_order(&self) -> &'static [FieldName] {
        self.operand_order
    }

    /// Total width of all fields in bits.
    pub const fn width(&self) -> u32 {
        total_width(self.fields)
    }

    /// Returns `true` if this descriptor contains a field called `name`.
    pub fn has_field(&self, name: FieldName) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Returns the bit range of `name`, counted from the most-significant bit.
    ///
    /// `op` is always `0..6`; the function code of an R word is `26..32`.
    pub fn field_range(&self, name: FieldName) -> Option<Range<u32>> {
        let mut start: u32 = 0;
        for field in self.fields {
            let end = start.checked_add(field.width)?;
            if field.name == name {
                return Some(start..end);
            }
            start = end;
        }
        None
    }

    /// Extracts the value of `name` from `word` using this descriptor's layout.
    ///
    /// Returns `None` if the descriptor has no such field or the field ends
    /// past bit 32.
    pub fn extract(&self, word: u32, name: FieldName) -> Option<u32> {
        let range = self.field_range(name)?;
        let width = range.end - range.start;
        let shift = INSTRUCTION_WIDTH.checked_sub(range.end)?;
        let mask = if width == INSTRUCTION_WIDTH {
            u32::MAX
        } else {
            (1 << width) - 1
        };
        Some((word >> shift) & mask)
    }

    /// Returns `true` for the shift variant of the R format.
    pub fn is_shift(&self) -> bool {
        self == &SHIFT_FORMAT
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const R_FIELDS: [Field; 6] = [
    Field::new(FieldName::Op, 6),
    Field::new(FieldName::Rs, 5),
    Field::new(FieldName::Rt, 5),
    Field::new(FieldName::Rd, 5),
    Field::new(FieldName::Shamt, 5),
    Field::new(FieldName::Func, 6),
];

const I_FIELDS: [Field; 4] = [
    Field::new(FieldName::Op, 6),
    Field::new(FieldName::Rs, 5),
    Field::new(FieldName::Rt, 5),
    Field::new(FieldName::Immediate, 16),
];

const J_FIELDS: [Field; 2] = [
    Field::new(FieldName::Op, 6),
    Field::new(FieldName::Target, 26),
];

const R_ORDER: [FieldName; 4] = [FieldName::Func, FieldName::Rd, FieldName::Rs, FieldName::Rt];
const SHIFT_ORDER: [FieldName; 4] = [
    FieldName::Func,
    FieldName::Rs,
    FieldName::Rt,
    FieldName::Shamt,
];
const I_ORDER: [FieldName; 4] = [
    FieldName::Op,
    FieldName::Rt,
    FieldName::Rs,
    FieldName::Immediate,
];
const J_ORDER: [FieldName; 2] = [FieldName::Op, FieldName::Target];

const _: () = {
    assert!(total_width(&R_FIELDS) == INSTRUCTION_WIDTH);
    assert!(total_width(&I_FIELDS) == INSTRUCTION_WIDTH);
    assert!(total_width(&J_FIELDS) == INSTRUCTION_WIDTH);
    assert!(order_within(&R_ORDER, &R_FIELDS));
    assert!(order_within(&SHIFT_ORDER, &R_FIELDS));
    assert!(order_within(&I_ORDER, &I_FIELDS));
    assert!(order_within(&J_ORDER, &J_FIELDS));
};

/// Plain R-format arithmetic/logic layout.
pub static R_FORMAT: FormatDescriptor = FormatDescriptor {
    name: "R",
    kind: FormatKind::R,
    fields: &R_FIELDS,
    operand_order: &R_ORDER,
};

/// Shift operations: R layout, written with the shift amount last.
pub static SHIFT_FORMAT: FormatDescriptor = FormatDescriptor {
    name: "shift",
    kind: FormatKind::R,
    fields: &R_FIELDS,
    operand_order: &SHIFT_ORDER,
};

/// Immediate format.
pub static I_FORMAT: FormatDescriptor = FormatDescriptor {
    name: "I",
    kind: FormatKind::I,
    fields: &I_FIELDS,
    operand_order: &I_ORDER,
};

/// Jump format.
pub static J_FORMAT: FormatDescriptor = FormatDescriptor {
    name: "J",
    kind: FormatKind::J,
    fields: &J_FIELDS,
    operand_order: &J_ORDER,
};

/// All descriptors, in declaration order.
pub static DESCRIPTORS: [&FormatDescriptor; 4] = [&R_FORMAT, &SHIFT_FORMAT, &I_FORMAT, &J_FORMAT];

/// Classifies a 32-bit instruction word into its format descriptor.
///
/// Total over all words: anything that is neither R-family nor a jump is
/// treated as I-format.
///
/// # Arguments
///
/// * `word` - The raw instruction word, most-significant bit first.
pub fn classify(word: u32) -> &'static FormatDescriptor {
    match word.opcode() {
        OP_SPECIAL if is_shift(word.funct()) => &SHIFT_FORMAT,
        OP_SPECIAL => &R_FORMAT,
        op if is_jump(op) => &J_FORMAT,
        _ => &I_FORMAT,
    }
}

/// Classifies a 32-character binary string.
///
/// # Errors
///
/// Returns [`Error::InvalidEncodingLength`](crate::common::Error::InvalidEncodingLength)
/// unless `text` has exactly 32 characters, and
/// [`Error::InvalidBitCharacter`](crate::common::Error::InvalidBitCharacter)
/// if any of them is not `'0'` or `'1'`.
pub fn classify_bits(text: &str) -> Result<&'static FormatDescriptor> {
    word::parse_bits(text).map(classify)
}

const fn total_width(fields: &[Field]) -> u32 {
    let mut sum = 0;
    let mut i = 0;
    while i < fields.len() {
        sum += fields[i].width;
        i += 1;
    }
    sum
}

const fn order_within(order: &[FieldName], fields: &[Field]) -> bool {
    let mut i = 0;
    while i < order.len() {
        let mut found = false;
        let mut j = 0;
        while j < fields.len() {
            if order[i] as u8 == fields[j].name as u8 {
                found = true;
            }
            j += 1;
        }
        if !found {
            return false;
        }
        i += 1;
    }
    true
}
