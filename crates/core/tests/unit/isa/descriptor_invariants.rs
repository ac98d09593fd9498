//! Format descriptor invariants.
//!
//! The four descriptors are fixed data; these tests pin their exact contents and
//! the structural rules every descriptor must follow.

use mdma_core::FormatKind;
use mdma_core::isa::format::{
    DESCRIPTORS, FieldName, FormatDescriptor, I_FORMAT, J_FORMAT, R_FORMAT, SHIFT_FORMAT,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use FieldName::*;

fn layout(desc: &FormatDescriptor) -> Vec<(FieldName, u32)> {
    desc.fields().iter().map(|f| (f.name, f.width)).collect()
}

#[test]
fn exactly_four_distinct_descriptors() {
    assert_eq!(DESCRIPTORS.len(), 4);
    for (i, a) in DESCRIPTORS.iter().enumerate() {
        for b in &DESCRIPTORS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn widths_sum_to_32() {
    for desc in DESCRIPTORS {
        let sum: u32 = desc.fields().iter().map(|f| f.width).sum();
        assert_eq!(sum, 32, "{desc}");
        assert_eq!(desc.width(), 32, "{desc}");
    }
}

#[test]
fn operand_order_names_only_present_fields() {
    for desc in DESCRIPTORS {
        for &name in desc.operand_order() {
            assert!(desc.has_field(name), "{desc} orders missing field {name}");
        }
    }
}

#[test]
fn op_only_rendered_for_i_and_j() {
    for desc in DESCRIPTORS {
        let renders_op = desc.operand_order().contains(&Op);
        assert_eq!(renders_op, desc.kind() != FormatKind::R, "{desc}");
    }
}

#[test]
fn r_descriptor_contents() {
    assert_eq!(R_FORMAT.kind(), FormatKind::R);
    assert_eq!(
        layout(&R_FORMAT),
        vec![(Op, 6), (Rs, 5), (Rt, 5), (Rd, 5), (Shamt, 5), (Func, 6)]
    );
    assert_eq!(R_FORMAT.operand_order(), &[Func, Rd, Rs, Rt]);
}

#[test]
fn shift_descriptor_contents() {
    assert_eq!(SHIFT_FORMAT.kind(), FormatKind::R);
    assert_eq!(layout(&SHIFT_FORMAT), layout(&R_FORMAT));
    assert_eq!(SHIFT_FORMAT.operand_order(), &[Func, Rs, Rt, Shamt]);
}

#[test]
fn i_descriptor_contents() {
    assert_eq!(I_FORMAT.kind(), FormatKind::I);
    assert_eq!(layout(&I_FORMAT), vec![(Op, 6), (Rs, 5), (Rt, 5), (Immediate, 16)]);
    assert_eq!(I_FORMAT.operand_order(), &[Op, Rt, Rs, Immediate]);
}

#[test]
fn j_descriptor_contents() {
    assert_eq!(J_FORMAT.kind(), FormatKind::J);
    assert_eq!(layout(&J_FORMAT), vec![(Op, 6), (Target, 26)]);
    assert_eq!(J_FORMAT.operand_order(), &[Op, Target]);
}

#[rstest]
#[case(&R_FORMAT, Op, Some(0..6))]
#[case(&R_FORMAT, Func, Some(26..32))]
#[case(&R_FORMAT, Shamt, Some(21..26))]
#[case(&I_FORMAT, Immediate, Some(16..32))]
#[case(&I_FORMAT, Rd, None)]
#[case(&J_FORMAT, Target, Some(6..32))]
#[case(&J_FORMAT, Rs, None)]
fn field_ranges(
    #[case] desc: &FormatDescriptor,
    #[case] name: FieldName,
    #[case] expected: Option<std::ops::Range<u32>>,
) {
    assert_eq!(desc.field_range(name), expected);
}

#[test]
fn display_names() {
    let names: Vec<String> = DESCRIPTORS.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["R", "shift", "I", "J"]);
}
