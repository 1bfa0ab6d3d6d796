use goc::{indirections, DecodeErrorKind, EncodeErrorKind, Kind, Wire as _};
use gorpc_testsuite::{Looper, Record};

#[test]
fn box_shapes_record_the_whole_chain() {
    let shape = <Box<Box<Record>> as goc::Wire>::SHAPE;

    let (levels, base) = indirections(shape).unwrap();
    assert_eq!(levels, 2);
    assert_eq!(base.kind, Kind::Struct);
    assert_eq!(base.name, "Record");
}

#[test]
fn pointer_cycles_are_rejected_on_encode() {
    let err = goc::encode(&Looper).unwrap_err();
    assert!(matches!(
        err.kind(),
        EncodeErrorKind::RecursivePointer { type_name: "Looper" }
    ));
}

#[test]
fn pointer_cycles_are_rejected_on_decode() {
    let err = goc::decode::<Looper>(&[]).unwrap_err();
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::RecursivePointer { type_name: "Looper" }
    ));
}

#[test]
fn fixed_widths_match_the_wire_format() {
    assert_eq!(Kind::Bool.fixed_width(), Some(1));
    assert_eq!(Kind::U16.fixed_width(), Some(2));
    assert_eq!(Kind::F32.fixed_width(), Some(4));
    assert_eq!(Kind::Complex64.fixed_width(), Some(8));
    assert_eq!(Kind::Complex128.fixed_width(), Some(16));
    assert_eq!(Kind::Str.fixed_width(), None);
    assert_eq!(Kind::Uint.fixed_width(), None);
}

#[test]
fn derived_shapes_describe_the_type() {
    assert_eq!(Record::SHAPE.name, "Record");
    assert_eq!(Record::SHAPE.kind, Kind::Struct);
    assert_eq!(Record::SHAPE.mem_size, core::mem::size_of::<Record>());

    assert_eq!(<Vec<u32>>::SHAPE.kind, Kind::Slice);
    assert_eq!(<Vec<u32>>::SHAPE.element.unwrap().kind, Kind::U32);
}
