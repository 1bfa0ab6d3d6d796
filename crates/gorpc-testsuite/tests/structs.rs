use expect_test::expect;
use goc::{Complex128, Complex64, DecodeErrorKind};
use gorpc_testsuite::{Inner, Kitchen, Nothing, Pair, Record, Tagged};

#[test]
fn struct_fields_concatenate_in_declared_order() {
    let value = Record {
        a: 5,
        b: "x".to_owned(),
    };

    let encoded = goc::encode(&value).unwrap();
    assert_eq!(
        encoded,
        [
            0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // a
            0x01, 0x00, 0x00, 0x00, 0x78, // b
        ]
    );
    assert_eq!(goc::decode::<Record>(&encoded).unwrap(), value);
}

#[test]
fn every_supported_kind_roundtrips_through_one_aggregate() {
    let value = Kitchen {
        flag: true,
        i8: -1,
        i16: -513,
        i32: 70_000,
        i64: i64::MIN,
        u8: 0xA5,
        u16: 0xBEEF,
        u32: u32::MAX,
        u64: u64::MAX - 1,
        f32: -1.5,
        f64: core::f64::consts::PI,
        c64: Complex64::new(0.5, -0.5),
        c128: Complex128::new(-9.75, 4.0),
        word: 123_456,
        iword: -654_321,
        text: "grüße".to_owned(),
        inner: Inner {
            a: 77,
            b: "nested".to_owned(),
        },
    };

    let encoded = goc::encode(&value).unwrap();
    assert_eq!(encoded.len(), goc::size(&value));
    assert_eq!(goc::decode::<Kitchen>(&encoded).unwrap(), value);
}

#[test]
fn tuple_struct_fields_encode_in_order() {
    let value = Pair(0x0102, 0x0304);
    let encoded = goc::encode(&value).unwrap();
    assert_eq!(encoded, [0x02, 0x01, 0x04, 0x03]);
    assert_eq!(goc::decode::<Pair>(&encoded).unwrap(), value);
}

#[test]
fn unit_struct_encodes_to_nothing() {
    let encoded = goc::encode(&Nothing).unwrap();
    assert!(encoded.is_empty());
    assert_eq!(goc::decode::<Nothing>(&encoded).unwrap(), Nothing);
}

#[test]
fn generic_struct_roundtrips() {
    let value = Tagged {
        tag: 9,
        value: vec!["a".to_owned(), "bc".to_owned()],
    };
    let encoded = goc::encode(&value).unwrap();
    assert_eq!(encoded.len(), goc::size(&value));
    assert_eq!(goc::decode::<Tagged<Vec<String>>>(&encoded).unwrap(), value);
}

#[test]
fn boxed_struct_fields_roundtrip() {
    let value = Tagged {
        tag: 1,
        value: Box::new(Record {
            a: -8,
            b: "boxed".to_owned(),
        }),
    };
    let encoded = goc::encode(&value).unwrap();
    assert_eq!(goc::decode::<Tagged<Box<Record>>>(&encoded).unwrap(), value);
}

#[test]
fn field_errors_carry_the_field_name() {
    // Record.a truncated after four bytes
    let err = goc::decode::<Record>(&[0x05, 0x00, 0x00, 0x00]).unwrap_err();
    assert!(matches!(err.kind(), DecodeErrorKind::Field { name: "a" }));

    // Record.b claims one byte and carries none
    let err = goc::decode::<Record>(&[
        0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
        0x01, 0x00, 0x00, 0x00,
    ])
    .unwrap_err();
    assert!(matches!(err.kind(), DecodeErrorKind::Field { name: "b" }));
    assert!(err.report().to_string().contains("field `b`"));
}

#[test]
fn error_reports_spell_out_the_layer_path() {
    let err = goc::decode::<Record>(&[0x05, 0x00, 0x00, 0x00]).unwrap_err();

    expect![[r"[Record] decoding field `a`, caused by: [i64] not enough bytes provided to decode: received 4 bytes, expected 8 bytes"]]
        .assert_eq(&err.report().to_string());
}
