use goc::{Complex128, Complex64};
use rstest::rstest;

fn roundtrip<T>(value: T) -> T
where
    T: goc::Wire,
{
    let encoded = goc::encode(&value).unwrap();
    assert_eq!(encoded.len(), goc::size(&value));
    goc::decode(&encoded).unwrap()
}

#[rstest]
#[case(1_u32, &[0x01, 0x00, 0x00, 0x00])]
#[case(0_u32, &[0x00, 0x00, 0x00, 0x00])]
#[case(0xDEAD_BEEF_u32, &[0xEF, 0xBE, 0xAD, 0xDE])]
fn u32_wire_form(#[case] value: u32, #[case] expected: &'static [u8]) {
    let encoded = goc::encode(&value).unwrap();
    assert_eq!(encoded, expected);
    assert_eq!(goc::decode::<u32>(&encoded).unwrap(), value);
}

#[rstest]
#[case(-1_i16, &[0xFF, 0xFF])]
#[case(0x1234_i16, &[0x34, 0x12])]
fn i16_wire_form(#[case] value: i16, #[case] expected: &'static [u8]) {
    let encoded = goc::encode(&value).unwrap();
    assert_eq!(encoded, expected);
    assert_eq!(goc::decode::<i16>(&encoded).unwrap(), value);
}

#[test]
fn scalars_encode_to_their_le_representation() {
    assert_eq!(goc::encode(&0x0123_4567_89AB_CDEF_u64).unwrap(), 0x0123_4567_89AB_CDEF_u64.to_le_bytes());
    assert_eq!(goc::encode(&-2_i64).unwrap(), (-2_i64).to_le_bytes());
    assert_eq!(goc::encode(&1.5_f32).unwrap(), 1.5_f32.to_le_bytes());
    assert_eq!(goc::encode(&-0.25_f64).unwrap(), (-0.25_f64).to_le_bytes());
    assert_eq!(goc::encode(&0x7F_u8).unwrap(), [0x7F]);
    assert_eq!(goc::encode(&-128_i8).unwrap(), [0x80]);
}

#[test]
fn bool_wire_form() {
    assert_eq!(goc::encode(&true).unwrap(), [0x01]);
    assert_eq!(goc::encode(&false).unwrap(), [0x00]);
}

#[rstest]
#[case(&[0x00], false)]
#[case(&[0x01], true)]
#[case(&[0x02], true)]
#[case(&[0xFF], true)]
fn bool_decode_accepts_any_nonzero_byte(#[case] encoded: &'static [u8], #[case] expected: bool) {
    assert_eq!(goc::decode::<bool>(encoded).unwrap(), expected);
}

#[test]
fn complex64_is_two_f32_halves() {
    let value = Complex64::new(1.0, -2.0);
    let encoded = goc::encode(&value).unwrap();

    assert_eq!(encoded[..4], 1.0_f32.to_le_bytes());
    assert_eq!(encoded[4..], (-2.0_f32).to_le_bytes());
    assert_eq!(roundtrip(value), value);
}

#[test]
fn complex128_is_two_f64_halves() {
    let value = Complex128::new(0.5, 3.25);
    let encoded = goc::encode(&value).unwrap();

    assert_eq!(encoded.len(), 16);
    assert_eq!(encoded[..8], 0.5_f64.to_le_bytes());
    assert_eq!(encoded[8..], 3.25_f64.to_le_bytes());
    assert_eq!(roundtrip(value), value);
}

#[test]
fn encode_to_reuses_a_caller_owned_buffer() {
    let mut buf = goc::WriteBuf::from_vec(Vec::with_capacity(64));

    goc::encode_to(&7_u32, &mut buf).unwrap();
    assert_eq!(buf.filled(), [0x07, 0x00, 0x00, 0x00]);

    buf.clear();
    goc::encode_to(&String::from("hi"), &mut buf).unwrap();
    assert_eq!(buf.filled(), [0x02, 0x00, 0x00, 0x00, 0x68, 0x69]);
    assert_eq!(buf.into_vec(), [0x02, 0x00, 0x00, 0x00, 0x68, 0x69]);
}

#[test]
fn truncated_scalar_is_rejected() {
    let err = goc::decode::<u32>(&[0x01, 0x02]).unwrap_err();
    assert!(matches!(
        err.kind(),
        goc::DecodeErrorKind::NotEnoughBytes { received: 2, expected: 4 }
    ));
}

#[test]
fn empty_source_is_rejected_when_bytes_are_expected() {
    let err = goc::decode::<u8>(&[]).unwrap_err();
    assert!(matches!(
        err.kind(),
        goc::DecodeErrorKind::NotEnoughBytes { received: 0, expected: 1 }
    ));
}
