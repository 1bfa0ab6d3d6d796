use goc::{DecodeErrorKind, WORD_SIZE};

#[test]
fn word_encoding_is_size_tag_then_payload() {
    let encoded = goc::encode(&0x0102_0304_usize).unwrap();

    assert_eq!(encoded.len(), 1 + WORD_SIZE);
    assert_eq!(encoded[0] as usize, WORD_SIZE);
    assert_eq!(encoded[1..], 0x0102_0304_usize.to_le_bytes());
    assert_eq!(goc::decode::<usize>(&encoded).unwrap(), 0x0102_0304);
}

#[test]
fn signed_word_roundtrips() {
    for value in [isize::MIN, -1, 0, 1, isize::MAX] {
        let encoded = goc::encode(&value).unwrap();
        assert_eq!(encoded.len(), goc::size(&value));
        assert_eq!(goc::decode::<isize>(&encoded).unwrap(), value);
    }
}

#[test]
fn narrow_word_payloads_decode_on_any_host() {
    // a 4-byte peer encoding 7
    let bytes = [0x04, 0x07, 0x00, 0x00, 0x00];
    assert_eq!(goc::decode::<usize>(&bytes).unwrap(), 7);
    assert_eq!(goc::decode::<isize>(&bytes).unwrap(), 7);
}

#[test]
fn unknown_size_tag_is_rejected() {
    let err = goc::decode::<usize>(&[0x05, 0x00, 0x00, 0x00, 0x00, 0x00]).unwrap_err();
    assert!(matches!(err.kind(), DecodeErrorKind::SizeTagUnknown { got: 5 }));

    let err = goc::decode::<isize>(&[0x00]).unwrap_err();
    assert!(matches!(err.kind(), DecodeErrorKind::SizeTagUnknown { got: 0 }));
}

#[test]
fn truncated_word_payload_is_rejected() {
    let err = goc::decode::<usize>(&[0x08, 0x01, 0x02]).unwrap_err();
    assert!(matches!(err.kind(), DecodeErrorKind::NotEnoughBytes { .. }));
}
