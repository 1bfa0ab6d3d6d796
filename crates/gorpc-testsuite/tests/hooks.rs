use goc::{DecodeErrorKind, EncodeErrorKind, WriteBuf};
use gorpc_testsuite::{Broken, Framed, Hooked, Opaque, Tagged, FRAMED_MAGIC};

#[test]
fn stream_hooks_bypass_the_structural_form() {
    let value = Framed {
        payload: vec![1, 2, 3],
    }
    .hooked();

    let encoded = goc::encode(&value).unwrap();
    assert_eq!(encoded, [FRAMED_MAGIC, 1, 2, 3]);

    assert_eq!(goc::decode::<Hooked>(&encoded).unwrap(), value);
}

#[test]
fn stream_decode_hook_errors_surface_as_hook_failures() {
    let err = goc::decode::<Hooked>(&[0x00, 1, 2, 3]).unwrap_err();
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::HookFailed { protocol: "stream-decode" }
    ));
}

#[test]
fn nested_hook_types_encode_structurally() {
    // Hooks are probed at the entry points only; as a struct field the
    // same value takes its length-prefixed structural form.
    let value = Tagged {
        tag: 1,
        value: Framed {
            payload: vec![9, 8],
        }
        .hooked(),
    };

    let encoded = goc::encode(&value).unwrap();
    assert_eq!(encoded, [0x01, 0x02, 0x00, 0x00, 0x00, 0x09, 0x08]);
    assert_eq!(goc::decode::<Tagged<Hooked>>(&encoded).unwrap(), value);
}

#[test]
fn buffer_hooks_consume_the_source_to_end_of_stream() {
    let value = Opaque(vec![0xCA, 0xFE, 0x00, 0x01]);

    let encoded = goc::encode(&value).unwrap();
    // no length prefix: the hook owns the whole stream
    assert_eq!(encoded, [0xCA, 0xFE, 0x00, 0x01]);

    assert_eq!(goc::decode::<Opaque>(&encoded).unwrap(), value);
}

#[test]
fn encode_to_reports_hook_output_length() {
    let mut buf = WriteBuf::new();
    let written = goc::encode_to(&Opaque(vec![1, 2, 3]), &mut buf).unwrap();
    assert_eq!(written, 3);
    assert_eq!(buf.filled(), [1, 2, 3]);
}

#[test]
fn marshal_hook_failures_carry_the_protocol_name() {
    let err = goc::encode(&Broken).unwrap_err();
    assert!(matches!(
        err.kind(),
        EncodeErrorKind::HookFailed { protocol: "marshal-binary" }
    ));

    let err = goc::decode::<Broken>(&[]).unwrap_err();
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::HookFailed { protocol: "unmarshal-binary" }
    ));
}
