// crates/shared-kernel/tests/error_context.rs
use vidshelf_shared_kernel::{CodecError, ErrorContext, VidshelfError};

fn bad_decode() -> std::result::Result<u64, CodecError> {
    Err(CodecError::not_a_number("abc", "invalid digit found in string"))
}

#[test]
fn context_wraps_and_formats() {
    let err = bad_decode().context("decoding size range").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("decoding size range"));
    assert!(display.contains("Decode error:"));
    assert!(display.contains("'abc'"));
}

#[test]
fn with_context_is_lazy_and_keeps_source() {
    let ok: std::result::Result<u8, CodecError> = Ok(1);
    let value = ok
        .with_context(|| unreachable!("context built for a success"))
        .unwrap();
    assert_eq!(value, 1);

    let err = bad_decode()
        .with_context(|| "param 'size'".to_string())
        .unwrap_err();
    match err {
        VidshelfError::Context { context, source } => {
            assert_eq!(context, "param 'size'");
            assert!(matches!(*source, VidshelfError::Codec(CodecError::NotANumber { .. })));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
