// src/domain/post/cursor_tests.rs
use crate::domain::post::{PostCursor, PostId};

#[test]
fn cursor_encode_decode_roundtrip() {
    let cursor = PostCursor::new(PostId::new(42).unwrap());
    let token = cursor.encode();
    let decoded = PostCursor::decode(&token).expect("decode should succeed");
    assert_eq!(decoded, cursor);
}

#[test]
fn cursor_rejects_foreign_tokens() {
    assert!(PostCursor::decode("not base64 !").is_err());
    // "user|7"
    assert!(PostCursor::decode("dXNlcnw3").is_err());
    // "post|-1"
    assert!(PostCursor::decode("cG9zdHwtMQ").is_err());
}
