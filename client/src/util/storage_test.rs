use super::*;
use crate::net::types::AuthUser;

fn session() -> Session {
    Session {
        access_token: "access".to_owned(),
        refresh_token: Some("refresh".to_owned()),
        expires_at: Some(1_700_000_000),
        user: AuthUser { id: "user-1".to_owned(), email: Some("nurse@clinic.test".to_owned()) },
    }
}

#[test]
fn stored_session_decodes_to_same_value() {
    let raw = encode_session(&session()).unwrap();
    assert_eq!(decode_session(&raw), Some(session()));
}

#[test]
fn corrupt_entry_reads_as_absent() {
    assert_eq!(decode_session("not json"), None);
    assert_eq!(decode_session(r#"{"user":{"id":"x"}}"#), None);
}

#[test]
fn entry_without_refresh_token_still_decodes() {
    let raw = r#"{"access_token":"a","user":{"id":"u"}}"#;
    let decoded = decode_session(raw).unwrap();
    assert_eq!(decoded.refresh_token, None);
    assert_eq!(decoded.expires_at, None);
    assert_eq!(decoded.user.email, None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_build_has_no_storage() {
    save_session(Some(&session()));
    assert_eq!(load_session(), None);
}
