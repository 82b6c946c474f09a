use super::*;

#[test]
fn new_trims_whitespace_and_trailing_slash() {
    let config = BackendConfig::new("  https://abc.supabase.co/  ", " key ").unwrap();
    assert_eq!(config.url, "https://abc.supabase.co");
    assert_eq!(config.anon_key, "key");
    assert!(config.is_configured());
}

#[test]
fn new_rejects_blank_values() {
    assert_eq!(BackendConfig::new("", "key"), Err(ConfigError::Missing("backend url")));
    assert_eq!(BackendConfig::new("https://x.test", "  "), Err(ConfigError::Missing("anon key")));
}

#[test]
fn new_rejects_non_http_url() {
    let err = BackendConfig::new("ftp://x.test", "key").unwrap_err();
    assert!(err.to_string().contains("invalid backend url"));
}

#[test]
fn default_is_not_configured() {
    assert!(!BackendConfig::default().is_configured());
}

#[test]
fn endpoints_are_joined_under_service_prefixes() {
    let config = BackendConfig::new("http://localhost:54321", "anon").unwrap();
    assert_eq!(config.rest_endpoint("medical_supplies"), "http://localhost:54321/rest/v1/medical_supplies");
    assert_eq!(config.auth_endpoint("signup"), "http://localhost:54321/auth/v1/signup");
    assert_eq!(config.auth_endpoint("/logout"), "http://localhost:54321/auth/v1/logout");
}

#[test]
fn from_document_is_none_outside_browser() {
    assert!(BackendConfig::from_document().is_none());
}
