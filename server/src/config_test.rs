use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn parses_required_values_and_default_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("SUPABASE_URL", "https://project.supabase.co/"),
        ("SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert_eq!(cfg.backend.url, "https://project.supabase.co");
    assert_eq!(cfg.backend.anon_key, "anon");
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn port_override_is_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("SUPABASE_URL", "http://localhost:54321"),
        ("SUPABASE_ANON_KEY", "anon"),
        ("PORT", "8080"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn missing_url_is_reported_by_name() {
    let err = ServerConfig::from_lookup(lookup(&[("SUPABASE_ANON_KEY", "anon")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "SUPABASE_URL" }));
    assert_eq!(err.to_string(), "SUPABASE_URL is required");
}

#[test]
fn blank_anon_key_counts_as_missing() {
    let err = ServerConfig::from_lookup(lookup(&[
        ("SUPABASE_URL", "https://project.supabase.co"),
        ("SUPABASE_ANON_KEY", "  "),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "SUPABASE_ANON_KEY" }));
}

#[test]
fn non_http_url_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[
        ("SUPABASE_URL", "project.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Backend(_)));
}

#[test]
fn bad_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[
        ("SUPABASE_URL", "https://project.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon"),
        ("PORT", "http"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
}

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("SUPABASE_URL");
        std::env::remove_var("SUPABASE_ANON_KEY");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        clear_server_env();
        std::env::set_var("SUPABASE_URL", "https://env.supabase.co");
        std::env::set_var("SUPABASE_ANON_KEY", "env-anon");
        std::env::set_var("PORT", "4000");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.backend.url, "https://env.supabase.co");
    assert_eq!(cfg.port, 4000);

    unsafe { clear_server_env() };
}
