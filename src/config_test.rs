use super::*;

/// # Safety
/// Callers must not run concurrently with other tests touching `AUTH_*`
/// env vars; all env scenarios live in one test below for that reason.
unsafe fn clear_auth_env() {
    unsafe {
        std::env::remove_var("AUTH_BASE_URL");
        std::env::remove_var("AUTH_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("AUTH_CONNECT_TIMEOUT_SECS");
    }
}

// One test covers every env scenario sequentially so parallel test threads
// never race on the shared AUTH_* variables.
#[test]
fn from_env_reads_environment() {
    // Defaults with nothing set.
    unsafe { clear_auth_env() };
    let cfg = AuthConfig::from_env();
    assert_eq!(cfg.base_url, DEFAULT_AUTH_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        HttpTimeouts {
            request_secs: DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_AUTH_CONNECT_TIMEOUT_SECS,
        }
    );

    // Overrides, including base URL normalization.
    unsafe {
        std::env::set_var("AUTH_BASE_URL", "https://auth.example.test/api/auth");
        std::env::set_var("AUTH_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("AUTH_CONNECT_TIMEOUT_SECS", "7");
    }
    let cfg = AuthConfig::from_env();
    assert_eq!(cfg.base_url, "https://auth.example.test/api/auth/");
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 42, connect_secs: 7 });

    // Unparsable timeout falls back to the default.
    unsafe { std::env::set_var("AUTH_REQUEST_TIMEOUT_SECS", "not-a-number") };
    let cfg = AuthConfig::from_env();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_AUTH_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, 7);

    unsafe { clear_auth_env() };
}

#[test]
fn new_appends_missing_trailing_slash() {
    let cfg = AuthConfig::new("http://localhost:9999/auth");
    assert_eq!(cfg.base_url, "http://localhost:9999/auth/");
}

#[test]
fn new_keeps_existing_trailing_slash() {
    let cfg = AuthConfig::new("http://localhost:9999/auth/");
    assert_eq!(cfg.base_url, "http://localhost:9999/auth/");
}

#[test]
fn default_matches_new_with_default_url() {
    assert_eq!(AuthConfig::default(), AuthConfig::new(DEFAULT_AUTH_BASE_URL));
}
