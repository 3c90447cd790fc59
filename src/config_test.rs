use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BACKEND_URL");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, backend_url: DEFAULT_BACKEND_URL.to_owned() });
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BACKEND_URL", "https://styles.example.test/api/");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://styles.example.test/api");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
    }

    assert_eq!(ServerConfig::from_env(), Err(ConfigError::InvalidPort("eighty".into())));

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn parse_port_blank_falls_back_to_default() {
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_backend_url_requires_http_scheme() {
    assert_eq!(
        parse_backend_url(Some("localhost:8000")),
        Err(ConfigError::InvalidBackendUrl("localhost:8000".into()))
    );
    assert_eq!(
        parse_backend_url(Some("ftp://files.example.test")),
        Err(ConfigError::InvalidBackendUrl("ftp://files.example.test".into()))
    );
}

#[test]
fn parse_backend_url_trims_whitespace_and_slashes() {
    assert_eq!(parse_backend_url(Some(" http://10.0.0.5:8000// ")), Ok("http://10.0.0.5:8000".into()));
}

#[test]
fn parse_backend_url_blank_falls_back_to_default() {
    assert_eq!(parse_backend_url(Some("")), Ok(DEFAULT_BACKEND_URL.into()));
    assert_eq!(parse_backend_url(None), Ok(DEFAULT_BACKEND_URL.into()));
}
