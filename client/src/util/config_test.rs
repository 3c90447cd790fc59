use super::*;

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    assert_eq!(BackendConfig::new(" https://api.test/// ").base_url(), "https://api.test");
}

#[test]
fn blank_url_falls_back_to_default() {
    assert_eq!(BackendConfig::new("   ").base_url(), DEFAULT_BACKEND_URL);
    assert_eq!(BackendConfig::default().base_url(), DEFAULT_BACKEND_URL);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_uses_default_outside_browser() {
    assert_eq!(BackendConfig::from_document(), BackendConfig::default());
}

#[test]
fn image_src_prefixes_relative_paths_only() {
    let config = BackendConfig::new("https://api.test/");
    assert_eq!(config.image_src("/out/a.jpg"), "https://api.test/out/a.jpg");
    assert_eq!(config.image_src("https://cdn.test/a.jpg"), "https://cdn.test/a.jpg");
    assert_eq!(config.image_src("blob:http://localhost/1"), "blob:http://localhost/1");
}
