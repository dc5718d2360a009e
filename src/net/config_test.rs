use super::*;

#[test]
fn defaults_point_at_relative_api_root() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "/api");
    assert_eq!(config.timeout_ms, 5_000);
}

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url("https://clinic.example/api/"), "https://clinic.example/api");
    assert_eq!(normalize_base_url("https://clinic.example"), "https://clinic.example");
}

#[test]
fn parse_timeout_accepts_positive_integers_only() {
    assert_eq!(parse_timeout_ms("2500"), Some(2_500));
    assert_eq!(parse_timeout_ms(" 100 "), Some(100));
    assert_eq!(parse_timeout_ms("0"), None);
    assert_eq!(parse_timeout_ms("-5"), None);
    assert_eq!(parse_timeout_ms("soon"), None);
}
