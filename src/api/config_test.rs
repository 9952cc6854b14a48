use super::*;

fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
    move |key| {
        assert_eq!(key, API_BASE_URL_ENV);
        value.map(str::to_owned)
    }
}

#[test]
fn from_lookup_defaults_to_local_host() {
    let cfg = ApiConfig::from_lookup(lookup_with(None)).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = ApiConfig::from_lookup(lookup_with(Some("   "))).unwrap();
    assert_eq!(cfg, ApiConfig::default());
}

#[test]
fn from_lookup_trims_trailing_slash() {
    let cfg = ApiConfig::from_lookup(lookup_with(Some("https://cars.example.test/"))).unwrap();
    assert_eq!(cfg.base_url, "https://cars.example.test");
}

#[test]
fn new_rejects_relative_or_hostless_urls() {
    assert_eq!(
        ApiConfig::new("cars.example.test"),
        Err(ConfigError::InvalidBaseUrl("cars.example.test".to_owned()))
    );
    assert!(ApiConfig::new("http://").is_err());
    assert!(ApiConfig::new("ftp://example.test").is_err());
}
