use super::*;

#[test]
fn config_from_defaults_when_unset() {
    let config = config_from(None).unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:8000");
}

#[test]
fn config_from_normalizes_trailing_slash() {
    let config = config_from(Some("https://cars.example.com/")).unwrap();
    assert_eq!(BrowserCarApi::new(&config).base_url(), "https://cars.example.com");
}

#[test]
fn config_from_rejects_relative_url() {
    assert!(matches!(config_from(Some("/api")), Err(ConfigError::InvalidBaseUrl(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_unavailable() {
    use carlot::User;

    let api = BrowserCarApi::new(&ApiConfig::default());
    let session = Session::new(User::default(), "t");
    let payload = CarPayload {
        make: "Toyota".to_owned(),
        model: "Corolla".to_owned(),
        year: "2020".to_owned(),
        price: "15000".to_owned(),
        image: None,
    };
    futures::executor::block_on(async {
        assert_eq!(api.list_mine(&session).await, Err(ApiError::Unavailable));
        assert_eq!(api.create(&session, &payload).await, Err(ApiError::Unavailable));
        assert_eq!(api.update(&session, CarId(1), &payload).await, Err(ApiError::Unavailable));
        assert_eq!(api.delete(&session, CarId(1)).await, Err(ApiError::Unavailable));
    });
}
