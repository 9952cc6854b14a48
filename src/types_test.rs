use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_car() -> Car {
    Car {
        id: CarId(5),
        make: "Toyota".to_owned(),
        model: "Corolla".to_owned(),
        year: 2020,
        price: "15000".to_owned(),
        image: Some("/media/cars/corolla.jpg".to_owned()),
    }
}

// =============================================================
// Car decoding
// =============================================================

#[test]
fn car_decodes_decimal_price_string() {
    let json = r#"{"id":7,"make":"Honda","model":"Civic","year":2019,"price":"12500.50","image":null}"#;
    let car: Car = serde_json::from_str(json).unwrap();
    assert_eq!(car.id, CarId(7));
    assert_eq!(car.year, 2019);
    assert_eq!(car.price, "12500.50");
    assert!(car.image.is_none());
}

#[test]
fn car_decodes_numeric_price_and_float_year() {
    let json = r#"{"id":1,"make":"Ford","model":"Focus","year":2018.0,"price":9000}"#;
    let car: Car = serde_json::from_str(json).unwrap();
    assert_eq!(car.year, 2018);
    assert_eq!(car.price, "9000");
    assert!(car.image.is_none(), "missing image defaults to None");
}

#[test]
fn car_rejects_non_numeric_price() {
    let json = r#"{"id":1,"make":"Ford","model":"Focus","year":2018,"price":"cheap"}"#;
    assert!(serde_json::from_str::<Car>(json).is_err());
}

#[test]
fn car_rejects_fractional_year() {
    let json = r#"{"id":1,"make":"Ford","model":"Focus","year":2018.5,"price":1}"#;
    assert!(serde_json::from_str::<Car>(json).is_err());
}

#[test]
fn car_id_serializes_as_bare_number() {
    assert_eq!(serde_json::to_string(&CarId(42)).unwrap(), "42");
    assert_eq!("42".parse::<CarId>().unwrap(), CarId(42));
    assert_eq!(CarId(42).to_string(), "42");
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn summary_matches_listing_format() {
    assert_eq!(make_car().summary(), "2020 Toyota Corolla - $15000");
}

#[test]
fn summary_shows_price_text_unchanged() {
    let json = r#"{"id":5,"make":"Toyota","model":"Corolla","year":2020,"price":"15000.50"}"#;
    let car: Car = serde_json::from_str(json).unwrap();
    assert_eq!(car.summary(), "2020 Toyota Corolla - $15000.50");
}

#[test]
fn price_beyond_float_precision_is_kept_verbatim() {
    let json = r#"{"id":5,"make":"Toyota","model":"Corolla","year":2020,"price":"123456789012345678.99"}"#;
    let car: Car = serde_json::from_str(json).unwrap();
    assert_eq!(car.price, "123456789012345678.99");
    assert_eq!(car.summary(), "2020 Toyota Corolla - $123456789012345678.99");
}

#[test]
fn alt_text_joins_make_and_model() {
    assert_eq!(make_car().alt_text(), "Toyota Corolla");
}

#[test]
fn image_url_prefixes_api_host() {
    let car = make_car();
    assert_eq!(
        car.image_url("http://127.0.0.1:8000/").as_deref(),
        Some("http://127.0.0.1:8000/media/cars/corolla.jpg")
    );
}

#[test]
fn image_url_none_without_image() {
    let car = Car { image: None, ..make_car() };
    assert!(car.image_url("http://127.0.0.1:8000").is_none());
    let blank = Car { image: Some(String::new()), ..make_car() };
    assert!(blank.image_url("http://127.0.0.1:8000").is_none());
}

#[test]
fn resolve_media_url_passes_absolute_urls_through() {
    assert_eq!(
        resolve_media_url("http://127.0.0.1:8000", "https://cdn.example.com/a.png"),
        "https://cdn.example.com/a.png"
    );
    assert_eq!(resolve_media_url("http://h", "media/a.png"), "http://h/media/a.png");
}

// =============================================================
// ImageUpload
// =============================================================

#[test]
fn image_upload_guesses_content_type() {
    let upload = ImageUpload::new("Photo.JPG", vec![1, 2, 3]);
    assert_eq!(upload.content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(guess_content_type("car.png"), Some("image/png"));
    assert_eq!(guess_content_type("notes.txt"), None);
    assert_eq!(guess_content_type("no_extension"), None);
}

#[test]
fn image_upload_debug_hides_bytes() {
    let upload = ImageUpload::new("a.png", vec![0; 4096]);
    let debug = format!("{upload:?}");
    assert!(debug.contains("len: 4096"));
    assert!(!debug.contains("0, 0, 0"));
}
