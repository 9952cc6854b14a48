use super::*;

const STYLESHEET: &str = include_str!("../../style.css");

fn rule(selector: &str) -> &'static str {
    let start = STYLESHEET.find(&format!("{selector} {{")).unwrap();
    let body = &STYLESHEET[start..];
    &body[..body.find('}').unwrap()]
}

#[test]
fn row_image_is_a_square_cover_thumbnail() {
    let image = rule(".car-row__image");
    assert!(image.contains("width: 128px;"));
    assert!(image.contains("height: 128px;"));
    assert!(image.contains("object-fit: cover;"));
}

#[test]
fn row_view_carries_summary_and_resolved_image() {
    let car = Car {
        id: CarId(3),
        make: "Kia".to_owned(),
        model: "Rio".to_owned(),
        year: 2016,
        price: "6500.00".to_owned(),
        image: Some("/media/cars/rio.png".to_owned()),
    };
    let row = CarRowView::new(&car, "http://127.0.0.1:8000");
    assert_eq!(row.id, CarId(3));
    assert_eq!(row.summary, "2016 Kia Rio - $6500.00");
    assert_eq!(row.image_url.as_deref(), Some("http://127.0.0.1:8000/media/cars/rio.png"));
    assert_eq!(row.alt_text, "Kia Rio");
}
