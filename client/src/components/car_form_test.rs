use super::*;
use carlot::{Car, CarId};

fn accord() -> Car {
    Car {
        id: CarId(5),
        make: "Honda".to_owned(),
        model: "Accord".to_owned(),
        year: 2017,
        price: "14250.00".to_owned(),
        image: None,
    }
}

#[test]
fn numeric_fields_render_as_number_inputs() {
    assert_eq!(input_type(CarField::Make), "text");
    assert_eq!(input_type(CarField::Model), "text");
    assert_eq!(input_type(CarField::Year), "number");
    assert_eq!(input_type(CarField::Price), "number");
}

#[test]
fn price_accepts_fractional_steps() {
    assert_eq!(input_step(CarField::Price), Some("any"));
    assert_eq!(input_step(CarField::Year), Some("1"));
    assert_eq!(input_step(CarField::Make), None);
}

#[test]
fn view_reflects_create_mode_and_image_flag() {
    let mut form = CarFormState::default();
    form.set(CarField::Make, "Toyota");
    form.select_image(Some(ImageUpload::new("car.png", vec![0; 1024])));

    let view = CarFormView::new(&form);
    assert_eq!(view.mode, FormMode::Create);
    assert!(!view.is_editing());
    assert!(view.has_image);
    assert_eq!(view.field(CarField::Make), "Toyota");
    assert_eq!(view.field(CarField::Price), "");
}

#[test]
fn view_reflects_edit_mode_fields() {
    let mut form = CarFormState::default();
    form.begin_edit(&accord());

    let view = CarFormView::new(&form);
    assert_eq!(view.mode, FormMode::Editing(CarId(5)));
    assert!(view.is_editing());
    assert!(!view.has_image);
    assert_eq!(view.field(CarField::Model), "Accord");
    assert_eq!(view.field(CarField::Year), "2017");
    assert_eq!(view.field(CarField::Price), "14250.00");
}

#[test]
fn view_ignores_which_image_bytes_are_selected() {
    let mut first = CarFormState::default();
    first.select_image(Some(ImageUpload::new("a.png", vec![1; 16])));
    let mut second = CarFormState::default();
    second.select_image(Some(ImageUpload::new("b.png", vec![2; 32])));
    assert_eq!(CarFormView::new(&first), CarFormView::new(&second));
}
