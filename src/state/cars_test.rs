use super::*;

fn car(id: u64, model: &str) -> Car {
    Car {
        id: CarId(id),
        make: "Honda".to_owned(),
        model: model.to_owned(),
        year: 2015,
        price: "8000.00".to_owned(),
        image: None,
    }
}

#[test]
fn car_list_state_defaults_empty() {
    let s = CarListState::default();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
}

#[test]
fn append_places_record_last() {
    let mut s = CarListState::default();
    s.replace_all(vec![car(1, "Fit"), car(2, "Jazz")]);
    s.append(car(3, "Civic"));
    assert_eq!(s.len(), 3);
    assert_eq!(s.items.last().map(|c| c.id), Some(CarId(3)));
}

#[test]
fn replace_swaps_matching_record_in_place() {
    let mut s = CarListState::default();
    s.replace_all(vec![car(1, "Fit"), car(2, "Jazz"), car(3, "Accord")]);
    assert!(s.replace(CarId(2), car(2, "Civic")));
    assert_eq!(s.len(), 3);
    assert_eq!(s.items[1], car(2, "Civic"));
    assert_eq!(s.items[0], car(1, "Fit"));
}

#[test]
fn replace_missing_id_is_noop() {
    let mut s = CarListState::default();
    s.replace_all(vec![car(1, "Fit")]);
    assert!(!s.replace(CarId(9), car(9, "Civic")));
    assert_eq!(s.items, vec![car(1, "Fit")]);
}

#[test]
fn remove_drops_record_and_keeps_order() {
    let mut s = CarListState::default();
    s.replace_all(vec![car(1, "Fit"), car(2, "Jazz"), car(3, "Accord")]);
    let removed = s.remove(CarId(2));
    assert_eq!(removed.map(|c| c.model), Some("Jazz".to_owned()));
    assert_eq!(s.len(), 2);
    assert!(!s.contains(CarId(2)));
    assert_eq!(s.iter().map(|c| c.id.0).collect::<Vec<_>>(), [1, 3]);
}

#[test]
fn remove_missing_id_returns_none() {
    let mut s = CarListState::default();
    s.replace_all(vec![car(1, "Fit")]);
    assert!(s.remove(CarId(5)).is_none());
    assert_eq!(s.len(), 1);
}
