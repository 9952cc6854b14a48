#[cfg(test)]
#[path = "cars_test.rs"]
mod cars_test;

use crate::types::{Car, CarId};

/// The authenticated user's cars in server order, spliced after each
/// confirmed mutation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarListState {
    pub items: Vec<Car>,
}

impl CarListState {
    /// Replace the whole list with a fresh server snapshot.
    pub fn replace_all(&mut self, cars: Vec<Car>) {
        self.items = cars;
    }

    /// Append a newly created car at the end.
    pub fn append(&mut self, car: Car) {
        self.items.push(car);
    }

    /// Replace the record with `id` in place. Returns `false` if absent.
    pub fn replace(&mut self, id: CarId, car: Car) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => {
                *slot = car;
                true
            }
            None => false,
        }
    }

    /// Remove every record with `id`, returning the first one removed.
    pub fn remove(&mut self, id: CarId) -> Option<Car> {
        let index = self.items.iter().position(|car| car.id == id)?;
        let removed = self.items.remove(index);
        self.items.retain(|car| car.id != id);
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.items.iter().find(|car| car.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: CarId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.items.iter()
    }
}
