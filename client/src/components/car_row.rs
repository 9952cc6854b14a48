//! One line of the car list with its edit and delete actions.

#[cfg(test)]
#[path = "car_row_test.rs"]
mod car_row_test;

use leptos::prelude::*;

use carlot::{Car, CarId};

/// Display data for a single listed car.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarRowView {
    pub id: CarId,
    pub summary: String,
    pub image_url: Option<String>,
    pub alt_text: String,
}

impl CarRowView {
    pub fn new(car: &Car, base_url: &str) -> Self {
        Self {
            id: car.id,
            summary: car.summary(),
            image_url: car.image_url(base_url),
            alt_text: car.alt_text(),
        }
    }
}

#[component]
pub fn CarRow(row: CarRowView, on_edit: Callback<CarId>, on_delete: Callback<CarId>) -> impl IntoView {
    let id = row.id;
    let image = row.image_url.map(|src| {
        view! { <img class="car-row__image" src=src alt=row.alt_text/> }
    });

    view! {
        <li class="car-row">
            <span class="car-row__summary">{row.summary}</span>
            {image}
            <button class="btn car-row__edit" on:click=move |_| on_edit.run(id)>
                "Edit"
            </button>
            <button class="btn car-row__delete" on:click=move |_| on_delete.run(id)>
                "Delete"
            </button>
        </li>
    }
}
