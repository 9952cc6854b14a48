//! Reusable view components for the car page.

pub mod car_form;
pub mod car_row;
