//! Browser-only application state.
//!
//! Page data (cars, form draft, load generation) is the core crate's
//! `CarsPage`; only the signed-in session lives here.

pub mod auth;
