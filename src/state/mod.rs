//! Client-side state for the car page.
//!
//! DESIGN
//! ======
//! State is split by concern (`cars`, `form`, `loader`) so each piece is plain
//! data that can be tested without a transport or a UI runtime.

pub mod cars;
pub mod form;
pub mod loader;
