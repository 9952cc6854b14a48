//! # carlot
//!
//! Core library for the per-user car listing client. Owns the wire types,
//! the bearer-token session, the `CarApi` data-access seam and the list/form
//! state that the browser and command-line front-ends drive.
//!
//! ARCHITECTURE
//! ============
//! `api` performs the four REST operations and nothing else. `state` holds
//! the list, the form draft and the load generation counter as plain data.
//! `page` composes both: it applies server results to local state and
//! decides which alert, if any, a front-end must show.

pub mod api;
pub mod page;
pub mod session;
pub mod state;
pub mod types;

pub use api::{ApiError, CarApi};
pub use page::{Alert, CarsPage, LoadOutcome};
pub use session::{Session, SessionError};
pub use types::{Car, CarId, ImageUpload, User};
