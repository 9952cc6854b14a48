//! The "my cars" page as a UI-independent controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front-ends own rendering and scheduling. They call a `begin_*`/request
//! builder, run the matching [`CarApi`] call wherever their runtime allows,
//! then hand the result to a `finish_*` method. The async helpers at the
//! bottom chain both halves for callers that can hold `&mut self` across an
//! await (the CLI, tests).
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged with its status and body. Mutations additionally
//! return an [`Alert`] with a fixed message; list loads fail silently. Local
//! state changes only after the server confirms.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::api::{self, ApiError, CarApi};
use crate::session::Session;
use crate::state::cars::CarListState;
use crate::state::form::{CarFormState, FormError, SubmitRequest};
use crate::state::loader::{CarListLoader, LoadTicket};
use crate::types::{Car, CarId, User};

pub const EMPTY_LIST_MESSAGE: &str = "No cars found.";

/// User-facing failure notice for a mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alert {
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
}

impl Alert {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::CreateFailed => "Failed to create car.",
            Self::UpdateFailed => "Failed to update car.",
            Self::DeleteFailed => "Failed to delete car.",
        }
    }
}

/// What happened to a completed list load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced with this many cars.
    Applied(usize),
    /// A newer load started first; the response was dropped.
    Stale,
    /// The request failed; the list is unchanged.
    Failed,
}

/// `"Home Page for {username}!"`
#[must_use]
pub fn greeting(user: &User) -> String {
    format!("Home Page for {}!", user.username)
}

#[derive(Clone, Debug, Default)]
pub struct CarsPage {
    pub cars: CarListState,
    pub form: CarFormState,
    loader: CarListLoader,
}

impl CarsPage {
    /// Start the initial load for this session's token, once per token.
    pub fn begin_load(&mut self, session: &Session) -> Option<LoadTicket> {
        self.loader.begin(session.token())
    }

    /// Start a load even if this token was already loaded.
    pub fn begin_reload(&mut self, session: &Session) -> LoadTicket {
        self.loader.restart(session.token())
    }

    /// Drop everything tied to the previous session.
    pub fn sign_out(&mut self) {
        self.loader.reset();
        self.cars = CarListState::default();
        self.form.cancel();
    }

    pub fn finish_load(&mut self, ticket: &LoadTicket, result: Result<Vec<Car>, ApiError>) -> LoadOutcome {
        if !self.loader.accepts(ticket) {
            tracing::debug!(generation = ticket.generation(), "discarding stale car list response");
            return LoadOutcome::Stale;
        }
        match result {
            Ok(cars) => {
                let count = cars.len();
                self.cars.replace_all(cars);
                if let Some(id) = self.form.editing_id {
                    if !self.cars.contains(id) {
                        self.form.cancel();
                    }
                }
                tracing::debug!(count, "car list loaded");
                LoadOutcome::Applied(count)
            }
            Err(err) => {
                log_failure("list", &err);
                LoadOutcome::Failed
            }
        }
    }

    /// Apply the outcome of a create or update.
    pub fn finish_submit(&mut self, request: &SubmitRequest, result: Result<Car, ApiError>) -> Option<Alert> {
        match (request, result) {
            (SubmitRequest::Create { .. }, Ok(car)) => {
                tracing::debug!(id = %car.id, "car created");
                self.cars.append(car);
                self.form.clear_draft();
                None
            }
            (SubmitRequest::Update { id, .. }, Ok(car)) => {
                if !self.cars.replace(*id, car) {
                    tracing::debug!(%id, "updated car no longer in list");
                }
                self.form.cancel();
                None
            }
            (SubmitRequest::Create { .. }, Err(err)) => {
                log_failure("create", &err);
                Some(Alert::CreateFailed)
            }
            (SubmitRequest::Update { .. }, Err(err)) => {
                log_failure("update", &err);
                Some(Alert::UpdateFailed)
            }
        }
    }

    /// Apply the outcome of a delete.
    pub fn finish_delete(&mut self, id: CarId, result: Result<(), ApiError>) -> Option<Alert> {
        match result {
            Ok(()) => {
                self.cars.remove(id);
                if self.form.editing_id == Some(id) {
                    self.form.cancel();
                }
                None
            }
            Err(err) => {
                log_failure("delete", &err);
                Some(Alert::DeleteFailed)
            }
        }
    }

    /// Initial load; `None` when this token was already loaded.
    pub async fn load<A>(&mut self, api: &A, session: &Session) -> Option<LoadOutcome>
    where
        A: CarApi + ?Sized,
    {
        let ticket = self.begin_load(session)?;
        let result = api.list_mine(session).await;
        Some(self.finish_load(&ticket, result))
    }

    pub async fn refresh<A>(&mut self, api: &A, session: &Session) -> LoadOutcome
    where
        A: CarApi + ?Sized,
    {
        let ticket = self.begin_reload(session);
        let result = api.list_mine(session).await;
        self.finish_load(&ticket, result)
    }

    /// Validate and send the form.
    ///
    /// # Errors
    ///
    /// Returns a validation error without contacting the server. Server and
    /// transport failures are reported through the `Alert` instead.
    pub async fn submit<A>(&mut self, api: &A, session: &Session) -> Result<Option<Alert>, FormError>
    where
        A: CarApi + ?Sized,
    {
        let request = self.form.submit_request()?;
        let result = api::send_submit(api, session, &request).await;
        Ok(self.finish_submit(&request, result))
    }

    pub async fn delete<A>(&mut self, api: &A, session: &Session, id: CarId) -> Option<Alert>
    where
        A: CarApi + ?Sized,
    {
        let result = api.delete(session, id).await;
        self.finish_delete(id, result)
    }
}

fn log_failure(operation: &'static str, err: &ApiError) {
    tracing::warn!(
        operation,
        status = err.status(),
        body = err.body().unwrap_or_default(),
        error = %err,
        "car request failed"
    );
}
