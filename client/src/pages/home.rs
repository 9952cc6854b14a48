//! Home page: the signed-in user's cars plus the create/edit form.
//!
//! SYSTEM CONTEXT
//! ==============
//! All list and form rules live in the core `CarsPage` controller held in an
//! `RwSignal`. This page only schedules requests with `spawn_local`, hands
//! each result to the matching `finish_*` method, and turns returned alerts
//! into `window.alert` calls.
//!
//! ERROR HANDLING
//! ==============
//! A failed list load leaves the list unchanged and shows nothing. Failed
//! mutations alert with a fixed message; details go to the console log.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use carlot::api::{CarApi, send_submit};
use carlot::page::{EMPTY_LIST_MESSAGE, greeting};
use carlot::state::form::CarField;
use carlot::{CarId, CarsPage, ImageUpload};

use crate::components::car_form::{CarForm, CarFormView};
use crate::components::car_row::{CarRow, CarRowView};
use crate::net::api::BrowserCarApi;
use crate::state::auth::AuthState;
use crate::util::browser::{clear_stored_token, show_alert};

/// Page heading for the current session, if any.
fn heading(auth: &AuthState) -> Option<String> {
    auth.user().map(greeting)
}

fn row_views(page: &CarsPage, base_url: &str) -> Vec<CarRowView> {
    page.cars.iter().map(|car| CarRowView::new(car, base_url)).collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let page = RwSignal::new(CarsPage::default());
    let api = StoredValue::new(BrowserCarApi::default());

    // Load once per token; a newer token supersedes any in-flight load.
    Effect::new(move || {
        let Some(session) = auth.with(|a| a.session.clone()) else {
            page.update(CarsPage::sign_out);
            return;
        };
        let Some(ticket) = page.try_update(|p| p.begin_load(&session)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api.get_value().list_mine(&session).await;
            page.update(|p| {
                p.finish_load(&ticket, result);
            });
        });
    });

    let form = Memo::new(move |_| page.with(|p| CarFormView::new(&p.form)));

    let on_input = Callback::new(move |(field, value): (CarField, String)| {
        page.update(|p| p.form.set(field, value));
    });
    let on_image = Callback::new(move |upload: Option<ImageUpload>| {
        page.update(|p| p.form.select_image(upload));
    });
    let on_cancel = Callback::new(move |()| page.update(|p| p.form.cancel()));

    let on_submit = Callback::new(move |()| {
        let Some(session) = auth.with_untracked(|a| a.session.clone()) else {
            return;
        };
        let request = match page.with_untracked(|p| p.form.submit_request()) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(error = %err, "car form rejected");
                show_alert(&err.to_string());
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let result = send_submit(&api.get_value(), &session, &request).await;
            if let Some(alert) = page.try_update(|p| p.finish_submit(&request, result)).flatten() {
                show_alert(alert.message());
            }
        });
    });

    let on_edit = Callback::new(move |id: CarId| {
        page.update(|p| {
            if let Some(car) = p.cars.get(id).cloned() {
                p.form.begin_edit(&car);
            }
        });
    });

    let on_delete = Callback::new(move |id: CarId| {
        let Some(session) = auth.with_untracked(|a| a.session.clone()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api.get_value().delete(&session, id).await;
            if let Some(alert) = page.try_update(|p| p.finish_delete(id, result)).flatten() {
                show_alert(alert.message());
            }
        });
    });

    let on_logout = move |_| {
        clear_stored_token();
        auth.update(AuthState::sign_out);
    };

    view! {
        <Show
            when=move || auth.with(|a| a.session.is_some())
            fallback=|| view! { <div class="home-page"><p>"Sign in to manage your cars."</p></div> }
        >
            <div class="home-page">
                <header class="home-page__header">
                    <h1>{move || auth.with(heading).unwrap_or_default()}</h1>
                    <button class="btn home-page__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>

                <CarForm form on_input on_image on_submit on_cancel/>

                <Show
                    when=move || page.with(|p| !p.cars.is_empty())
                    fallback=|| view! { <p class="home-page__empty">{EMPTY_LIST_MESSAGE}</p> }
                >
                    <ul class="home-page__cars">
                        {move || {
                            page.with(|p| api.with_value(|a| row_views(p, a.base_url())))
                                .into_iter()
                                .map(|row| view! { <CarRow row on_edit on_delete/> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </div>
        </Show>
    }
}

