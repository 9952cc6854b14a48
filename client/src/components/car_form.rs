//! Create/edit form for a single car.
//!
//! DESIGN
//! ======
//! The form owns no state. It renders the draft it is given and reports
//! every edit through callbacks, so the page controller stays the single
//! source of truth for mode and field values.

#[cfg(test)]
#[path = "car_form_test.rs"]
mod car_form_test;

use leptos::prelude::*;

use carlot::ImageUpload;
use carlot::state::form::{CarField, CarFormState, FormMode};

/// What the form renders: field text, mode and whether an image is picked.
///
/// Built instead of cloning the draft so selected image bytes are never
/// copied or compared on re-render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarFormView {
    pub mode: FormMode,
    pub make: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub has_image: bool,
}

impl CarFormView {
    pub fn new(form: &CarFormState) -> Self {
        let draft = &form.draft;
        Self {
            mode: form.mode(),
            make: draft.make.clone(),
            model: draft.model.clone(),
            year: draft.year.clone(),
            price: draft.price.clone(),
            has_image: draft.image.is_some(),
        }
    }

    pub fn field(&self, field: CarField) -> &str {
        match field {
            CarField::Make => &self.make,
            CarField::Model => &self.model,
            CarField::Year => &self.year,
            CarField::Price => &self.price,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }
}

/// HTML input type for a scalar field.
fn input_type(field: CarField) -> &'static str {
    if field.is_numeric() { "number" } else { "text" }
}

/// Prices may carry cents; years are whole numbers.
fn input_step(field: CarField) -> Option<&'static str> {
    match field {
        CarField::Price => Some("any"),
        CarField::Year => Some("1"),
        CarField::Make | CarField::Model => None,
    }
}

#[component]
pub fn CarForm(
    form: Memo<CarFormView>,
    on_input: Callback<(CarField, String)>,
    on_image: Callback<Option<ImageUpload>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let file_ref = NodeRef::<leptos::html::Input>::new();

    // The file input is uncontrolled; blank it whenever the draft drops its image.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        if form.with(|f| !f.has_image) {
            if let Some(input) = file_ref.get() {
                input.set_value("");
            }
        }
    });

    let fields = CarField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <label class="car-form__field">
                    <span class="car-form__label">{field.label()}</span>
                    <input
                        class="car-form__input"
                        name=field.name()
                        type=input_type(field)
                        step=input_step(field)
                        required=true
                        prop:value=move || form.with(|f| f.field(field).to_owned())
                        on:input=move |ev| on_input.run((field, event_target_value(&ev)))
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <form
            class="car-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <h2 class="car-form__title">{move || form.with(|f| f.mode.title())}</h2>
            {fields}
            <label class="car-form__field">
                <span class="car-form__label">"Image"</span>
                <input
                    class="car-form__input"
                    type="file"
                    name="image"
                    accept="image/*"
                    node_ref=file_ref
                    on:change=move |ev| {
                        #[cfg(feature = "csr")]
                        leptos::task::spawn_local(async move {
                            on_image.run(crate::util::browser::selected_upload(&ev).await);
                        });
                        #[cfg(not(feature = "csr"))]
                        {
                            let _ = (ev, on_image);
                        }
                    }
                />
            </label>
            <div class="car-form__actions">
                <button class="btn car-form__submit" type="submit">
                    {move || form.with(|f| f.mode.submit_label())}
                </button>
                <Show when=move || form.with(CarFormView::is_editing)>
                    <button class="btn car-form__cancel" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
