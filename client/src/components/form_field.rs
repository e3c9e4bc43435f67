//! Labelled text input with an inline validation message.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

/// CSS class for an input, switching to the error style when a message is shown.
pub fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-field__input form-field__input--error" } else { "form-field__input" }
}

#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    error: Signal<Option<&'static str>>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>
                {label}
            </label>
            <input
                id=id
                class=move || input_class(error.get().is_some())
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
