//! Login page: email + password form backed by `LoginState`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Redirects to the dashboard on mount when a session is already stored. On a
//! valid submit the session is written to local storage and the router moves
//! to `/dashboard`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::state::login::{LoginEvent, LoginState};
use crate::state::session::SessionStore;
use crate::state::validation::Field;
use crate::util::clock;
use crate::util::nav::RouterNavigator;

pub const SUBMIT_LABEL: &str = "Login";
pub const SUBMIT_BUSY_LABEL: &str = "Logging in...";

pub fn submit_label(busy: bool) -> &'static str {
    if busy { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = RwSignal::new(LoginState::default());
    let navigate = use_navigate();

    // Effects only run in the browser, after hydration.
    let mount_navigate = navigate.clone();
    Effect::new(move || {
        let navigator = RouterNavigator::new(mount_navigate.clone());
        let mut next = state.get_untracked();
        next.mount(&SessionStore::browser(), &navigator);
        let _ = state.try_set(next);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigator = RouterNavigator::new(navigate.clone());
        let mut next = state.get_untracked();
        if let Err(e) = next.submit(&SessionStore::browser(), &navigator, clock::now_iso) {
            log::error!("login failed to persist session: {e}");
        }
        let _ = state.try_set(next);
    };

    let edit = move |field: Field| {
        Callback::new(move |value: String| {
            state.update(|s| {
                let _ = s.update(LoginEvent::Edited { field, value });
            });
        })
    };

    let value = move |field: Field| Signal::derive(move || state.with(|s| s.value(field).to_owned()));
    let error = move |field: Field| Signal::derive(move || state.with(|s| s.errors.get(field)));
    let busy = move || state.with(LoginState::is_busy);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <p class="login-card__subtitle">"Enter your credentials to access your dashboard"</p>
                <form class="login-form" novalidate=true on:submit=on_submit>
                    <FormField
                        id="email"
                        label="Email Address"
                        input_type="email"
                        placeholder="you@example.com"
                        value=value(Field::Email)
                        error=error(Field::Email)
                        on_input=edit(Field::Email)
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="••••••"
                        value=value(Field::Password)
                        error=error(Field::Password)
                        on_input=edit(Field::Password)
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || submit_label(busy())}
                    </button>
                </form>
            </div>
        </div>
    }
}
