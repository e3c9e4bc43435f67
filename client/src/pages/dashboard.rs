//! Dashboard page shown to a logged-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing authenticated is rendered until `DashboardState` has checked the
//! stored session. The server always renders the neutral placeholder; the
//! check runs in a browser-only effect after hydration.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::dashboard::{DashboardPhase, DashboardState};
use crate::state::session::SessionStore;
use crate::util::nav::RouterNavigator;

/// Text for the placeholder shown while not authenticated.
pub fn placeholder_text(phase: &DashboardPhase) -> &'static str {
    match phase {
        DashboardPhase::CheckingSession => "Checking session...",
        DashboardPhase::Redirecting | DashboardPhase::Authenticated(_) => "Redirecting...",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let navigate = use_navigate();

    let mount_navigate = navigate.clone();
    Effect::new(move || {
        let navigator = RouterNavigator::new(mount_navigate.clone());
        let mut next = state.get_untracked();
        next.mount(&SessionStore::browser(), &navigator);
        let _ = state.try_set(next);
    });

    let navigate = StoredValue::new_local(navigate);
    let on_logout = move |_: leptos::ev::MouseEvent| {
        let navigator = RouterNavigator::new(navigate.get_value());
        let mut next = state.get_untracked();
        next.logout(&SessionStore::browser(), &navigator);
        let _ = state.try_set(next);
    };

    view! {
        <Show
            when=move || state.with(DashboardState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p class="dashboard-page__placeholder">
                            {move || state.with(|s| placeholder_text(&s.phase))}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <div class="dashboard-card">
                    <h1>"Welcome!"</h1>
                    <p class="dashboard-card__subtitle">"You have successfully logged in."</p>
                    <div class="dashboard-card__user">
                        <p class="dashboard-card__label">"Logged in as:"</p>
                        <p class="dashboard-card__email">
                            {move || state.with(|s| s.email().unwrap_or_default().to_owned())}
                        </p>
                    </div>
                    <button class="login-button" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </div>
        </Show>
    }
}
