//! Dashboard route guard and logout flow.
//!
//! DESIGN
//! ======
//! The dashboard starts in `CheckingSession` and resolves exactly once, to
//! `Authenticated` when the store holds an active record or to `Redirecting`
//! otherwise. Logout is only meaningful from `Authenticated`; it clears the
//! store and heads back to the login route.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::state::session::{SessionRecord, SessionStore};
use crate::util::nav::{AppRoute, Navigator};
use crate::util::storage::KeyValueStorage;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DashboardPhase {
    #[default]
    CheckingSession,
    Redirecting,
    Authenticated(SessionRecord),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Result of reading the session store on mount.
    Checked(Option<SessionRecord>),
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardEffect {
    ClearSession,
    Navigate(AppRoute),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub phase: DashboardPhase,
}

impl DashboardState {
    /// Email of the authenticated user, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match &self.phase {
            DashboardPhase::Authenticated(record) => Some(&record.email),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, DashboardPhase::Authenticated(_))
    }

    #[must_use]
    pub fn update(&mut self, event: DashboardEvent) -> Vec<DashboardEffect> {
        match event {
            DashboardEvent::Checked(record) => {
                if self.phase != DashboardPhase::CheckingSession {
                    return Vec::new();
                }
                match record.filter(SessionRecord::is_active) {
                    Some(record) => {
                        self.phase = DashboardPhase::Authenticated(record);
                        Vec::new()
                    }
                    None => {
                        self.phase = DashboardPhase::Redirecting;
                        vec![DashboardEffect::Navigate(AppRoute::Login)]
                    }
                }
            }
            DashboardEvent::Logout => {
                if !self.is_authenticated() {
                    return Vec::new();
                }
                self.phase = DashboardPhase::Redirecting;
                vec![DashboardEffect::ClearSession, DashboardEffect::Navigate(AppRoute::Login)]
            }
        }
    }

    /// Resolve the session check against `store`.
    pub fn mount<S, N>(&mut self, store: &SessionStore<S>, navigator: &N)
    where
        S: KeyValueStorage,
        N: Navigator,
    {
        let effects = self.update(DashboardEvent::Checked(store.read()));
        run_effects(effects, store, navigator);
    }

    /// Clear the session and return to the login route.
    pub fn logout<S, N>(&mut self, store: &SessionStore<S>, navigator: &N)
    where
        S: KeyValueStorage,
        N: Navigator,
    {
        let effects = self.update(DashboardEvent::Logout);
        run_effects(effects, store, navigator);
    }
}

fn run_effects<S, N>(effects: Vec<DashboardEffect>, store: &SessionStore<S>, navigator: &N)
where
    S: KeyValueStorage,
    N: Navigator,
{
    for effect in effects {
        match effect {
            DashboardEffect::ClearSession => store.clear(),
            DashboardEffect::Navigate(route) => navigator.push(route),
        }
    }
}
