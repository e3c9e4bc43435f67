//! Login form state machine.
//!
//! DESIGN
//! ======
//! `LoginState::update` is a pure reducer: it applies one event and returns
//! the effects the caller must perform. `mount` and `submit` are the drivers
//! that run those effects against a session store and a navigator.
//!
//! ```text
//! Idle ──Submit──▶ Validating ──errors──▶ Invalid ──edit/submit──▶ ...
//!                      │
//!                      └──ok──▶ Submitting ──Settled(ok)──▶ Redirected
//!                                   └────────Settled(err)──▶ Idle
//! ```
//!
//! A mount with an active session goes straight to `Redirected`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::state::session::{SessionError, SessionRecord, SessionStore};
use crate::state::validation::{self, Field, FieldErrors};
use crate::util::nav::{AppRoute, Navigator};
use crate::util::storage::KeyValueStorage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Redirected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    /// The page mounted; `session_active` is the result of the store check.
    Mounted { session_active: bool },
    Edited { field: Field, value: String },
    Submit,
    /// Validator output for the submitted values, stamped with the submit time.
    Validated { errors: FieldErrors, timestamp: String },
    /// The persist + navigate sequence finished, successfully or not.
    Settled { persisted: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEffect {
    Validate { email: String, password: String },
    Persist(SessionRecord),
    Navigate(AppRoute),
}

/// Everything the login page renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub phase: LoginPhase,
}

impl LoginState {
    /// Submit control is disabled and shows the busy label.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Apply `event` and return the effects to run, in order.
    #[must_use]
    pub fn update(&mut self, event: LoginEvent) -> Vec<LoginEffect> {
        match event {
            LoginEvent::Mounted { session_active } => {
                if session_active && self.phase == LoginPhase::Idle {
                    self.phase = LoginPhase::Redirected;
                    return vec![LoginEffect::Navigate(AppRoute::Dashboard)];
                }
                Vec::new()
            }
            LoginEvent::Edited { field, value } => {
                match field {
                    Field::Email => self.email = value,
                    Field::Password => self.password = value,
                }
                self.errors.clear(field);
                if self.phase == LoginPhase::Invalid && self.errors.is_empty() {
                    self.phase = LoginPhase::Idle;
                }
                Vec::new()
            }
            LoginEvent::Submit => {
                if !matches!(self.phase, LoginPhase::Idle | LoginPhase::Invalid) {
                    return Vec::new();
                }
                self.phase = LoginPhase::Validating;
                vec![LoginEffect::Validate { email: self.email.clone(), password: self.password.clone() }]
            }
            LoginEvent::Validated { errors, timestamp } => {
                if self.phase != LoginPhase::Validating {
                    return Vec::new();
                }
                self.errors = errors;
                if !errors.is_empty() {
                    self.phase = LoginPhase::Invalid;
                    return Vec::new();
                }
                self.phase = LoginPhase::Submitting;
                vec![
                    LoginEffect::Persist(SessionRecord::logged_in(self.email.clone(), timestamp)),
                    LoginEffect::Navigate(AppRoute::Dashboard),
                ]
            }
            LoginEvent::Settled { persisted } => {
                if self.phase == LoginPhase::Submitting {
                    self.phase = if persisted { LoginPhase::Redirected } else { LoginPhase::Idle };
                }
                Vec::new()
            }
        }
    }

    /// Redirect away from the form when a session already exists.
    pub fn mount<S, N>(&mut self, store: &SessionStore<S>, navigator: &N)
    where
        S: KeyValueStorage,
        N: Navigator,
    {
        let session_active = store.read().is_some();
        for effect in self.update(LoginEvent::Mounted { session_active }) {
            if let LoginEffect::Navigate(route) = effect {
                navigator.push(route);
            }
        }
    }

    /// Validate the form and, if valid, persist the session and navigate.
    ///
    /// The busy phase is always settled once a persist is attempted, whether
    /// or not the write succeeds.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the session could not be written. The
    /// state is back to `Idle` in that case and no navigation happened.
    pub fn submit<S, N>(
        &mut self,
        store: &SessionStore<S>,
        navigator: &N,
        now: impl FnOnce() -> String,
    ) -> Result<(), SessionError>
    where
        S: KeyValueStorage,
        N: Navigator,
    {
        let mut pending = self.update(LoginEvent::Submit);
        let mut now = Some(now);
        let mut outcome: Option<Result<(), SessionError>> = None;

        while !pending.is_empty() {
            let mut next = Vec::new();
            for effect in pending {
                match effect {
                    LoginEffect::Validate { email, password } => {
                        let errors = validation::validate(&email, &password);
                        let timestamp = if errors.is_empty() {
                            now.take().map(|f| f()).unwrap_or_default()
                        } else {
                            String::new()
                        };
                        next.extend(self.update(LoginEvent::Validated { errors, timestamp }));
                    }
                    LoginEffect::Persist(record) => {
                        if let Err(e) = store.write(&record) {
                            outcome = Some(Err(e));
                            break;
                        }
                        outcome = Some(Ok(()));
                    }
                    LoginEffect::Navigate(route) => navigator.push(route),
                }
            }
            pending = next;
        }

        match outcome {
            Some(result) => {
                let _ = self.update(LoginEvent::Settled { persisted: result.is_ok() });
                result
            }
            None => Ok(()),
        }
    }
}
