use super::*;
use crate::state::validation::{EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_REQUIRED, PASSWORD_TOO_SHORT};
use crate::util::nav::RecordingNavigator;
use crate::util::storage::MemoryStorage;

const NOW: &str = "2026-10-19T07:26:00.000Z";

fn now() -> String {
    NOW.to_owned()
}

fn filled(email: &str, password: &str) -> LoginState {
    LoginState { email: email.to_owned(), password: password.to_owned(), ..LoginState::default() }
}

// =============================================================
// Reducer
// =============================================================

#[test]
fn default_state_is_idle_and_not_busy() {
    let state = LoginState::default();
    assert_eq!(state.phase, LoginPhase::Idle);
    assert!(!state.is_busy());
    assert!(state.errors.is_empty());
}

#[test]
fn mounted_with_active_session_redirects() {
    let mut state = LoginState::default();
    let effects = state.update(LoginEvent::Mounted { session_active: true });
    assert_eq!(state.phase, LoginPhase::Redirected);
    assert_eq!(effects, vec![LoginEffect::Navigate(AppRoute::Dashboard)]);
}

#[test]
fn mounted_without_session_stays_idle() {
    let mut state = LoginState::default();
    let effects = state.update(LoginEvent::Mounted { session_active: false });
    assert_eq!(state.phase, LoginPhase::Idle);
    assert!(effects.is_empty());
}

#[test]
fn submit_enters_validating_with_current_values() {
    let mut state = filled("a@b.com", "secret1");
    let effects = state.update(LoginEvent::Submit);
    assert_eq!(state.phase, LoginPhase::Validating);
    assert_eq!(
        effects,
        vec![LoginEffect::Validate { email: "a@b.com".to_owned(), password: "secret1".to_owned() }]
    );
}

#[test]
fn validated_with_errors_enters_invalid_without_effects() {
    let mut state = filled("", "");
    let _ = state.update(LoginEvent::Submit);
    let effects = state.update(LoginEvent::Validated { errors: validation::validate("", ""), timestamp: now() });
    assert_eq!(state.phase, LoginPhase::Invalid);
    assert_eq!(state.errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(state.errors.password, Some(PASSWORD_REQUIRED));
    assert!(effects.is_empty());
}

#[test]
fn validated_clean_enters_submitting_and_requests_persist_then_navigate() {
    let mut state = filled("a@b.com", "secret1");
    let _ = state.update(LoginEvent::Submit);
    let effects = state.update(LoginEvent::Validated { errors: FieldErrors::default(), timestamp: now() });
    assert_eq!(state.phase, LoginPhase::Submitting);
    assert!(state.is_busy());
    assert_eq!(
        effects,
        vec![
            LoginEffect::Persist(SessionRecord::logged_in("a@b.com", NOW)),
            LoginEffect::Navigate(AppRoute::Dashboard),
        ]
    );
}

#[test]
fn settled_clears_busy_state() {
    let mut ok = filled("a@b.com", "secret1");
    ok.phase = LoginPhase::Submitting;
    let _ = ok.update(LoginEvent::Settled { persisted: true });
    assert_eq!(ok.phase, LoginPhase::Redirected);
    assert!(!ok.is_busy());

    let mut failed = filled("a@b.com", "secret1");
    failed.phase = LoginPhase::Submitting;
    let _ = failed.update(LoginEvent::Settled { persisted: false });
    assert_eq!(failed.phase, LoginPhase::Idle);
    assert!(!failed.is_busy());
}

#[test]
fn submit_is_ignored_while_submitting_or_redirected() {
    for phase in [LoginPhase::Submitting, LoginPhase::Redirected, LoginPhase::Validating] {
        let mut state = filled("a@b.com", "secret1");
        state.phase = phase;
        assert!(state.update(LoginEvent::Submit).is_empty());
        assert_eq!(state.phase, phase);
    }
}

#[test]
fn editing_clears_only_that_fields_error() {
    let mut state = filled("", "");
    state.errors = validation::validate("", "");
    state.phase = LoginPhase::Invalid;

    let _ = state.update(LoginEvent::Edited { field: Field::Email, value: "x".to_owned() });
    assert_eq!(state.email, "x");
    assert_eq!(state.errors.email, None);
    assert_eq!(state.errors.password, Some(PASSWORD_REQUIRED));
    assert_eq!(state.phase, LoginPhase::Invalid);
}

#[test]
fn field_accessors_track_values_and_errors() {
    let mut state = filled("a@b", "abc");
    state.errors = validation::validate("a@b", "abc");
    assert_eq!(state.value(Field::Email), "a@b");
    assert_eq!(state.errors.get(Field::Email), Some(EMAIL_INVALID));
    assert_eq!(state.errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));

    let _ = state.update(LoginEvent::Edited { field: Field::Password, value: "secret1".to_owned() });
    assert_eq!(state.value(Field::Password), "secret1");
    assert_eq!(state.errors.get(Field::Password), None);
    assert_eq!(state.errors.get(Field::Email), Some(EMAIL_INVALID));
}

#[test]
fn editing_does_not_revalidate() {
    let mut state = LoginState::default();
    let _ = state.update(LoginEvent::Edited { field: Field::Email, value: "not-an-email".to_owned() });
    assert!(state.errors.is_empty());
    assert_eq!(state.phase, LoginPhase::Idle);
}

#[test]
fn clearing_last_error_returns_to_idle() {
    let mut state = filled("", "abc");
    state.errors = validation::validate("", "abc");
    state.phase = LoginPhase::Invalid;

    let _ = state.update(LoginEvent::Edited { field: Field::Email, value: "a@b.com".to_owned() });
    assert_eq!(state.phase, LoginPhase::Invalid);
    let _ = state.update(LoginEvent::Edited { field: Field::Password, value: "abcdef".to_owned() });
    assert_eq!(state.phase, LoginPhase::Idle);
    assert_eq!(state.value(Field::Password), "abcdef");
}

// =============================================================
// Drivers
// =============================================================

#[test]
fn mount_with_stored_session_navigates_to_dashboard() {
    let store = SessionStore::new(MemoryStorage::new());
    store.write(&SessionRecord::logged_in("a@b.com", NOW)).unwrap();
    let navigator = RecordingNavigator::default();

    let mut state = LoginState::default();
    state.mount(&store, &navigator);

    assert_eq!(state.phase, LoginPhase::Redirected);
    assert_eq!(navigator.routes(), vec![AppRoute::Dashboard]);
}

#[test]
fn mount_with_logged_out_record_shows_form() {
    let store = SessionStore::new(MemoryStorage::new());
    store
        .write(&SessionRecord { email: "a@b.com".to_owned(), is_logged_in: false, timestamp: NOW.to_owned() })
        .unwrap();
    let navigator = RecordingNavigator::default();

    let mut state = LoginState::default();
    state.mount(&store, &navigator);

    assert_eq!(state.phase, LoginPhase::Idle);
    assert!(navigator.routes().is_empty());
}

#[test]
fn submit_valid_credentials_persists_and_navigates() {
    let store = SessionStore::new(MemoryStorage::new());
    let navigator = RecordingNavigator::default();
    let mut state = filled("user@example.com", "secret1");

    state.submit(&store, &navigator, now).unwrap();

    assert!(state.errors.is_empty());
    assert_eq!(state.phase, LoginPhase::Redirected);
    assert!(!state.is_busy());
    assert_eq!(store.read(), Some(SessionRecord::logged_in("user@example.com", NOW)));
    assert_eq!(navigator.routes(), vec![AppRoute::Dashboard]);
}

#[test]
fn submit_empty_form_reports_errors_without_side_effects() {
    let store = SessionStore::new(MemoryStorage::new());
    let navigator = RecordingNavigator::default();
    let mut state = LoginState::default();

    state.submit(&store, &navigator, now).unwrap();

    assert_eq!(state.phase, LoginPhase::Invalid);
    assert_eq!(state.errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(state.errors.password, Some(PASSWORD_REQUIRED));
    assert!(store.storage().is_empty());
    assert!(navigator.routes().is_empty());
}

#[test]
fn submit_mixed_errors_reports_each_field() {
    let store = SessionStore::new(MemoryStorage::new());
    let navigator = RecordingNavigator::default();
    let mut state = filled("a@b", "abc");

    state.submit(&store, &navigator, now).unwrap();

    assert_eq!(state.errors.email, Some(EMAIL_INVALID));
    assert_eq!(state.errors.password, Some(PASSWORD_TOO_SHORT));
    assert!(store.storage().is_empty());
}

#[test]
fn resubmit_after_fixing_errors_succeeds() {
    let store = SessionStore::new(MemoryStorage::new());
    let navigator = RecordingNavigator::default();
    let mut state = filled("a@b", "secret1");

    state.submit(&store, &navigator, now).unwrap();
    assert_eq!(state.phase, LoginPhase::Invalid);

    let _ = state.update(LoginEvent::Edited { field: Field::Email, value: "a@b.com".to_owned() });
    state.submit(&store, &navigator, now).unwrap();

    assert_eq!(state.phase, LoginPhase::Redirected);
    assert_eq!(store.read().map(|r| r.email), Some("a@b.com".to_owned()));
}

#[test]
fn submit_with_rejected_write_settles_without_navigating() {
    let store = SessionStore::new(MemoryStorage::rejecting_writes());
    let navigator = RecordingNavigator::default();
    let mut state = filled("user@example.com", "secret1");

    let err = state.submit(&store, &navigator, now).unwrap_err();

    assert!(matches!(err, SessionError::Storage(_)));
    assert_eq!(state.phase, LoginPhase::Idle);
    assert!(!state.is_busy());
    assert!(state.errors.is_empty());
    assert!(navigator.routes().is_empty());
}

#[test]
fn submit_does_not_read_clock_when_invalid() {
    let store = SessionStore::new(MemoryStorage::new());
    let navigator = RecordingNavigator::default();
    let mut state = LoginState::default();
    let mut called = false;

    state
        .submit(&store, &navigator, || {
            called = true;
            now()
        })
        .unwrap();

    assert!(!called);
    assert_eq!(state.phase, LoginPhase::Invalid);
}
