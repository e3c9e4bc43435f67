//! Route targets and the navigation seam used by state machine drivers.
//!
//! SYSTEM CONTEXT
//! ==============
//! State machines emit `Navigate(AppRoute)` effects. Drivers hand those to a
//! `Navigator`, which in the running app wraps the router's navigate function.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[cfg(test)]
use std::cell::RefCell;

use leptos_router::NavigateOptions;

/// The two screens of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Dashboard,
}

impl AppRoute {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Something that can move the user to another route.
pub trait Navigator {
    fn push(&self, route: AppRoute);
}

/// Navigator backed by a `leptos_router` navigate function.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn push(&self, route: AppRoute) {
        log::debug!("navigating to {}", route.path());
        (self.navigate)(route.path(), NavigateOptions::default());
    }
}

/// Test navigator that records every push.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub pushed: RefCell<Vec<AppRoute>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn routes(&self) -> Vec<AppRoute> {
        self.pushed.borrow().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn push(&self, route: AppRoute) {
        self.pushed.borrow_mut().push(route);
    }
}
