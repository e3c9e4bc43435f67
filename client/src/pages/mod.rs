//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns a state machine from `state` and wires it to the router and
//! browser storage; rendering details live in `components`.

pub mod dashboard;
pub mod login;
