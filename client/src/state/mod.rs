//! Client-side state machines and the persisted session.
//!
//! DESIGN
//! ======
//! Each machine is a plain struct with a reducer-style `update` that returns
//! effects, so it can be tested without a rendering framework. Pages hold the
//! machines in signals and run their drivers.

pub mod dashboard;
pub mod login;
pub mod session;
pub mod validation;
