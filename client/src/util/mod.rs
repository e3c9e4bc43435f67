//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! routing) from state machine and page logic.

pub mod clock;
pub mod nav;
pub mod storage;
