//! Reusable presentational components shared by pages.

pub mod form_field;
