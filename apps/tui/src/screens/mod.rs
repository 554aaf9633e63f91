//! TUI screen definitions.
//!
//! The application has a single form screen; it owns the in-progress
//! profile and hands a finished copy to the generator on submit.

mod form;

pub(crate) use form::{FormAction, FormScreen};
