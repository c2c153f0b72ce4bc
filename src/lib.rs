//! Terminal contact form.
//!
//! Collects a [`form::ContactSubmission`], validates it locally and relays
//! it to an external form-collection endpoint. See [`submit`] for why a
//! successful relay is only a best-effort signal.

pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod submit;
pub mod ui;
