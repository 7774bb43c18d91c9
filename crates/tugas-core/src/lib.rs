//! Core types for the tugas request-ticket service.
//!
//! This crate is pure: the Request Record model, and the validator that
//! turns an untyped JSON payload into a canonical record (or a structured
//! list of field errors). No I/O, no async.

pub mod model;
pub mod validate;

pub use model::{InputPair, RequestRecord};
pub use validate::{validate_payload, FieldError, ValidationError};
