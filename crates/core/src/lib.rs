//! Shared domain types and the error taxonomy for the Spy Cat Agency.

pub mod error;
pub mod types;
