//! Shared helpers for validating user-supplied parameters.

pub mod validation;
