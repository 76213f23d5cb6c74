//! Free-text handling for user-entered meeting fields.

pub mod sanitize;
