//! Request handlers.

pub mod admin;
