//! # warden_core
//!
//! Core domain logic for Warden.

pub mod auth;
pub mod cache;
pub mod metrics;
pub mod migrate;
pub mod models;
pub mod users;
