//! HTTP route handlers

pub mod health;
pub mod templates;
