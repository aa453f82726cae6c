//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod conferences;
pub mod health;
pub mod submissions;
