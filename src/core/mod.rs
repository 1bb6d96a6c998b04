//! Core business logic layer
//!
//! Static advice tables and the pure functions that resolve them.

pub mod data;
pub mod resolver;
