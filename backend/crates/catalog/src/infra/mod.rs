//! Infrastructure Layer
//!
//! PostgreSQL repositories and the Tron-backed ownership lookup.

pub mod postgres;
pub mod tron;
