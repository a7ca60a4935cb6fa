//! Infrastructure Layer
//!
//! PostgreSQL repository and the payment transaction verifiers.

pub mod postgres;
pub mod verifier;

pub use postgres::PgCommerceRepository;
pub use verifier::{AutomatedVerifier, ConfiguredVerifier, TronVerifier, VerificationMode};
