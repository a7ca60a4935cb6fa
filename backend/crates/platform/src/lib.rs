//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, Base64, Base58Check)
//! - Password hashing (Argon2id with optional pepper)
//! - Tron full-node HTTP client (contract reads, transaction receipts)

pub mod crypto;
pub mod password;
pub mod tron;
