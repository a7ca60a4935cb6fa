//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Game, Bounty, Nft)
//! - Repository traits (persistence and on-chain lookup interfaces)

pub mod entities;
pub mod repository;
