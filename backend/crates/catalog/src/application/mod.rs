//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod bounties;
pub mod games;
pub mod nfts;
pub mod token_owner;

pub use bounties::BountyUseCase;
pub use games::GameUseCase;
pub use nfts::NftUseCase;
pub use token_owner::TokenOwnerUseCase;
