//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod profile;
pub mod register;

// Re-exports
pub use config::AccountConfig;
pub use login::{LoginInput, LoginUseCase};
pub use profile::{ListUsersUseCase, OwnedNftsUseCase, PurchasedGamesUseCase};
pub use register::{RegisterInput, RegisterUseCase};
