//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod delete_account;
pub(crate) mod hashing;
pub mod identify;
pub mod login;
pub mod register;
pub mod token;
pub mod update_account;

// Re-exports
pub use config::AuthConfig;
pub use delete_account::DeleteAccountUseCase;
pub use identify::IdentifyUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use token::{TokenClaims, TokenService};
pub use update_account::{UpdateAccountInput, UpdateAccountOutput, UpdateAccountUseCase};
