//! Accounts: the `User` entity, its validated fields and the store trait.

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::user::{AccountChange, User};
pub use repository::UserRepository;
