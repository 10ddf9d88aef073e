//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every bounded context agrees on:
//! - The error taxonomy ([`error::kind::ErrorKind`]) and [`error::app_error::AppError`]
//! - Typed entity ids (`UserId`, `BookId`, `ReviewId`)
//! - The uniform `{status, error, data}` response envelope
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod response;
