//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Random secret generation
//! - Password hashing (Argon2id)
//! - Bearer token extraction from request headers

pub mod bearer;
pub mod crypto;
pub mod password;
