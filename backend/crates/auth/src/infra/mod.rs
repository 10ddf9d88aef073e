//! Postgres-backed user store

pub mod postgres;

pub use postgres::PgAuthRepository;
