//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Book, Review, BookVolume)
//! - Domain value objects (Rating, ReadingStatus, read dates, Page)
//! - Domain services (ownership guard, calendar buckets, pagination)
//! - Repository and lookup traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
