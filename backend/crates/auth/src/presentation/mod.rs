//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and identity extractors.

pub mod dto;
pub mod extractor;
pub mod handlers;
pub mod router;

pub use extractor::{CurrentUser, IdentityState, MaybeUser};
pub use handlers::AuthAppState;
pub use router::{auth_router, auth_router_generic, auth_routes};
