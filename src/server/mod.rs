//! HTTP layer for the number counting API.
//!
//! Axum-based: the router wires three GET endpoints onto the pure classifier
//! in [`crate::core`]. Handlers hold no state; every request is classified
//! independently, so the service is safely concurrent without locks.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use error::AppError;
pub use router::create_router;
