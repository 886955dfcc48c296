//! Domain models and operation-specific parameter types.
//!
//! The service and data layers work with these types rather than DTOs or entity
//! models. Entities are converted to domain models at the repository boundary;
//! domain models are converted to DTOs at the controller boundary.

pub mod account;
pub mod auth;
pub mod role;
