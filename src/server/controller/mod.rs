//! HTTP request handlers.
//!
//! Controllers are thin: they convert request DTOs into parameter models, call
//! one service, and convert the result back into a response DTO. All failures
//! propagate as `AppError` and are translated at the response boundary.

pub mod account;
pub mod auth;
