//! Data transfer objects for the HTTP surface.
//!
//! These types define the JSON wire format of the API: request bodies, response
//! envelopes, and the composed account-detail payload. Domain models live in
//! `server::model` and are converted to DTOs at the controller boundary.

pub mod account;
pub mod api;
pub mod auth;
