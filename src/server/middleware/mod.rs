//! Request/response processing: authentication guards and session-cookie plumbing.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
