//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Seed the closed role set, then create with defaults
//!     factory::role::seed_roles(&db).await?;
//!     let account = factory::account::create_account(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::account::AccountFactory;
//!
//! let account = AccountFactory::new(&db)
//!     .login("vermeer")
//!     .email("vermeer@example.com")
//!     .role_id(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `role` - Seed the closed role set (admin/operator/basic)
//! - `account` - Create account entities
//! - `operator` - Create operator (contractor) profiles
//! - `client` - Create client (author) profiles
//! - `commission` - Create commissions between a client and an operator
//! - `image` - Create avatar images for accounts
//! - `statistics` - Create usage statistics rows for accounts
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod account;
pub mod client;
pub mod commission;
pub mod helpers;
pub mod image;
pub mod operator;
pub mod role;
pub mod statistics;

// Re-export commonly used factory functions for concise usage
pub use account::create_account;
pub use client::create_client;
pub use commission::create_commission;
pub use image::create_image;
pub use operator::create_operator;
pub use role::seed_roles;
pub use statistics::create_statistics;
