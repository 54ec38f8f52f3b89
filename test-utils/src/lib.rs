//! Objekt Gacha Test Utils
//!
//! Provides shared testing utilities for the gacha engine's repository and service
//! tests. This crate offers a builder for test contexts backed by in-memory SQLite
//! databases (or a temporary SQLite file with a multi-connection pool), factories that insert rows with sensible defaults, and fixtures that
//! build entity models without touching the database.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert catalog, collection, pity and balance rows
//! - **fixture**: In-memory entity models
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_spin() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_gacha_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let objekt = factory::create_objekt(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
