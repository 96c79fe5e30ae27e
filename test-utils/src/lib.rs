//! Tyr Test Utils
//!
//! Provides shared testing utilities for the bot's repository and service tests. This crate
//! offers a builder pattern for creating test contexts with in-memory SQLite databases, plus
//! fixtures and factories for voice log rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models, nothing is inserted
//! - **factory**: Builders that insert rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::VoiceLog;
//!
//! #[tokio::test]
//! async fn test_voice_log_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(VoiceLog)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
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
