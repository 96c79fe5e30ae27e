//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each
//! factory exposes a builder for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let row = factory::voice_log::create_voice_log(&db).await?;
//!
//! let leave = factory::voice_log::VoiceLogFactory::new(&db)
//!     .leave(42, "Lobby")
//!     .guild(7, "Guild")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod voice_log;

pub use voice_log::create_voice_log;
