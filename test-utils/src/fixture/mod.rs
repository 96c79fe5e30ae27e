//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of entity-to-domain conversion and as default values for factory builders.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let row = fixture::voice_log::entity();
//!
//! let leave = fixture::voice_log::entity_builder()
//!     .action("leave")
//!     .new_channel(None)
//!     .build();
//! ```

pub mod voice_log;

pub use voice_log::{entity as voice_log_entity, entity_builder as voice_log_entity_builder};
