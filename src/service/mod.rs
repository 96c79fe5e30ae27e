//! Service layer between the bot and the repositories.
//!
//! Services resolve a live connection from the [`Store`](crate::store::Store), call the
//! repositories and decide what gets logged. They never talk to Discord directly.

pub mod map_rotation;
pub mod voice_log;
