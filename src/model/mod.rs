//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so the
//! service layer and the bot never see SeaORM structures. Discord snowflakes are `u64`
//! here and strings in the database.

pub mod map_rotation;
pub mod voice;
pub mod voice_log;
