//! Discord bot integration.
//!
//! The bot listens for voice state changes to build the voice activity log and serves the
//! slash commands. It runs on the main task; `main` races it against Ctrl-C and tears the
//! store down afterwards.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, channel names for the cache
//! - `GUILD_VOICE_STATES` - Voice channel joins, leaves and moves
//! - `GUILD_MEMBERS` - Member display names for the log (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled in the
//! Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
