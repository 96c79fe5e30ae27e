//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and hand domain models back to the
//! service layer. They take a borrowed `DatabaseConnection` and know nothing about the
//! store's connection state; the services resolve a live connection before building one.

pub mod voice_log;

#[cfg(test)]
mod test;
