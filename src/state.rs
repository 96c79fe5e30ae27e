//! Application state shared with the Discord event handler.
//!
//! Built once in `main` after configuration is loaded and cloned into the serenity
//! handler. Every field is cheap to clone: the store and the HTTP client are reference
//! counted internally.

use std::time::Instant;

use crate::{service::map_rotation::MapRotationService, store::Store};

#[derive(Clone)]
pub struct AppState {
    /// Voice log store, possibly disabled or disconnected.
    pub store: Store,

    /// Map rotation client used by `apexmap`.
    pub map_rotation: MapRotationService,

    /// Process start, reported as uptime by `info`.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: Store, map_rotation: MapRotationService) -> Self {
        Self {
            store,
            map_rotation,
            started_at: Instant::now(),
        }
    }
}
