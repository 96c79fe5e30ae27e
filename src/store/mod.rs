//! Connection manager for the voice log store.
//!
//! `Store` owns the SeaORM connection pool together with an explicit connection state
//! machine. Every voice log operation goes through [`Store::ensure_connection`] first, so a
//! database outage degrades voice logging instead of taking the bot down:
//!
//! ```text
//! Disconnected --connect--> Connecting --ok--> Connected
//!      ^                        |                  |
//!      +---------failed---------+          ping failed (heartbeat)
//!      |                                           v
//!      +------------exhausted------------- Backoff(1..=max)
//! ```
//!
//! The state lives behind a `parking_lot::RwLock` that is never held across an await. Pool
//! creation is serialized by an async mutex so concurrent callers never open parallel pools.

pub mod schema;

use std::sync::Arc;

use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tokio::sync::Mutex;

use crate::{config::StoreConfig, error::store::StoreError};

/// Connection lifecycle of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    /// A reconnect loop is running, holding the current attempt number.
    Backoff(u32),
}

impl ConnectionState {
    /// Human readable state for the `dbstatus` command.
    pub fn describe(&self) -> String {
        match self {
            Self::Disconnected => "Disconnected".to_string(),
            Self::Connecting => "Connecting".to_string(),
            Self::Connected => "Connected".to_string(),
            Self::Backoff(attempt) => format!("Reconnecting (attempt {})", attempt),
        }
    }
}

/// Snapshot returned by [`Store::connection_info`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub state: ConnectionState,
    pub description: String,
    pub reconnect_attempts: u32,
    pub heartbeat_active: bool,
}

struct StoreStatus {
    db: Option<DatabaseConnection>,
    state: ConnectionState,
    reconnect_attempts: u32,
    heartbeat_active: bool,
}

struct StoreInner {
    config: StoreConfig,
    status: RwLock<StoreStatus>,
    connect_lock: Mutex<()>,
}

/// Shared handle to the voice log store.
///
/// Clones share the same pool and state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Creates a disconnected store, call [`Store::connect`] to open the pool.
    pub fn new(config: StoreConfig) -> Self {
        Self::from_parts(config, None, ConnectionState::Disconnected)
    }

    /// Wraps an already open connection, used by tests with in-memory SQLite.
    ///
    /// The store has no URL to reconnect with, once disconnected it reports `Disabled`.
    pub fn with_connection(db: DatabaseConnection) -> Self {
        Self::from_parts(StoreConfig::new(None), Some(db), ConnectionState::Connected)
    }

    fn from_parts(
        config: StoreConfig,
        db: Option<DatabaseConnection>,
        state: ConnectionState,
    ) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                config,
                status: RwLock::new(StoreStatus {
                    db,
                    state,
                    reconnect_attempts: 0,
                    heartbeat_active: false,
                }),
                connect_lock: Mutex::new(()),
            }),
        }
    }

    /// Opens the pool and makes sure the schema exists.
    ///
    /// # Returns
    /// - `Ok(())` - The store is connected, or already was
    /// - `Err(StoreError::Disabled)` - No database URL is configured
    /// - `Err(StoreError::Database)` - The pool or the schema setup failed
    pub async fn connect(&self) -> Result<(), StoreError> {
        let _guard = self.inner.connect_lock.lock().await;

        if self.is_connected() {
            return Ok(());
        }

        let Some(url) = self.inner.config.database_url.as_deref() else {
            tracing::warn!("DATABASE_URL is not set, voice logging disabled");
            return Err(StoreError::Disabled);
        };

        self.set_state(ConnectionState::Connecting);
        tracing::info!("Connecting to voice log store");

        match self.open(url).await {
            Ok(()) => {
                tracing::info!("Voice log store connected");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to connect to voice log store: {}", e);
                self.mark_connect_failed();
                Err(StoreError::Database(e))
            }
        }
    }

    /// Closes the pool and stops reporting the heartbeat.
    pub async fn disconnect(&self) {
        let db = {
            let mut status = self.inner.status.write();
            status.state = ConnectionState::Disconnected;
            status.heartbeat_active = false;
            status.db.take()
        };

        if let Some(db) = db {
            if let Err(e) = db.close().await {
                tracing::warn!("Error while closing voice log store: {}", e);
            }
            tracing::info!("Voice log store disconnected");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.inner.status.read().state == ConnectionState::Connected
    }

    /// Whether a database URL was configured at all.
    pub fn is_enabled(&self) -> bool {
        self.inner.config.database_url.is_some() || self.inner.status.read().db.is_some()
    }

    pub fn state(&self) -> ConnectionState {
        self.inner.status.read().state
    }

    /// Gate awaited before every store operation.
    ///
    /// Returns immediately while connected. While a reconnect loop is running it reports
    /// `false` without starting a parallel attempt. When disconnected it tries one connect.
    pub async fn ensure_connection(&self) -> bool {
        match self.state() {
            ConnectionState::Connected => true,
            ConnectionState::Connecting | ConnectionState::Backoff(_) => false,
            ConnectionState::Disconnected => {
                if self.inner.config.database_url.is_none() {
                    return false;
                }
                self.connect().await.is_ok()
            }
        }
    }

    /// Returns a pooled connection handle, connecting first if needed.
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - Connected pool handle
    /// - `Err(StoreError::Disabled)` - No database URL is configured
    /// - `Err(StoreError::Unavailable)` - The store could not be reached
    pub async fn database(&self) -> Result<DatabaseConnection, StoreError> {
        if !self.ensure_connection().await {
            return Err(if self.is_enabled() {
                StoreError::Unavailable
            } else {
                StoreError::Disabled
            });
        }

        let status = self.inner.status.read();
        match (&status.state, &status.db) {
            (ConnectionState::Connected, Some(db)) => Ok(db.clone()),
            _ => Err(StoreError::Unavailable),
        }
    }

    /// Retries the connection with a linearly growing delay.
    ///
    /// Attempt `n` waits `reconnect_interval * n` before connecting. Gives up after
    /// `max_reconnect_attempts` and leaves the store `Disconnected`.
    ///
    /// # Returns
    /// - `true` - The store is connected again
    /// - `false` - Every attempt failed, or the store has no URL
    pub async fn reconnect(&self) -> bool {
        let Some(url) = self.inner.config.database_url.as_deref() else {
            return false;
        };
        let max_attempts = self.inner.config.max_reconnect_attempts;

        for attempt in 1..=max_attempts {
            {
                let mut status = self.inner.status.write();
                if status.state == ConnectionState::Connected {
                    return true;
                }
                status.state = ConnectionState::Backoff(attempt);
                status.reconnect_attempts = attempt;
            }

            let delay = self.inner.config.reconnect_interval * attempt;
            tracing::warn!(
                "Reconnecting to voice log store in {:?} (attempt {}/{})",
                delay,
                attempt,
                max_attempts
            );
            tokio::time::sleep(delay).await;

            let _guard = self.inner.connect_lock.lock().await;
            match self.open(url).await {
                Ok(()) => {
                    tracing::info!("Voice log store reconnected after {} attempt(s)", attempt);
                    return true;
                }
                Err(e) => {
                    tracing::warn!("Reconnect attempt {} failed: {}", attempt, e);
                }
            }
        }

        tracing::error!(
            "Giving up on voice log store after {} reconnect attempts",
            max_attempts
        );
        self.set_state(ConnectionState::Disconnected);

        false
    }

    /// Pings the pool, called by the heartbeat job.
    ///
    /// A failed ping on a connected store marks it `Disconnected` and spawns
    /// [`Store::reconnect`]. A successful ping on a store not marked connected restores it.
    pub async fn heartbeat(&self) {
        let (state, db) = {
            let status = self.inner.status.read();
            (status.state, status.db.clone())
        };

        if matches!(
            state,
            ConnectionState::Connecting | ConnectionState::Backoff(_)
        ) {
            return;
        }
        let Some(db) = db else {
            return;
        };

        match db.ping().await {
            Ok(()) => {
                if state != ConnectionState::Connected {
                    let mut status = self.inner.status.write();
                    status.state = ConnectionState::Connected;
                    status.reconnect_attempts = 0;
                    tracing::info!("Voice log store heartbeat succeeded, connection restored");
                }
            }
            Err(e) if state == ConnectionState::Connected => {
                tracing::warn!("Voice log store heartbeat failed: {}", e);
                self.set_state(ConnectionState::Disconnected);

                let store = self.clone();
                tokio::spawn(async move {
                    store.reconnect().await;
                });
            }
            Err(e) => {
                tracing::debug!("Voice log store still unreachable: {}", e);
            }
        }
    }

    pub fn set_heartbeat_active(&self, active: bool) {
        self.inner.status.write().heartbeat_active = active;
    }

    pub fn connection_info(&self) -> ConnectionInfo {
        let status = self.inner.status.read();

        ConnectionInfo {
            state: status.state,
            description: status.state.describe(),
            reconnect_attempts: status.reconnect_attempts,
            heartbeat_active: status.heartbeat_active,
        }
    }

    /// Opens a new pool and swaps it in. Callers hold `connect_lock`.
    async fn open(&self, url: &str) -> Result<(), DbErr> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(self.inner.config.max_connections)
            .connect_timeout(self.inner.config.connect_timeout)
            .sqlx_logging(false);

        let db = Database::connect(opt).await?;
        schema::ensure_schema(&db).await?;

        let previous = {
            let mut status = self.inner.status.write();
            status.state = ConnectionState::Connected;
            status.reconnect_attempts = 0;
            status.db.replace(db)
        };

        if let Some(previous) = previous {
            let _ = previous.close().await;
        }

        Ok(())
    }

    /// Falls back to `Disconnected` unless a reconnect loop took over while connecting.
    fn mark_connect_failed(&self) {
        let mut status = self.inner.status.write();
        if status.state == ConnectionState::Connecting {
            status.state = ConnectionState::Disconnected;
        }
    }

    fn set_state(&self, state: ConnectionState) {
        self.inner.status.write().state = state;
    }
}
