use thiserror::Error;

/// Errors raised by the persistent store and the voice log operations built on it.
///
/// `Unavailable` and `Disabled` are expected operating conditions rather than bugs: the
/// voice logger drops the event and the query commands render a "try again later" reply.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No database URL is configured, voice logging is switched off.
    #[error("Voice log store is not configured")]
    Disabled,

    /// The store is configured but could not be reached.
    #[error("Voice log store is unavailable")]
    Unavailable,

    /// The channels passed with a transition do not fit its action.
    #[error("Voice transition does not fit action '{0}'")]
    InvalidTransition(String),

    /// The store was reached but the operation failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
