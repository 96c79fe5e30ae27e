//! Idempotent schema setup for the voice log store.
//!
//! The bot owns a single append-only table, so instead of a migration history the table and
//! its lookup indexes are created with `IF NOT EXISTS` every time a connection is opened.

use entity::voice_log;
use sea_orm::{sea_query::Index, ConnectionTrait, DatabaseConnection, DbErr, Schema};

/// Creates the `voice_log` table and its indexes when they are missing.
///
/// # Arguments
/// - `db` - Freshly opened connection, the backend decides the generated SQL dialect
///
/// # Returns
/// - `Ok(())` - Table and indexes exist
/// - `Err(DbErr)` - A DDL statement failed
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    let mut table = schema.create_table_from_entity(voice_log::Entity);
    table.if_not_exists();
    db.execute(&table).await?;

    let indexes = [
        ("idx_voice_log_guild_timestamp", voice_log::Column::GuildId),
        ("idx_voice_log_user_timestamp", voice_log::Column::UserId),
        ("idx_voice_log_new_channel_timestamp", voice_log::Column::NewChannelId),
        (
            "idx_voice_log_previous_channel_timestamp",
            voice_log::Column::PreviousChannelId,
        ),
    ];

    for (name, column) in indexes {
        let index = Index::create()
            .if_not_exists()
            .name(name)
            .table(voice_log::Entity)
            .col(column)
            .col(voice_log::Column::Timestamp)
            .to_owned();

        db.execute(&index).await?;
    }

    Ok(())
}
