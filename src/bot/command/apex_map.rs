use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateEmbedFooter, EditInteractionResponse, Timestamp,
};

use crate::{
    error::AppError, model::map_rotation::GameMode,
    service::map_rotation::MapRotationService, state::AppState,
};

pub const NAME: &str = "apexmap";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show the current Apex Legends map rotation")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "mode", "Game mode")
                .required(true)
                .add_string_choice("🎮 Battle Royale", GameMode::Normal.as_str())
                .add_string_choice("🏆 Ranked", GameMode::Ranked.as_str()),
        )
}

/// Defers, looks up the rotation and edits in either the rotation or an error embed.
pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    state: &AppState,
) -> Result<(), AppError> {
    command.defer(&ctx.http).await?;

    let mode = command
        .data
        .options
        .iter()
        .find(|option| option.name == "mode")
        .and_then(|option| option.value.as_str())
        .and_then(|mode| mode.parse::<GameMode>().ok())
        .unwrap_or(GameMode::Normal);

    let embed = match state.map_rotation.get_map_rotation(mode).await {
        Ok(rotation) => CreateEmbed::new()
            .title(format!("{} Apex Legends - {}", mode.emoji(), mode.label()))
            .description(MapRotationService::format_rotation(&rotation, mode))
            .colour(mode.colour())
            .timestamp(Timestamp::now())
            .footer(
                CreateEmbedFooter::new(format!("Requested by {}", command.user.tag()))
                    .icon_url(command.user.face()),
            ),
        Err(e) => {
            tracing::error!("Map rotation lookup for {} failed: {}", mode, e);
            CreateEmbed::new()
                .title("❌ Error")
                .description(e.user_message())
                .colour(0xFF0000)
                .timestamp(Timestamp::now())
        }
    };

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await?;

    Ok(())
}
