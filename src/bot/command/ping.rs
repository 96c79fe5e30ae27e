use std::time::Instant;

use serenity::all::{
    CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse,
};

use crate::{bot::command::shard_latency, error::AppError};

pub const NAME: &str = "ping";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Replies with Pong and shows bot latency!")
}

/// Replies "Pinging..." and then edits in the measured latencies.
pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let started = Instant::now();
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content("Pinging..."),
            ),
        )
        .await?;
    let round_trip = started.elapsed().as_millis();

    let gateway = shard_latency(ctx)
        .await
        .map(|latency| format!("{}ms", latency.as_millis()))
        .unwrap_or_else(|| "n/a".to_string());

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().content(format!(
                "🏓 **Pong!**\n📡 **Latency:** {}ms\n💝 **API Latency:** {}",
                round_trip, gateway
            )),
        )
        .await?;

    Ok(())
}
