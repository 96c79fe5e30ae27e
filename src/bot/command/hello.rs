use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::error::AppError;

pub const NAME: &str = "hello";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Says hello to you!")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "name",
            "Your name",
        ))
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let name = command
        .data
        .options
        .iter()
        .find(|option| option.name == "name")
        .and_then(|option| option.value.as_str());

    let reply = greeting(name, command.user.display_name());

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(reply),
            ),
        )
        .await?;

    Ok(())
}

/// Greets the given name, or the invoking member when no name was passed.
fn greeting(name: Option<&str>, display_name: &str) -> String {
    match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("👋 Hello there, **{}**! Nice to meet you!", name),
        None => format!("👋 Hello, **{}**! How are you doing today?", display_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_given_name() {
        assert_eq!(
            greeting(Some("Bloodhound"), "Alice"),
            "👋 Hello there, **Bloodhound**! Nice to meet you!"
        );
    }

    #[test]
    fn falls_back_to_display_name() {
        assert_eq!(
            greeting(None, "Alice"),
            "👋 Hello, **Alice**! How are you doing today?"
        );
        assert!(greeting(Some("  "), "Alice").contains("Alice"));
    }
}
