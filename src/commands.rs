use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "open the partner menu.")]
    Start,
    #[command(description = "open the admin panel.")]
    Admin,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "abandon a pending admin action.")]
    Cancel,
}

impl Command {
    /// Tag written to the command usage log.
    pub fn tag(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Admin => "admin",
            Command::Help => "help",
            Command::Cancel => "cancel",
        }
    }
}
