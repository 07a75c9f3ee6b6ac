use teloxide::dispatching::{HandlerExt, UpdateHandler};
use teloxide::prelude::*;

use crate::commands::Command;
use crate::handlers::{
    admin_callback_handler, admin_input_handler, command_handler, group_message_handler,
    is_admin_callback, menu_callback_handler,
};
use crate::pending::{self, PendingState, PendingStorage};

type RouterError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Branch order is the routing precedence: commands, admin callbacks, menu
/// callbacks, pending admin input, then group events.
pub fn schema() -> UpdateHandler<RouterError> {
    dptree::entry()
        .enter_dialogue::<Update, PendingStorage, PendingState>()
        .branch(commands().endpoint(command_handler))
        .branch(admin_callbacks().endpoint(admin_callback_handler))
        .branch(menu_callbacks().endpoint(menu_callback_handler))
        .branch(admin_input().endpoint(admin_input_handler))
        .branch(group_events().endpoint(group_message_handler))
}

fn commands() -> UpdateHandler<RouterError> {
    Update::filter_message().filter_command::<Command>()
}

fn admin_callbacks() -> UpdateHandler<RouterError> {
    Update::filter_callback_query()
        .filter(|q: CallbackQuery| q.data.as_deref().is_some_and(is_admin_callback))
}

fn menu_callbacks() -> UpdateHandler<RouterError> {
    Update::filter_callback_query()
}

/// Private messages while the chat's dialogue waits on an admin action.
fn admin_input() -> UpdateHandler<RouterError> {
    Update::filter_message()
        .filter(|msg: Message| msg.chat.is_private())
        .filter_map_async(pending::live_action)
}

fn group_events() -> UpdateHandler<RouterError> {
    Update::filter_message().filter(|msg: Message| msg.chat.is_group() || msg.chat.is_supergroup())
}
