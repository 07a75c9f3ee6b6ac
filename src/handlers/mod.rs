pub mod admin;
pub mod admin_panel;
pub mod broadcast;
pub mod callback;
pub mod command;
pub mod group;
pub mod ui;

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub use admin_panel::{admin_callback_handler, is_admin_callback};
pub use broadcast::admin_input_handler;
pub use callback::menu_callback_handler;
pub use command::command_handler;
pub use group::group_message_handler;
