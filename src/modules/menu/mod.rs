pub mod command;
mod user_interface;

pub use command::MenuCommand;
pub use user_interface::{render_contacts, run_menu, show_menu};
