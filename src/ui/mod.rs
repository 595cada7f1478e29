//! Line-based console front-end: menu, prompts and the session runner.

mod app;
mod console;
mod forms;
mod helpers;
mod menu;
mod terminal;

pub use app::App;
pub use console::{Console, StatusKind};
pub use menu::MenuAction;
pub use terminal::{run_app, run_session};
