//! Terminal front end: plain-text board rendering, move parsing and the
//! interactive console session that drives a [`GameState`](crate::game::GameState).

pub mod board_view;
mod console;
pub mod input;

pub use board_view::GameView;
pub use console::Console;
pub use input::{parse_command, Command};
