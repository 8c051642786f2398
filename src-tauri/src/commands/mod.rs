//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod board_cmd;
mod list_cmd;
mod card_cmd;

pub use board_cmd::*;
pub use list_cmd::*;
pub use card_cmd::*;
