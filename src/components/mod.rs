//! UI Components
//!
//! Leptos components for the board collection and board pages.

mod inline_edit;
mod new_name_form;
mod not_found;
mod board_tile;
mod board_list;
mod card_detail;
mod card_item;
mod list_column;
mod board_view;

pub use inline_edit::InlineEdit;
pub use new_name_form::NewNameForm;
pub use not_found::NotFound;
pub use board_tile::BoardTile;
pub use board_list::BoardList;
pub use card_detail::CardDetail;
pub use card_item::CardItem;
pub use list_column::ListColumn;
pub use board_view::{BoardPage, BoardView};
