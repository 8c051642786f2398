//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod positioning;
mod board_repo;
mod list_repo;
mod card_repo;


pub use traits::{Repository, RenameRepository, ChildRepository};
pub use db::DbState;
pub use board_repo::BoardRepository;
pub use list_repo::ListRepository;
pub use card_repo::CardRepository;
