//! List Commands
//!
//! Frontend bindings for list-related backend commands.

use serde::Serialize;
use crate::models::List;
use super::{call, call_unit, to_args};

#[derive(Serialize)]
struct BoardIdArgs {
    #[serde(rename = "boardId")]
    board_id: u32,
}

#[derive(Serialize)]
struct CreateListArgs<'a> {
    #[serde(rename = "boardId")]
    board_id: u32,
    name: &'a str,
}

#[derive(Serialize)]
struct RenameListArgs<'a> {
    id: u32,
    name: &'a str,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

pub async fn list_lists(board_id: u32) -> Result<Vec<List>, String> {
    call("list_lists", to_args(&BoardIdArgs { board_id })?).await
}

pub async fn create_list(board_id: u32, name: &str) -> Result<List, String> {
    call("create_list", to_args(&CreateListArgs { board_id, name })?).await
}

pub async fn rename_list(id: u32, name: &str) -> Result<(), String> {
    call_unit("rename_list", to_args(&RenameListArgs { id, name })?).await
}

pub async fn delete_list(id: u32) -> Result<(), String> {
    call_unit("delete_list", to_args(&IdArgs { id })?).await
}
