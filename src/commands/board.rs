//! Board Commands
//!
//! Frontend bindings for board-related backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Board;
use super::{call, call_unit, to_args};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct CreateBoardArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct RenameBoardArgs<'a> {
    id: u32,
    name: &'a str,
}

// ========================
// Commands
// ========================

pub async fn list_boards() -> Result<Vec<Board>, String> {
    call("list_boards", JsValue::NULL).await
}

pub async fn get_board(id: u32) -> Result<Board, String> {
    call("get_board", to_args(&IdArgs { id })?).await
}

pub async fn create_board(name: &str) -> Result<Board, String> {
    call("create_board", to_args(&CreateBoardArgs { name })?).await
}

pub async fn rename_board(id: u32, name: &str) -> Result<(), String> {
    call_unit("rename_board", to_args(&RenameBoardArgs { id, name })?).await
}

pub async fn delete_board(id: u32) -> Result<(), String> {
    call_unit("delete_board", to_args(&IdArgs { id })?).await
}
