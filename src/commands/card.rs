//! Card Commands
//!
//! Frontend bindings for card-related backend commands.

use serde::Serialize;
use crate::models::{Card, CardPatch};
use super::{call, call_unit, to_args};

#[derive(Serialize)]
struct ListIdArgs {
    #[serde(rename = "listId")]
    list_id: u32,
}

#[derive(Serialize)]
struct CreateCardArgs<'a> {
    #[serde(rename = "listId")]
    list_id: u32,
    title: &'a str,
}

// Not #[serde(flatten)]: serde-wasm-bindgen emits a JS Map for flattened structs
#[derive(Serialize)]
struct UpdateCardArgs<'a> {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

pub async fn list_cards(list_id: u32) -> Result<Vec<Card>, String> {
    call("list_cards", to_args(&ListIdArgs { list_id })?).await
}

pub async fn create_card(list_id: u32, title: &str) -> Result<Card, String> {
    call("create_card", to_args(&CreateCardArgs { list_id, title })?).await
}

pub async fn update_card(id: u32, patch: &CardPatch) -> Result<(), String> {
    let args = UpdateCardArgs {
        id,
        title: patch.title.as_deref(),
        description: patch.description.as_deref(),
    };
    call_unit("update_card", to_args(&args)?).await
}

pub async fn delete_card(id: u32) -> Result<(), String> {
    call_unit("delete_card", to_args(&IdArgs { id })?).await
}
