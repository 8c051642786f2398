//! Card Commands
//!
//! Tauri commands for the cards of a list.

use tauri::State;

use crate::AppState;
use crate::domain::{Card, CardPatch};

#[tauri::command]
pub async fn list_cards(list_id: u32, state: State<'_, AppState>) -> Result<Vec<Card>, String> {
    state.service.list_cards(list_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_card(
    list_id: u32,
    title: String,
    state: State<'_, AppState>,
) -> Result<Card, String> {
    state.service.create_card(list_id, &title).await.map_err(|e| e.to_string())
}

/// Update title and/or description; omitted fields are left alone
#[tauri::command]
pub async fn update_card(
    id: u32,
    title: Option<String>,
    description: Option<String>,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let patch = CardPatch { title, description };
    state.service.update_card(id, &patch).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_card(id: u32, state: State<'_, AppState>) -> Result<(), String> {
    state.service.delete_card(id).await.map_err(|e| e.to_string())
}
