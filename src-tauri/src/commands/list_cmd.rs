//! List Commands
//!
//! Tauri commands for the lists of a board.

use tauri::State;

use crate::AppState;
use crate::domain::List;

#[tauri::command]
pub async fn list_lists(board_id: u32, state: State<'_, AppState>) -> Result<Vec<List>, String> {
    state.service.list_lists(board_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_list(
    board_id: u32,
    name: String,
    state: State<'_, AppState>,
) -> Result<List, String> {
    state.service.create_list(board_id, &name).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn rename_list(id: u32, name: String, state: State<'_, AppState>) -> Result<(), String> {
    state.service.rename_list(id, &name).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_list(id: u32, state: State<'_, AppState>) -> Result<(), String> {
    state.service.delete_list(id).await.map_err(|e| e.to_string())
}
