//! Board Commands
//!
//! Tauri commands for board management.

use tauri::State;

use crate::AppState;
use crate::domain::Board;

#[tauri::command]
pub async fn list_boards(state: State<'_, AppState>) -> Result<Vec<Board>, String> {
    state.service.list_boards().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_board(id: u32, state: State<'_, AppState>) -> Result<Board, String> {
    state.service.get_board(id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_board(name: String, state: State<'_, AppState>) -> Result<Board, String> {
    state.service.create_board(&name).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn rename_board(id: u32, name: String, state: State<'_, AppState>) -> Result<(), String> {
    state.service.rename_board(id, &name).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_board(id: u32, state: State<'_, AppState>) -> Result<(), String> {
    state.service.delete_board(id).await.map_err(|e| e.to_string())
}
