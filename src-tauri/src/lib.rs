//! Kanban Board Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - service: Record access functions used by the frontend
//! - commands: Tauri command handlers (`desktop` feature)

mod config;
mod domain;
mod logging;
mod repository;
mod service;
#[cfg(feature = "desktop")]
mod commands;

pub use config::AppConfig;
pub use domain::{Board, Card, CardPatch, DomainError, DomainResult, Entity, List};
pub use logging::init_logger;
pub use repository::DbState;
pub use service::{DeletePolicy, KanbanService};

/// Application state shared across commands
pub struct AppState {
    pub service: KanbanService,
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use std::sync::Arc;
    use tauri::Manager;

    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();
            let data_dir = app_handle.path().app_data_dir()?;
            std::fs::create_dir_all(&data_dir)?;
            let config = AppConfig::from_env(&data_dir);

            // Initialize logging
            match init_logger(&app_handle.path().app_log_dir()?, "Kanban", config.log_level) {
                Ok(path) => log::info!("Logging to {}", path.display()),
                Err(e) => eprintln!("Logger disabled: {}", e),
            }
            log::info!(
                "App setup starting (database: {}, delete policy: {:?})",
                config.database_url,
                config.delete_policy
            );

            // The connection opens on the first command, not here
            let db_state = Arc::new(DbState::new(config.database_url.clone()));
            app.manage(AppState {
                service: KanbanService::new(db_state, config.delete_policy),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Boards
            commands::list_boards,
            commands::get_board,
            commands::create_board,
            commands::rename_board,
            commands::delete_board,
            // Lists
            commands::list_lists,
            commands::create_list,
            commands::rename_list,
            commands::delete_list,
            // Cards
            commands::list_cards,
            commands::create_card,
            commands::update_card,
            commands::delete_card,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
