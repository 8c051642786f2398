//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod board;
mod list;
mod card;

use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use board::*;
pub use list::*;
pub use card::*;

/// Backend errors arrive as rejected strings
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn to_args<A: Serialize>(args: &A) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())
}

/// Invoke a command and deserialize its result
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Invoke a command that returns `()` on success
async fn call_unit(cmd: &str, args: JsValue) -> Result<(), String> {
    invoke(cmd, args).await.map_err(js_error)?;
    Ok(())
}
