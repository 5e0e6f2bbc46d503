//! WebAssembly bindings for the puzzle engine.
//!
//! Requests and results cross the boundary as plain JS objects in the same
//! shape the engine serializes to.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wordgrid_core::Phrase;

mod bridge;


pub use bridge::JsRequest;

// Initialize panic hook and logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logging(false);
}

/// Set the console log level; `debug` enables per-attempt diagnostics
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(debug: bool) {
    let level = if debug { log::Level::Debug } else { log::Level::Info };
    // Only the first call installs the logger; later calls adjust the level
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate a puzzle from `{phrases, game_type, difficulty?, size?, target_count?, seed?}`
#[wasm_bindgen(js_name = generatePuzzle)]
pub fn generate_puzzle(request: JsValue) -> Result<JsValue, JsValue> {
    let js: JsRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&format!("invalid request: {}", e)))?;
    let puzzle = bridge::run(&js).map_err(|e| JsValue::from_str(&e))?;
    to_js(&puzzle)
}

/// Same as `generatePuzzle`, taking and returning JSON text
#[wasm_bindgen(js_name = generatePuzzleJson)]
pub fn generate_puzzle_json(request: &str) -> Result<String, JsValue> {
    let js = bridge::parse_request(request).map_err(|e| JsValue::from_str(&e))?;
    let puzzle = bridge::run(&js).map_err(|e| JsValue::from_str(&e))?;
    serde_json::to_string(&puzzle).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = normalizePhrase)]
pub fn normalize_phrase(text: &str) -> String {
    wordgrid_core::normalize(text)
}

/// Suggested grid size for an array of phrases
#[wasm_bindgen(js_name = estimateGridSize)]
pub fn estimate_grid_size(phrases: JsValue) -> Result<usize, JsValue> {
    let phrases: Vec<Phrase> =
        serde_wasm_bindgen::from_value(phrases).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(bridge::estimate(&phrases))
}
