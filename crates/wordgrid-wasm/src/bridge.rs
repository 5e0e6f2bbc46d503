//! Request handling shared by the JS entry points, kept free of `JsValue`
//! so it runs under native tests.

use serde::{Deserialize, Serialize};
use wordgrid_core::{GenerateRequest, Generator, Phrase, Puzzle};

/// A generation request as sent from JavaScript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsRequest {
    #[serde(flatten)]
    pub request: GenerateRequest,
    /// Fixed seed for reproducible puzzles
    #[serde(default)]
    pub seed: Option<u64>,
}

pub fn run(js: &JsRequest) -> Result<Puzzle, String> {
    let mut generator = match js.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    generator.generate(&js.request).map_err(|e| e.to_string())
}

/// Parse a request from JSON text
pub fn parse_request(json: &str) -> Result<JsRequest, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid request: {}", e))
}

pub fn estimate(phrases: &[Phrase]) -> usize {
    wordgrid_core::estimate_size(phrases)
}
