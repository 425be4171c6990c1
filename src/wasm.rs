//! WASM bindings for in-browser microformats parsing.
//!
//! This module exposes the parser to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{ParseOptions, parse_html_str};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Parse an HTML string and return the microformats2 JSON document.
///
/// `base_url` resolves relative URLs until the page declares its own
/// `<base href>`.
#[wasm_bindgen(js_name = parseMicroformats)]
pub fn parse_microformats(html: &str, base_url: Option<String>) -> Result<String, JsValue> {
    let options = ParseOptions {
        base_url,
        ..ParseOptions::default()
    };
    let doc = parse_html_str(html, &options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    doc.to_json().map_err(|e| JsValue::from_str(&e.to_string()))
}
