//! WASM bindings for business card contact extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and
//! Node.js: the surrounding card-scanner UI runs OCR on the client and
//! hands the raw text over this boundary.

use wasm_bindgen::prelude::*;

use bizcard_core::{CardParser, ContactRecord, HeuristicCardParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract a contact record from OCR text.
#[wasm_bindgen]
pub fn extract_contact_from_text(text: &str) -> Result<JsValue, JsValue> {
    let record = bizcard_core::extract(text, None);
    serde_wasm_bindgen::to_value(&record).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract a contact record, carrying the source image payload through.
#[wasm_bindgen]
pub fn extract_contact_with_image(text: &str, image_data: &str) -> Result<JsValue, JsValue> {
    let record = bizcard_core::extract(text, Some(image_data));
    serde_wasm_bindgen::to_value(&record).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Card extractor class for browser use.
#[wasm_bindgen]
pub struct CardExtractor {
    parser: HeuristicCardParser,
}

#[wasm_bindgen]
impl CardExtractor {
    /// Create a new card extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: HeuristicCardParser::new(),
        }
    }

    /// Extract a contact record from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);
        serde_wasm_bindgen::to_value(&result.record)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Extract a contact record together with extraction metadata.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        #[derive(serde::Serialize)]
        struct ExtractOutput {
            record: ContactRecord,
            warnings: Vec<String>,
            processing_time_ms: u64,
        }

        let output = ExtractOutput {
            record: result.record,
            warnings: result.warnings,
            processing_time_ms: result.processing_time_ms,
        };

        serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for CardExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Utilities mirrored from the core cleaning rules.
#[wasm_bindgen]
pub struct CardUtils;

#[wasm_bindgen]
impl CardUtils {
    /// Strip a phone string down to digits with an optional leading `+`.
    #[wasm_bindgen]
    pub fn clean_phone(raw: &str) -> String {
        bizcard_core::card::rules::clean_phone(raw)
    }

    /// Canonical `www.`-prefixed form of a website string.
    #[wasm_bindgen]
    pub fn canonical_website(site: &str) -> String {
        bizcard_core::card::sanitize::canonical_website(site)
    }
}
