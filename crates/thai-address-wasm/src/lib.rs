//! thai-address-wasm — WebAssembly bindings for thai-address-core
//!
//! The search box of a web page, minus the HTML: JavaScript passes the raw
//! input, Rust routes it and hands back the hits plus a status line.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - `is_ready()`: whether the embedded dataset finished loading
//! - `search(query)`: `{ query, status, message, hits }`, where `status` is
//!   `"idle" | "found" | "no_results" | "failed"` and `message` is the Thai
//!   status line (or `null`)
//! - `lookup_postal_code("10330")`: hits for one postal code
//! - `get_stats()`: dataset counts
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { search } from 'thai-address-wasm';
//!
//! async function main() {
//!   await init();
//!   const { status, message, hits } = search('บางรัก');
//!   // hits: [{ subDistrict, district, province, postalCode }, ...]
//!   console.log(status, message, hits);
//! }
//! main();
//! ```
use std::sync::OnceLock;

use futures::executor::block_on;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use thai_address_core::{
    AddressHit, AddressProvider, SearchSession, SearchView, ThaiAddressProvider,
};

static SESSION: OnceLock<SearchSession<ThaiAddressProvider>> = OnceLock::new();

fn session() -> &'static SearchSession<ThaiAddressProvider> {
    SESSION.get_or_init(|| SearchSession::new(ThaiAddressProvider::embedded()))
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("{message}");
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing Thai address WASM module...");

    let session = session();
    // The bundled provider does its loading synchronously, so this resolves
    // on the first poll.
    if block_on(session.initialize()) {
        if let Some(stats) = session.provider().stats() {
            log(&format!(
                "✓ Loaded {} provinces, {} sub-districts",
                stats.provinces, stats.sub_districts
            ));
        }
    } else if let Some(message) = session.view().status.message() {
        log(message);
    }
}

#[wasm_bindgen]
pub fn is_ready() -> bool {
    session().is_ready()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse<'a> {
    query: &'a str,
    status: &'static str,
    message: Option<&'static str>,
    hits: &'a [AddressHit],
}

impl<'a> From<&'a SearchView> for SearchResponse<'a> {
    fn from(view: &'a SearchView) -> Self {
        Self {
            query: &view.query,
            status: view.status.as_str(),
            message: view.status.message(),
            hits: &view.hits,
        }
    }
}

/* --------------------------------------------------------------------------
   Search box
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search(query: &str) -> Result<JsValue, JsValue> {
    let view = block_on(session().submit(query));
    Ok(to_value(&SearchResponse::from(&view))?)
}

#[wasm_bindgen]
pub fn lookup_postal_code(code: &str) -> Result<JsValue, JsValue> {
    let hits = block_on(session().provider().lookup_by_postal_code(code))
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(to_value(&hits)?)
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    match session().provider().stats() {
        Some(stats) => Ok(to_value(&stats)?),
        None => Ok(JsValue::NULL),
    }
}
