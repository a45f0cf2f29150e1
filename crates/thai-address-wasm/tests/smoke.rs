use serde::Deserialize;
use wasm_bindgen_test::*;

use thai_address_core::AddressHit;
use thai_address_wasm::{is_ready, lookup_postal_code, search, start};

#[derive(Deserialize)]
struct Response {
    status: String,
    message: Option<String>,
    hits: Vec<AddressHit>,
}

fn search_response(query: &str) -> Response {
    serde_wasm_bindgen::from_value(search(query).unwrap()).unwrap()
}

#[wasm_bindgen_test]
fn module_starts_ready() {
    start();
    assert!(is_ready());
}

#[wasm_bindgen_test]
fn search_routes_postal_codes() {
    start();
    let response = search_response("10330");
    assert_eq!(response.status, "found");
    assert_eq!(response.message, None);
    assert_eq!(response.hits.len(), 4);
}

#[wasm_bindgen_test]
fn empty_search_carries_thai_message() {
    start();
    let response = search_response("   ");
    assert_eq!(response.status, "failed");
    assert_eq!(response.message.as_deref(), Some("กรุณากรอกคำค้นหา"));
    assert!(response.hits.is_empty());
}

#[wasm_bindgen_test]
fn postal_lookup_is_an_array() {
    start();
    let hits: Vec<AddressHit> =
        serde_wasm_bindgen::from_value(lookup_postal_code("50200").unwrap()).unwrap();
    assert_eq!(hits.len(), 3);
}
