use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use travelrec_wasm::{get_result_count, search_markup};

#[wasm_bindgen_test]
fn beach_keyword_renders_cards() {
    let html = search_markup("beach");
    assert!(
        html.contains("result-card"),
        "expected cards in markup, got {html}"
    );
}

#[wasm_bindgen_test]
fn unknown_keyword_renders_prompt() {
    let html = search_markup("mountains");
    assert!(html.contains("Please enter"));
    assert!(!html.contains("result-card"));
}

#[wasm_bindgen_test]
fn country_keyword_counts_flattened_cities() {
    let count = get_result_count("Countries");
    assert!(count > 0, "expected at least one city, got {count}");
}
