//! travelrec-wasm — WebAssembly bindings for travelrec-core
//!
//! This crate exposes the travel recommendation search to the browser. It
//! embeds the JSON dataset in the WASM binary, parses it once per page
//! lifetime, and wires up the page's search form so results render as
//! cards without any JavaScript glue beyond module initialization.
//!
//! DOM contract
//! ------------
//! The host page provides:
//! - an element matching `.search-bar` that emits a `submit` event
//! - an input with id `searchInput`
//! - a clear button with id `btnClear`
//! - a results container with id `results`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { search, get_stats } from 'travelrec-wasm';
//!
//! async function main() {
//!   await init(); // parses the embedded dataset and wires the form
//!   console.log(get_stats());
//!
//!   // Programmatic access, bypassing the DOM:
//!   const items = search('beach');
//!   console.log(items); // [{ name, description, imageUrl, ... }]
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The dataset is embedded at compile time; rebuild the crate to pick up
//!   data changes.
//! - All exported functions are `wasm_bindgen` bindings returning plain
//!   types or `JsValue` containing JSON-serializable arrays/objects.

use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use serde_wasm_bindgen::to_value;
#[cfg(target_arch = "wasm32")]
use travelrec_core::render::IDLE_MESSAGE;
use travelrec_core::render::{
    render_message, render_recommendations, LOAD_FAILURE_MESSAGE, PROMPT_MESSAGE,
};
use travelrec_core::{Category, DisplayItem, RecommendationSet};

// 1. Embed the dataset (the same document travelrec-core bundles).
static EMBEDDED_DATA: &str =
    include_str!("../../travelrec-core/data/travel_recommendation_api.json");

// 2. Static instance, parsed at most once per page lifetime.
static DATA: OnceLock<Option<RecommendationSet>> = OnceLock::new();

fn data() -> Option<&'static RecommendationSet> {
    DATA.get_or_init(|| match serde_json::from_str(EMBEDDED_DATA) {
        Ok(set) => Some(set),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to parse recommendations: {e}").into());
            None
        }
    })
    .as_ref()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing travel recommendations...".into());

    if let Some(set) = data() {
        let stats = set.stats();
        web_sys::console::log_1(
            &format!(
                "✓ Loaded {} beaches, {} temples, {} cities",
                stats.beaches, stats.temples, stats.cities
            )
            .into(),
        );
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if let Some(form) = document.query_selector(".search-bar")? {
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
            event.prevent_default();
            handle_search();
        });
        form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    if let Some(button) = document.get_element_by_id("btnClear") {
        let handler = Closure::<dyn FnMut()>::new(|| handle_clear());
        button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }

    // Initial helper text.
    render_into_results(&render_message(IDLE_MESSAGE));
    Ok(())
}

/* --------------------------------------------------------------------------
   DOM handlers
-------------------------------------------------------------------------- */

#[cfg(target_arch = "wasm32")]
fn handle_search() {
    let raw = search_input_value().unwrap_or_default();
    render_into_results(&search_markup(&raw));
}

#[cfg(target_arch = "wasm32")]
fn handle_clear() {
    if let Some(input) = search_input() {
        input.set_value("");
    }
    render_into_results(&render_message(IDLE_MESSAGE));
}

#[cfg(target_arch = "wasm32")]
fn render_into_results(html: &str) {
    if let Some(container) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("results"))
    {
        container.set_inner_html(html);
    }
}

#[cfg(target_arch = "wasm32")]
fn search_input() -> Option<web_sys::HtmlInputElement> {
    let element = web_sys::window()?.document()?.get_element_by_id("searchInput")?;
    element.dyn_into::<web_sys::HtmlInputElement>().ok()
}

#[cfg(target_arch = "wasm32")]
fn search_input_value() -> Option<String> {
    search_input().map(|input| input.value())
}

/* --------------------------------------------------------------------------
   Exports
-------------------------------------------------------------------------- */

/// HTML fragment for a keyword search: cards, or a guidance/failure message.
#[wasm_bindgen]
pub fn search_markup(keyword: &str) -> String {
    let Some(category) = Category::parse(keyword) else {
        return render_message(PROMPT_MESSAGE);
    };
    match data() {
        Some(set) => render_recommendations(&set.recommendations_for(category)),
        None => render_message(LOAD_FAILURE_MESSAGE),
    }
}

/// Matching items as a JS array of `{name, description, imageUrl, country?}`.
#[wasm_bindgen]
pub fn search(keyword: &str) -> JsValue {
    let array = js_sys::Array::new();
    if let (Some(category), Some(set)) = (Category::parse(keyword), data()) {
        for item in set.recommendations_for(category) {
            if let Ok(v) = to_value::<DisplayItem>(&item) {
                array.push(&v);
            }
        }
    }
    array.into()
}

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    match data() {
        Some(set) => to_value(&set.stats()).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

/// Number of items the given keyword would render. Zero for unknown keywords.
#[wasm_bindgen]
pub fn get_result_count(keyword: &str) -> usize {
    match (Category::parse(keyword), data()) {
        (Some(category), Some(set)) => set.recommendations_for(category).len(),
        _ => 0,
    }
}
