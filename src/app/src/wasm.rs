//! WebAssembly FFI bindings for the panel core
//!
//! The shell serializes events with bincode, hands them to [`process_event`],
//! performs the returned effects and feeds results back via [`handle_response`].
//! While `view().scanner.polling` is set the shell also sends
//! `ScannerEvent::PollTick` every `poll_interval_ms`.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Set up console logging when the module is loaded
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");
    log::info!("wifi panel core loaded");
}

/// Process a bincode-serialized `Event`, returning serialized effect requests
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .expect("Failed to process event");
    effects
}

/// Serialized `ViewModel`
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    CORE.view(&mut view).expect("Failed to get view model");
    view
}

/// Resolve effect `id` with a serialized output (an `HttpResult` for HTTP effects)
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    )
    .expect("Failed to handle response");
    effects
}
