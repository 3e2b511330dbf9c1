//! Signup Form - browser entry point
//!
//! Attaches the form controller to the page's `[data-js-form]` element as soon
//! as the wasm module loads.

use std::cell::RefCell;
use std::rc::Rc;

use lib_form::FormController;
use wasm_bindgen::prelude::*;

mod host;
mod utils;
mod wiring;

use host::WebHost;
use utils::config::load_config;
use utils::constants::SUCCESS_MESSAGE;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger (also receives the core library's tracing events)
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[Form] Signup form module loaded");

    attach_signup_form();
}

/// Placeholder for the real submission, which belongs to the page.
fn acknowledge_submission() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(SUCCESS_MESSAGE) {
            log::error!("[Form] alert failed: {:?}", err);
        }
    }
}

fn attach_signup_form() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("[Form] No document available");
        return;
    };

    let config = load_config(&document);
    match FormController::attach(WebHost::new(document), config, acknowledge_submission) {
        Ok(controller) => wiring::wire(Rc::new(RefCell::new(controller))),
        Err(err) => log::error!("[Form] Not attached: {}", err),
    }
}
