//! # Event Wiring
//!
//! Attaches DOM listeners that forward user interaction to the shared
//! [`FormController`] and schedules `requestAnimationFrame` callbacks for the
//! work it defers.
//!
//! Listeners live as long as the page, so their closures are intentionally
//! leaked with `Closure::forget`.

use std::cell::RefCell;
use std::rc::Rc;

use lib_form::{FormController, PasswordField};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::host::WebHost;

pub type SharedController = Rc<RefCell<FormController<WebHost>>>;

fn listen(target: &Element, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("[Form] Could not listen for {}: {:?}", event, err);
    }
    closure.forget();
}

/// Request one animation frame for whatever the controller has queued.
fn schedule_frame(controller: &SharedController) {
    if !controller.borrow_mut().take_frame_request() {
        return;
    }

    let Some(window) = web_sys::window() else {
        controller.borrow_mut().run_frame();
        return;
    };

    let ctrl = Rc::clone(controller);
    let callback = Closure::once_into_js(move || ctrl.borrow_mut().run_frame());
    let function: &js_sys::Function = callback.unchecked_ref();
    if let Err(err) = window.request_animation_frame(function) {
        log::error!("[Form] requestAnimationFrame failed: {:?}", err);
        controller.borrow_mut().run_frame();
    }
}

fn wire_segments(controller: &SharedController) {
    let options = controller.borrow().handles().segment_options.clone();

    for option in options {
        let ctrl = Rc::clone(controller);
        let segment = option.segment;
        listen(&option.element, "click", move |_event| {
            let changed = ctrl.borrow_mut().select_segment(segment);
            if changed {
                schedule_frame(&ctrl);
            }
        });
    }
}

fn wire_password_toggle(controller: &SharedController, field: PasswordField) {
    let handle = controller.borrow().handles().fields.password_field(field).clone();
    let (Some(input), Some(toggle)) = (handle.input, handle.toggle) else {
        return;
    };

    // Keep focus (and the caret) in the input when the button is pressed.
    listen(&toggle, "mousedown", |event| event.prevent_default());

    let ctrl = Rc::clone(controller);
    listen(&input, "input", move |_event| {
        ctrl.borrow_mut().password_input_changed(field);
    });

    let ctrl = Rc::clone(controller);
    listen(&toggle, "click", move |_event| {
        ctrl.borrow_mut().toggle_password(field);
        schedule_frame(&ctrl);
    });
}

fn wire_submit(controller: &SharedController) {
    let root = controller.borrow().handles().root.clone();

    let ctrl = Rc::clone(controller);
    listen(&root, "submit", move |event| {
        event.prevent_default();
        ctrl.borrow_mut().submit();
    });
}

/// Attach every listener the resolved elements allow.
pub fn wire(controller: SharedController) {
    wire_segments(&controller);

    let toggles = controller.borrow().password_toggles();
    for field in PasswordField::ALL {
        if toggles.contains(&field) {
            wire_password_toggle(&controller, field);
        } else {
            log::warn!("[Form] Password toggle disabled for {:?}", field);
        }
    }

    wire_submit(&controller);
    log::info!("[Form] Listeners attached");
}
