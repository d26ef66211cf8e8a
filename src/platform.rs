//! Thin wrappers over the browser APIs the site touches directly.

use dioxus::logger::tracing::warn;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::state::overlay::ScrollSurface;

/// An event listener on `window`, removed again when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!(?err, event, "could not attach window listener");
            return None;
        }
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn key_of(event: &web_sys::Event) -> Option<String> {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(web_sys::KeyboardEvent::key)
}

/// Seed for anything that only needs to differ between page loads.
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

pub fn element(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

pub fn smooth_scroll_left(element: &web_sys::Element, left: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scroll the window so element `id` sits `margin` pixels below the top.
pub fn scroll_window_to(id: &str, margin: f64) {
    let (Some(window), Some(target)) = (web_sys::window(), element(id)) else {
        return;
    };
    let top = target.get_bounding_client_rect().top() + scroll_y() - margin;
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// The document body, as the thing overlays lock.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyScroll;

impl ScrollSurface for BodyScroll {
    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let overflow = if locked { "hidden" } else { "" };
        if let Err(err) = body.style().set_property("overflow", overflow) {
            warn!(?err, "could not update body overflow");
        }
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
