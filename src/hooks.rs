//! Hooks that bind the `state` machines to timers and window events.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use gloo_timers::future::sleep;

use crate::platform::{self, BodyScroll, WindowListener};
use crate::state::carousel::Carousel;
use crate::state::overlay::{OverlayId, OverlayManager, OverlaySlot};

/// Page-wide owner of the body scroll lock.
#[derive(Clone, Copy, PartialEq)]
pub struct Overlays(Signal<OverlayManager<BodyScroll>>);

impl Overlays {
    fn register(mut self) -> OverlayId {
        self.0.write().register()
    }

    fn release(mut self, id: OverlayId) {
        // The root may already be gone when the whole app is torn down.
        if let Ok(mut manager) = self.0.try_write() {
            manager.release(id);
            debug!(locked = manager.is_locked(), "overlay released");
        }
    }
}

/// Install the overlay manager for everything below the calling component.
pub fn use_overlay_root() -> Overlays {
    let mut overlays =
        use_context_provider(|| Overlays(Signal::new(OverlayManager::new(BodyScroll))));
    use_drop(move || {
        if let Ok(mut manager) = overlays.0.try_write() {
            manager.release_all();
        }
    });
    overlays
}

/// A detail overlay bound to the page scroll lock and the Escape key.
pub struct OverlayHandle<T: 'static> {
    slot: Signal<OverlaySlot<T>>,
    overlays: Overlays,
}

impl<T: 'static> Clone for OverlayHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for OverlayHandle<T> {}

impl<T: 'static> PartialEq for OverlayHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T: Clone + 'static> OverlayHandle<T> {
    pub fn selected(&self) -> Option<T> {
        self.slot.read().selected().cloned()
    }

    pub fn open(mut self, item: T) {
        let mut manager = self.overlays.0.write();
        self.slot.write().open(item, &mut *manager);
    }

    pub fn close(mut self) {
        let mut manager = self.overlays.0.write();
        self.slot.write().close(&mut *manager);
    }

    fn handle_key(mut self, key: &str) {
        let mut manager = self.overlays.0.write();
        if self.slot.write().handle_key(key, &mut *manager) {
            debug!("overlay dismissed with {key}");
        }
    }
}

pub fn use_overlay<T: Clone + 'static>() -> OverlayHandle<T> {
    let overlays = use_context::<Overlays>();
    let id = use_hook(|| overlays.register());
    let slot = use_signal(|| OverlaySlot::new(id));
    let handle = OverlayHandle { slot, overlays };

    // Escape only needs listening for while something is showing.
    let escape = use_hook(|| Rc::new(RefCell::new(None::<WindowListener>)));
    use_effect(move || {
        let open = slot.read().is_open();
        let mut listener = escape.borrow_mut();
        if !open {
            *listener = None;
        } else if listener.is_none() {
            *listener = WindowListener::new("keydown", move |event| {
                if let Some(key) = platform::key_of(&event) {
                    handle.handle_key(&key);
                }
            });
        }
    });

    use_drop(move || overlays.release(id));

    handle
}

/// Keep a window listener alive for as long as the calling component.
pub fn use_window_listener(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) {
    use_hook(move || Rc::new(WindowListener::new(event, handler)));
}

/// Advance `carousel` every `period_ms` while its autoplay is on.
///
/// Any change to the carousel (a tick, a dot click, a pause) cancels the
/// pending tick and schedules a fresh one, so manual navigation restarts the
/// full period.
pub fn use_autoplay(carousel: Signal<Carousel>, period_ms: u32) {
    let mut pending = use_signal(|| None::<Task>);

    use_effect(move || {
        let state = carousel();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        if !state.autoplay() || state.len() < 2 {
            return;
        }

        let mut carousel = carousel;
        let task = spawn(async move {
            sleep(Duration::from_millis(u64::from(period_ms))).await;
            carousel.write().advance();
        });
        pending.set(Some(task));
    });
}
