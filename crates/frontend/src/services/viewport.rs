//! Window width and the `resize` listener that tracks it.

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// Current `window.innerWidth` in CSS px; unbounded when there is no window.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// A `resize` listener on `window`, removed again when dropped.
pub struct ResizeSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ResizeSubscription {
    /// Call `on_resize` with the new viewport width on every `resize` event.
    pub fn new(mut on_resize: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(move || on_resize(viewport_width()));

        if let Err(err) = window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        {
            warn!("Could not listen for resize events: {err:?}");
            return None;
        }

        Some(Self { window, callback })
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref())
        {
            warn!("Could not remove resize listener: {err:?}");
        }
    }
}
