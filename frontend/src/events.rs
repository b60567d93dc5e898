use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, Window};

/// A listener attached to `window` for as long as this value lives.
///
/// Dropping it removes the listener, so keeping one in an effect's cleanup
/// closure ties the subscription to the component's mount.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::attach(event, handler, false)
    }

    /// Same as [`WindowListener::new`] but registered as passive, for
    /// scroll and touch handlers that never call `prevent_default`.
    pub fn passive<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::attach(event, handler, true)
    }

    fn attach<F>(event: &'static str, handler: F, passive: bool) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("Failed to listen for {}: {:?}", event, e);
            return None;
        }

        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;
    use web_sys::Event;

    use super::WindowListener;

    fn fire(name: &str) {
        let window = web_sys::window().unwrap();
        let event = Event::new(name).unwrap();
        window.dispatch_event(&event).unwrap();
    }

    fn counting(hits: &Rc<Cell<u32>>) -> impl FnMut(Event) + 'static {
        let hits = hits.clone();
        move |_| hits.set(hits.get() + 1)
    }

    #[wasm_bindgen_test]
    fn dropped_listener_stops_receiving_events() {
        let hits = Rc::new(Cell::new(0));
        let listener = WindowListener::new("urbandesiii-ping", counting(&hits)).unwrap();

        fire("urbandesiii-ping");
        assert_eq!(hits.get(), 1);

        drop(listener);
        fire("urbandesiii-ping");
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn passive_listener_is_removed_on_drop() {
        let hits = Rc::new(Cell::new(0));
        let listener = WindowListener::passive("urbandesiii-scroll", counting(&hits)).unwrap();
        fire("urbandesiii-scroll");
        fire("urbandesiii-scroll");
        assert_eq!(hits.get(), 2);

        drop(listener);
        fire("urbandesiii-scroll");
        assert_eq!(hits.get(), 2);
    }
}
