use std::cell::RefCell;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Last known vertical scroll offset plus everyone reading it. The window
/// `scroll` listener is the only writer.
#[derive(Default)]
pub struct ScrollHub {
    offset: f64,
    next_id: usize,
    subscribers: Vec<(usize, Callback<f64>)>,
}

impl ScrollHub {
    pub fn subscribe(&mut self, callback: Callback<f64>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Returns `true` when the last subscriber is gone.
    pub fn unsubscribe(&mut self, id: usize) -> bool {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.is_empty()
    }

    /// Records `offset` and hands back the callbacks to notify. Callers emit
    /// after releasing the hub so readers may subscribe from inside.
    pub fn publish(&mut self, offset: f64) -> Vec<Callback<f64>> {
        self.offset = offset;
        self.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }
}

thread_local! {
    static HUB: RefCell<ScrollHub> = RefCell::new(ScrollHub::default());
    static LISTENER: RefCell<Option<Closure<dyn FnMut()>>> = RefCell::new(None);
}

fn current_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn install_listener() {
    let Some(window) = web_sys::window() else {
        debug!("No window, scroll offset stays at 0");
        return;
    };

    let scroll_callback = Closure::wrap(Box::new(move || {
        let offset = current_offset();
        let readers = HUB.with(|hub| hub.borrow_mut().publish(offset));
        for reader in readers {
            reader.emit(offset);
        }
    }) as Box<dyn FnMut()>);

    if window
        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        .is_ok()
    {
        LISTENER.with(|listener| *listener.borrow_mut() = Some(scroll_callback));
    }
}

fn remove_listener() {
    let Some(scroll_callback) = LISTENER.with(|listener| listener.borrow_mut().take()) else {
        return;
    };
    if let Some(window) = web_sys::window() {
        let _ = window
            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
    }
}

/// Unsubscribes on drop.
pub struct ScrollSubscription {
    id: usize,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let last = HUB.with(|hub| hub.borrow_mut().unsubscribe(self.id));
        if last {
            remove_listener();
        }
    }
}

/// Registers `callback` for scroll offsets and sends it the current one
/// straight away.
pub fn subscribe(callback: Callback<f64>) -> ScrollSubscription {
    let (id, first) = HUB.with(|hub| {
        let mut hub = hub.borrow_mut();
        let id = hub.subscribe(callback.clone());
        (id, hub.len() == 1)
    });

    if first {
        install_listener();
        let offset = current_offset();
        HUB.with(|hub| hub.borrow_mut().offset = offset);
    }

    let offset = HUB.with(|hub| hub.borrow().offset());
    callback.emit(offset);

    ScrollSubscription { id }
}

#[hook]
pub fn use_scrolled_past(offset: f64) -> bool {
    let past = use_state_eq(|| false);

    {
        let past = past.clone();
        use_effect_with_deps(
            move |offset: &f64| {
                let offset = *offset;
                let subscription = subscribe(Callback::from(move |y: f64| past.set(y > offset)));
                move || drop(subscription)
            },
            offset,
        );
    }

    *past
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Callback<f64>, Rc<RefCell<Vec<f64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (Callback::from(move |y: f64| sink.borrow_mut().push(y)), seen)
    }

    fn emit_all(hub: &mut ScrollHub, offset: f64) {
        for cb in hub.publish(offset) {
            cb.emit(offset);
        }
    }

    #[test]
    fn every_reader_gets_the_offset() {
        let mut hub = ScrollHub::default();
        let (a, seen_a) = recorder();
        let (b, seen_b) = recorder();
        hub.subscribe(a);
        hub.subscribe(b);

        emit_all(&mut hub, 120.0);

        assert_eq!(hub.offset(), 120.0);
        assert_eq!(*seen_a.borrow(), vec![120.0]);
        assert_eq!(*seen_b.borrow(), vec![120.0]);
    }

    #[test]
    fn unsubscribed_reader_hears_nothing() {
        let mut hub = ScrollHub::default();
        let (a, seen_a) = recorder();
        let (b, seen_b) = recorder();
        let id_a = hub.subscribe(a);
        hub.subscribe(b);

        assert!(!hub.unsubscribe(id_a));
        emit_all(&mut hub, 64.0);

        assert!(seen_a.borrow().is_empty());
        assert_eq!(*seen_b.borrow(), vec![64.0]);
    }

    #[test]
    fn last_unsubscribe_is_reported() {
        let mut hub = ScrollHub::default();
        let (a, _) = recorder();
        let id = hub.subscribe(a);
        assert_eq!(hub.len(), 1);
        assert!(hub.unsubscribe(id));
        assert_eq!(hub.len(), 0);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut hub = ScrollHub::default();
        let (a, _) = recorder();
        let (b, _) = recorder();
        let first = hub.subscribe(a);
        hub.unsubscribe(first);
        let second = hub.subscribe(b);
        assert_ne!(first, second);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn listener() -> Option<JsValue> {
        LISTENER.with(|listener| {
            listener
                .borrow()
                .as_ref()
                .map(|callback| callback.as_ref().clone())
        })
    }

    #[wasm_bindgen_test]
    fn new_reader_hears_current_offset_immediately() {
        let heard = Rc::new(Cell::new(None));
        let sink = heard.clone();
        let subscription = subscribe(Callback::from(move |y: f64| sink.set(Some(y))));

        assert_eq!(heard.get(), Some(current_offset()));
        drop(subscription);
    }

    #[wasm_bindgen_test]
    fn readers_share_one_window_listener() {
        assert!(listener().is_none());

        let first = subscribe(Callback::from(|_: f64| ()));
        let installed = listener().unwrap();

        let second = subscribe(Callback::from(|_: f64| ()));
        assert_eq!(listener(), Some(installed.clone()));

        drop(first);
        assert_eq!(listener(), Some(installed));

        drop(second);
        assert!(listener().is_none());
        assert_eq!(HUB.with(|hub| hub.borrow().len()), 0);
    }
}
