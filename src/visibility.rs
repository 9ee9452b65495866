//! Scroll-triggered reveal.
//!
//! A [`VisibilityTracker`] watches one element through the browser's
//! `IntersectionObserver` and latches a boolean the first time the visible
//! share of the element reaches the configured threshold. After that it
//! disconnects and never reports again: sections animate in once and stay
//! put even when scrolled back out of view.
//!
//! Sections normally go through [`use_reveal`], which ties a tracker to the
//! lifetime of the component owning the [`NodeRef`].

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("intersection observer unavailable: {0}")]
    Unsupported(String),
}

impl From<JsValue> for ObserveError {
    fn from(value: JsValue) -> Self {
        ObserveError::Unsupported(format!("{:?}", value))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    threshold: f64,
}

impl TrackerConfig {
    /// Out-of-range thresholds are clamped into `[0, 1]`, NaN becomes 0.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new(crate::config::REVEAL_THRESHOLD)
    }
}

/// One observation update for a single element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub ratio: f64,
    pub intersecting: bool,
}

impl Intersection {
    #[cfg(test)]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            intersecting: ratio > 0.0,
        }
    }

    fn from_entry(entry: &IntersectionObserverEntry) -> Self {
        Self {
            ratio: entry.intersection_ratio(),
            intersecting: entry.is_intersecting(),
        }
    }

    // A zero threshold still needs some overlap: neither the initial
    // "not intersecting" report nor an edge-touching zero-area one counts.
    fn crosses(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio > 0.0 && self.ratio >= threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Watching,
    Revealed,
    Disposed,
}

/// The tracker's state machine, free of any browser types.
#[derive(Debug)]
pub struct RevealLatch {
    threshold: f64,
    phase: Phase,
}

impl RevealLatch {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            threshold: config.threshold(),
            phase: Phase::Watching,
        }
    }

    /// Feeds one update in. Returns `true` only for the update that flips
    /// the latch.
    pub fn observe(&mut self, intersection: Intersection) -> bool {
        if self.phase != Phase::Watching || !intersection.crosses(self.threshold) {
            return false;
        }
        self.phase = Phase::Revealed;
        true
    }

    /// Stops watching. A revealed latch stays revealed.
    pub fn dispose(&mut self) {
        if self.phase == Phase::Watching {
            self.phase = Phase::Disposed;
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }
}

struct Inner {
    latch: RevealLatch,
    observer: Option<IntersectionObserver>,
    on_reveal: Option<Box<dyn Fn()>>,
}

impl Inner {
    fn release(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

pub struct VisibilityTracker {
    inner: Rc<RefCell<Inner>>,
    // Kept alive for as long as the observer may call into it.
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl VisibilityTracker {
    /// Starts watching `element`. `on_reveal` runs once, when the latch
    /// flips. With no element, or without observer support in the host,
    /// nothing is observed and the tracker stays hidden.
    pub fn observe<F>(element: Option<&Element>, config: TrackerConfig, on_reveal: F) -> Self
    where
        F: Fn() + 'static,
    {
        let inner = Rc::new(RefCell::new(Inner {
            latch: RevealLatch::new(config),
            observer: None,
            on_reveal: Some(Box::new(on_reveal)),
        }));

        let Some(element) = element else {
            debug!("No element mounted, skipping visibility observation");
            return Self { inner, _callback: None };
        };

        match attach(&inner, element, config) {
            Ok(callback) => Self {
                inner,
                _callback: Some(callback),
            },
            Err(e) => {
                debug!("Reveal disabled for element: {}", e);
                Self { inner, _callback: None }
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().latch.is_revealed()
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.inner.borrow().latch.phase()
    }

    /// Stops observing. Safe to call any number of times.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.latch.dispose();
        inner.on_reveal = None;
        inner.release();
    }
}

impl Drop for VisibilityTracker {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn attach(
    inner: &Rc<RefCell<Inner>>,
    element: &Element,
    config: TrackerConfig,
) -> Result<Closure<dyn FnMut(Array, IntersectionObserver)>, ObserveError> {
    let callback = {
        let inner = inner.clone();
        Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let updates = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Intersection::from_entry(&entry));
            deliver(&inner, updates);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold()));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // Registration queues an initial update, so an element that is already
    // on screen reveals without waiting for a scroll.
    observer.observe(element);
    inner.borrow_mut().observer = Some(observer);

    Ok(callback)
}

fn deliver(inner: &Rc<RefCell<Inner>>, updates: impl IntoIterator<Item = Intersection>) {
    let on_reveal = {
        let mut inner = inner.borrow_mut();
        let mut flipped = false;
        for update in updates {
            if inner.latch.observe(update) {
                flipped = true;
                break;
            }
        }
        if !flipped {
            return;
        }
        inner.release();
        inner.on_reveal.take()
    };

    // Borrow released first: the callback may re-render and tear us down.
    if let Some(on_reveal) = on_reveal {
        on_reveal();
    }
}

/// Reveal flag for the element behind `node`, latched once it is at least
/// `config.threshold()` visible. The tracker owns the flag; the hook only
/// re-renders when it flips.
#[hook]
pub fn use_reveal(node: NodeRef, config: TrackerConfig) -> bool {
    let tracker = use_mut_ref(|| None::<VisibilityTracker>);
    let rerender = use_force_update();

    {
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |(node, config): &(NodeRef, TrackerConfig)| {
                let element = node.cast::<Element>();
                *tracker.borrow_mut() = Some(VisibilityTracker::observe(
                    element.as_ref(),
                    *config,
                    move || rerender.force_update(),
                ));
                move || {
                    let released = tracker.borrow_mut().take();
                    if let Some(released) = released {
                        released.dispose();
                    }
                }
            },
            (node, config),
        );
    }

    let visible = tracker
        .borrow()
        .as_ref()
        .map_or(false, VisibilityTracker::is_visible);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_tracker(config: TrackerConfig) -> (VisibilityTracker, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let tracker = VisibilityTracker::observe(None, config, move || {
            counter.set(counter.get() + 1);
        });
        (tracker, fired)
    }

    #[test]
    fn starts_hidden_for_any_threshold() {
        for t in [0.0, 0.1, 0.25, 0.5, 0.75, 1.0] {
            let latch = RevealLatch::new(TrackerConfig::new(t));
            assert!(!latch.is_revealed(), "threshold {t}");
            assert_eq!(latch.phase(), Phase::Watching);
        }
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(TrackerConfig::new(-0.5).threshold(), 0.0);
        assert_eq!(TrackerConfig::new(1.7).threshold(), 1.0);
        assert_eq!(TrackerConfig::new(f64::NAN).threshold(), 0.0);
        assert_eq!(TrackerConfig::default().threshold(), 0.1);
    }

    #[test]
    fn reveal_latches_after_scrolling_back_out() {
        let mut latch = RevealLatch::new(TrackerConfig::new(0.1));

        assert!(!latch.observe(Intersection::from_ratio(0.0)));
        assert!(!latch.is_revealed());

        assert!(latch.observe(Intersection::from_ratio(0.5)));
        assert!(latch.is_revealed());

        assert!(!latch.observe(Intersection::from_ratio(0.0)));
        assert!(latch.is_revealed());
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut latch = RevealLatch::new(TrackerConfig::new(0.5));
        assert!(!latch.observe(Intersection::from_ratio(0.49)));
        assert!(latch.observe(Intersection::from_ratio(0.5)));
    }

    #[test]
    fn zero_threshold_needs_some_overlap() {
        let mut latch = RevealLatch::new(TrackerConfig::new(0.0));
        assert!(!latch.observe(Intersection {
            ratio: 0.0,
            intersecting: false,
        }));
        // Edge touching the viewport: intersecting, but no visible area.
        assert!(!latch.observe(Intersection {
            ratio: 0.0,
            intersecting: true,
        }));
        assert!(!latch.is_revealed());
        assert!(latch.observe(Intersection::from_ratio(0.01)));
    }

    #[test]
    fn fully_visible_on_first_update_reveals() {
        let mut latch = RevealLatch::new(TrackerConfig::new(1.0));
        assert!(latch.observe(Intersection::from_ratio(1.0)));
        assert!(latch.is_revealed());
    }

    #[test]
    fn dispose_before_crossing_stays_hidden() {
        let mut latch = RevealLatch::new(TrackerConfig::new(0.1));
        latch.dispose();
        assert_eq!(latch.phase(), Phase::Disposed);
        assert!(!latch.observe(Intersection::from_ratio(1.0)));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn dispose_after_reveal_keeps_revealed() {
        let mut latch = RevealLatch::new(TrackerConfig::new(0.1));
        latch.observe(Intersection::from_ratio(0.3));
        latch.dispose();
        latch.dispose();
        assert_eq!(latch.phase(), Phase::Revealed);
    }

    #[test]
    fn missing_element_never_reveals() {
        let (tracker, fired) = counting_tracker(TrackerConfig::new(0.1));
        assert!(!tracker.is_visible());
        tracker.dispose();
        tracker.dispose();
        assert!(!tracker.is_visible());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn reveal_callback_runs_once() {
        let (tracker, fired) = counting_tracker(TrackerConfig::new(0.1));

        deliver(&tracker.inner, [Intersection::from_ratio(0.0)]);
        assert_eq!(fired.get(), 0);

        deliver(
            &tracker.inner,
            [Intersection::from_ratio(0.6), Intersection::from_ratio(0.9)],
        );
        deliver(&tracker.inner, [Intersection::from_ratio(1.0)]);

        assert!(tracker.is_visible());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn no_updates_after_dispose() {
        let (tracker, fired) = counting_tracker(TrackerConfig::new(0.1));
        tracker.dispose();
        deliver(&tracker.inner, [Intersection::from_ratio(1.0)]);
        assert!(!tracker.is_visible());
        assert_eq!(tracker.phase(), Phase::Disposed);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn trackers_are_independent() {
        let (first, first_fired) = counting_tracker(TrackerConfig::new(0.1));
        let (second, second_fired) = counting_tracker(TrackerConfig::new(0.1));

        deliver(&first.inner, [Intersection::from_ratio(0.5)]);

        assert!(first.is_visible());
        assert!(!second.is_visible());
        assert_eq!(first_fired.get(), 1);
        assert_eq!(second_fired.get(), 0);

        second.dispose();
        assert!(first.is_visible());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted_box() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        element
            .set_attribute("style", "width: 100px; height: 100px;")
            .unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    async fn element_in_view_reveals_without_scrolling() {
        let element = mounted_box();
        let tracker = VisibilityTracker::observe(Some(&element), TrackerConfig::new(1.0), || ());
        assert!(!tracker.is_visible());

        TimeoutFuture::new(100).await;

        assert!(tracker.is_visible());
        element.remove();
    }

    #[function_component(RevealBox)]
    fn reveal_box() -> Html {
        let node = use_node_ref();
        let visible = use_reveal(node.clone(), TrackerConfig::new(0.5));
        html! {
            <div ref={node} class={classes!("box", visible.then(|| "shown"))}
                style="width: 100px; height: 100px;"></div>
        }
    }

    #[wasm_bindgen_test]
    async fn hook_rerenders_once_tracker_reveals() {
        let root = mounted_box();
        let app = yew::Renderer::<RevealBox>::with_root(root.clone()).render();

        TimeoutFuture::new(200).await;

        let shown = root
            .first_element_child()
            .map_or(false, |el| el.class_name().split_whitespace().any(|c| c == "shown"));
        assert!(shown);

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn disposed_tracker_stays_hidden() {
        let element = mounted_box();
        let tracker = VisibilityTracker::observe(Some(&element), TrackerConfig::new(0.1), || ());
        tracker.dispose();

        TimeoutFuture::new(100).await;

        assert!(!tracker.is_visible());
        element.remove();
    }
}
