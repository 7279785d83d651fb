use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::error::MotionError;

/// Minimum fraction of an element that has to overlap the viewport before it
/// counts as seen. Always in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    /// Content sections fade in early.
    pub const SECTION: Threshold = Threshold(0.2);
    /// Counters wait until half of the number is on screen.
    pub const COUNTER: Threshold = Threshold(0.5);

    pub fn new(value: f64) -> Result<Self, MotionError> {
        // NaN fails both comparisons
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(MotionError::ThresholdOutOfRange(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::SECTION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Not seen yet, or the target never got attached.
    Pending,
    /// Crossed the threshold at least once.
    Visible,
    /// The host cannot tell us, so content is shown as-is.
    Unobservable,
}

impl Visibility {
    /// Whether the content should be drawn in its final, fully visible state.
    pub fn is_revealed(self) -> bool {
        !matches!(self, Visibility::Pending)
    }
}

/// One-way latch fed with intersection ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealLatch {
    threshold: Threshold,
    visible: bool,
}

impl RevealLatch {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold, visible: false }
    }

    /// Records one observation. Returns `true` only for the observation that
    /// flips the latch; every later call is a no-op.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || ratio < self.threshold.get() || ratio.is_nan() {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// A live IntersectionObserver subscription on a single element.
/// Dropping it disconnects the observer.
pub struct ViewportObservation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObservation {
    pub fn attach<F>(target: &Element, threshold: Threshold, mut on_ratio: F) -> Result<Self, MotionError>
    where
        F: FnMut(f64, &IntersectionObserver) + 'static,
    {
        if !observer_supported() {
            return Err(MotionError::ObserverUnavailable);
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_ratio(entry.intersection_ratio(), &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.get()));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| MotionError::ObserverUnavailable)?;
        observer.observe(target);

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for ViewportObservation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

pub struct InView {
    pub node: NodeRef,
    pub visibility: Visibility,
}

/// Tracks when the element behind the returned `NodeRef` first scrolls into
/// view. The subscription lives from mount until unmount (or until the
/// threshold changes) and stops observing once the latch has fired.
#[hook]
pub fn use_in_view(threshold: Threshold) -> InView {
    let node = use_node_ref();
    let visibility = use_state_eq(|| Visibility::Pending);

    {
        let node = node.clone();
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let mut observation = None;

                if *visibility == Visibility::Pending {
                    if let Some(target) = node.cast::<Element>() {
                        let latch = Rc::new(RefCell::new(RevealLatch::new(threshold)));
                        let setter = visibility.setter();
                        let attached = ViewportObservation::attach(&target, threshold, move |ratio, observer| {
                            if latch.borrow_mut().observe(ratio) {
                                setter.set(Visibility::Visible);
                                // Nothing left to learn from this element
                                observer.disconnect();
                            }
                        });
                        match attached {
                            Ok(live) => observation = Some(live),
                            Err(_) => visibility.set(Visibility::Unobservable),
                        }
                    }
                }

                move || drop(observation)
            },
            threshold,
        );
    }

    InView {
        node,
        visibility: *visibility,
    }
}
