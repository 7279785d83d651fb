use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::error::MotionError;

/// Milliseconds on the same clock `requestAnimationFrame` stamps frames with.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

struct Inner {
    window: Window,
    pending: Cell<Option<i32>>,
    stopped: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Inner {
    fn request(&self) -> Result<(), MotionError> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref().ok_or(MotionError::FramesUnavailable)?;
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|_| MotionError::FramesUnavailable)?;
        self.pending.set(Some(id));
        Ok(())
    }

    fn cancel(&self) {
        self.stopped.set(true);
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// Calls `step` once per animation frame until it returns `false`.
///
/// The loop belongs to whoever holds the `FrameLoop`; dropping it cancels the
/// pending frame so `step` never runs again.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    pub fn start<F>(mut step: F) -> Result<Self, MotionError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or(MotionError::FramesUnavailable)?;
        let inner = Rc::new(Inner {
            window,
            pending: Cell::new(None),
            stopped: Cell::new(false),
            callback: RefCell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if step(timestamp) && !inner.stopped.get() {
                // a failed request leaves the value where it is
                let _ = inner.request();
            }
        }) as Box<dyn FnMut(f64)>);

        *inner.callback.borrow_mut() = Some(callback);
        inner.request()?;

        Ok(Self { inner })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}
