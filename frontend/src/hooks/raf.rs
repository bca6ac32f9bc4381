//! `requestAnimationFrame` loop for numeric animations.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type RafClosure = Closure<dyn FnMut(f64)>;

/// Calls `callback` with the frame timestamp (ms) every animation frame
/// until it returns `false`, [`RafLoop::stop`] is called, or the loop is
/// dropped.
pub struct RafLoop {
    inner: Rc<RafInner>,
}

struct RafInner {
    closure: RefCell<Option<RafClosure>>,
    callback: RefCell<Box<dyn FnMut(f64) -> bool>>,
    running: Cell<bool>,
    raf_id: Cell<Option<i32>>,
}

impl RafInner {
    fn request_frame(&self) {
        let Some(window) = web_sys::window() else {
            self.running.set(false);
            return;
        };
        if let Some(closure) = self.closure.borrow().as_ref() {
            match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(err) => {
                    warn!("requestAnimationFrame failed: {:?}", err);
                    self.running.set(false);
                }
            }
        }
    }
}

impl RafLoop {
    pub fn new(callback: impl FnMut(f64) -> bool + 'static) -> Self {
        RafLoop {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                raf_id: Cell::new(None),
            }),
        }
    }

    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if !inner.running.get() {
                return;
            }
            inner.raf_id.set(None);
            let keep_going = (inner.callback.borrow_mut())(timestamp_ms);
            if keep_going && inner.running.get() {
                inner.request_frame();
            } else {
                inner.running.set(false);
            }
        }) as Box<dyn FnMut(f64)>);

        *self.inner.closure.borrow_mut() = Some(closure);
        self.inner.request_frame();
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        if let (Some(id), Some(window)) = (self.inner.raf_id.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        // The closure holds an Rc back to `inner`; release it to break the cycle.
        self.inner.closure.borrow_mut().take();
    }
}
