use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::MotionError;
use crate::motion::observer::{ObservationHandle, ViewportObserver};
use crate::motion::visibility::{ObserveOptions, VisibilityTracker};

type EntriesClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;
type SharedHandle = Rc<RefCell<Option<ObservationHandle<DomObserver>>>>;

/// A browser `IntersectionObserver` bound to one element.
pub struct DomObserver {
    observer: IntersectionObserver,
    target: Element,
    _callback: EntriesClosure,
}

impl DomObserver {
    fn new(target: Element, options: &ObserveOptions, callback: EntriesClosure) -> Result<Self, MotionError> {
        let window = web_sys::window().ok_or(MotionError::Unsupported("window"))?;
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            return Err(MotionError::Unsupported("IntersectionObserver"));
        }

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold.clamp(0.0, 1.0)));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|_| MotionError::Unsupported("IntersectionObserver"))?;

        Ok(DomObserver { observer, target, _callback: callback })
    }
}

impl ViewportObserver for DomObserver {
    fn observe(&self) {
        self.observer.observe(&self.target);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

#[derive(Clone, PartialEq)]
pub struct InView {
    pub node: NodeRef,
    pub is_visible: bool,
    /// Visibility could not be observed; callers show the final state
    /// without animating.
    pub degraded: bool,
}

/// Reports whether the element bound to `node` is on screen. Hosts without
/// `IntersectionObserver` report visible and degraded straight away.
#[hook]
pub fn use_in_view(options: ObserveOptions) -> InView {
    let node = use_node_ref();
    let is_visible = use_state_eq(|| false);
    let degraded = use_state_eq(|| false);

    {
        let node = node.clone();
        let setter = is_visible.setter();
        let degraded = degraded.setter();
        use_effect_with_deps(
            move |options: &ObserveOptions| {
                let slot = start_observing(&node, options, setter, degraded);
                move || {
                    // Dropping the handle disconnects the observer if a
                    // trigger-once reveal has not already done so.
                    if let Some(slot) = slot {
                        slot.borrow_mut().take();
                    }
                }
            },
            options,
        );
    }

    InView { node, is_visible: *is_visible, degraded: *degraded }
}

fn start_observing(
    node: &NodeRef,
    options: &ObserveOptions,
    set_visible: UseStateSetter<bool>,
    set_degraded: UseStateSetter<bool>,
) -> Option<SharedHandle> {
    let tracker = Rc::new(RefCell::new(VisibilityTracker::new(options)));
    let degrade = |tracker: &RefCell<VisibilityTracker>| {
        let update = tracker.borrow_mut().force_visible();
        set_degraded.set(update.degraded);
        set_visible.set(update.is_visible);
    };

    let Some(element) = node.cast::<Element>() else {
        warn!("use_in_view: node ref is not bound, showing content without animation");
        degrade(tracker.as_ref());
        return None;
    };

    let slot: SharedHandle = Rc::new(RefCell::new(None));
    let callback = {
        let slot = Rc::clone(&slot);
        let tracker = Rc::clone(&tracker);
        let set_visible = set_visible.clone();
        Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let Some(entry) = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last()
            else {
                return;
            };

            let update = tracker.borrow_mut().observe(entry.intersection_ratio(), entry.is_intersecting());
            if update.changed {
                set_visible.set(update.is_visible);
            }
            if update.disconnect {
                debug!("use_in_view: trigger-once reveal fired, disconnecting");
                if let Some(handle) = slot.borrow_mut().as_mut() {
                    handle.release();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    match DomObserver::new(element, options, callback) {
        Ok(observer) => {
            *slot.borrow_mut() = Some(ObservationHandle::start(observer));
            Some(slot)
        }
        Err(err) => {
            warn!("use_in_view: {}, showing content without animation", err);
            degrade(tracker.as_ref());
            None
        }
    }
}
