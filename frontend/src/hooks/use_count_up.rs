use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use yew::prelude::*;

use super::raf::RafLoop;
use super::use_in_view::use_in_view;
use super::use_reduced_motion::use_reduced_motion;
use crate::config;
use crate::motion::count_up::{CountUp, CountUpRun};
use crate::motion::visibility::ObserveOptions;

pub struct CountUpHandle {
    pub node: NodeRef,
    pub display: String,
    pub value: f64,
}

/// Counts from `spec.start` to `spec.end` the first time the bound element
/// scrolls into view. The frame loop is cancelled on unmount.
#[hook]
pub fn use_count_up(spec: CountUp) -> CountUpHandle {
    let in_view = use_in_view(ObserveOptions {
        threshold: config::COUNT_UP_THRESHOLD,
        trigger_once: true,
        ..ObserveOptions::default()
    });
    let reduced = use_reduced_motion();

    let run = use_mut_ref(|| CountUpRun::new(spec.clone()));
    let value = use_state_eq(|| spec.start);

    if let Err(err) = spec.validate() {
        error!("count-up: {}", err);
        if config::is_dev() {
            panic!("{}", err);
        }
    }

    {
        let run = Rc::clone(&run);
        let value = value.clone();
        // A host that cannot observe visibility gets the final value at once.
        let instant = reduced || in_view.degraded;
        use_effect_with_deps(
            move |(visible, instant): &(bool, bool)| {
                let mut frames = None;
                if *visible {
                    if *instant {
                        run.borrow_mut().finish();
                        value.set(run.borrow().value());
                    } else if !run.borrow().is_finished() {
                        frames = Some(start_frames(run, value));
                    }
                }
                move || drop(frames)
            },
            (in_view.is_visible, instant),
        );
    }

    let display = spec.format(*value);
    CountUpHandle { node: in_view.node, display, value: *value }
}

fn start_frames(run: Rc<RefCell<CountUpRun>>, value: UseStateHandle<f64>) -> RafLoop {
    let frames = RafLoop::new(move |timestamp_ms| {
        let mut run = run.borrow_mut();
        if !run.is_running() && !run.is_finished() {
            run.begin(timestamp_ms);
        }
        value.set(run.sample(timestamp_ms));
        !run.is_finished()
    });
    frames.start();
    frames
}
