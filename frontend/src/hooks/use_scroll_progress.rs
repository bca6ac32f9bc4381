use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::motion::parallax::scroll_progress;

fn read_scroll_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_top, document_height, viewport)
}

/// Document scroll progress in 0..=1, recomputed on scroll and resize.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(read_scroll_progress);

    {
        let progress = progress.clone();
        use_event_with_window("scroll", move |_: Event| progress.set(read_scroll_progress()));
    }
    {
        let progress = progress.clone();
        use_event_with_window("resize", move |_: Event| progress.set(read_scroll_progress()));
    }

    *progress
}
