use yew::prelude::*;

use crate::hooks::use_scroll_progress::use_scroll_progress;

/// Thin bar along the top of the viewport tracking document scroll.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_scroll_progress();
    let style = format!("transform: scaleX({:.4}); transform-origin: 0 50%;", progress);

    html! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{:.0}", progress * 100.0)}
            style={style}
        />
    }
}
