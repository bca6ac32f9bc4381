use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use super::use_reduced_motion::use_reduced_motion;
use crate::motion::parallax::{element_progress, Parallax};

fn read_element_progress(node: &NodeRef) -> f64 {
    let (Some(element), Some(window)) = (node.cast::<Element>(), web_sys::window()) else {
        return 0.5;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    element_progress(rect.top(), rect.height(), viewport)
}

pub struct ParallaxHandle {
    pub node: NodeRef,
    pub progress: f64,
    pub style: String,
}

/// Vertical offset for the element bound to `node`, derived from its pass
/// through the viewport.
#[hook]
pub fn use_parallax(parallax: Parallax, fade: bool) -> ParallaxHandle {
    let node = use_node_ref();
    let reduced = use_reduced_motion();
    // Centered until the first measurement so nothing jumps on mount.
    let progress = use_state_eq(|| 0.5);

    {
        let node = node.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                progress.set(read_element_progress(&node));
                || ()
            },
            (),
        );
    }
    {
        let node = node.clone();
        let progress = progress.clone();
        use_event_with_window("scroll", move |_: Event| progress.set(read_element_progress(&node)));
    }

    ParallaxHandle {
        node,
        progress: *progress,
        style: parallax.style(*progress, reduced, fade),
    }
}
