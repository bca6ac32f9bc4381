use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use super::use_reduced_motion::use_reduced_motion;
use crate::motion::magnetic::{Magnetic, MagneticState};

pub struct MagneticHandle {
    pub node: NodeRef,
    pub style: String,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

fn element_center(node: &NodeRef) -> Option<(f64, f64)> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some((rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0))
}

/// Offsets the bound element toward the pointer while hovered and springs
/// back on leave.
#[hook]
pub fn use_magnetic(magnetic: Magnetic) -> MagneticHandle {
    let node = use_node_ref();
    let reduced = use_reduced_motion();
    let state = use_mut_ref(MagneticState::default);
    let offset = use_state_eq(|| (0.0_f64, 0.0_f64));

    {
        let node = node.clone();
        let state = state.clone();
        let offset = offset.clone();
        use_event_with_window("mousemove", move |event: MouseEvent| {
            if !state.borrow().is_hovered() {
                return;
            }
            let Some(center) = element_center(&node) else {
                return;
            };
            let pointer = (event.client_x() as f64, event.client_y() as f64);
            let moved = state.borrow_mut().pointer_moved(&magnetic, center, pointer, reduced);
            offset.set(moved);
        });
    }

    let onmouseenter = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.borrow_mut().enter())
    };
    let onmouseleave = {
        let state = state.clone();
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| {
            let settled = state.borrow_mut().leave();
            offset.set(settled);
        })
    };

    let style = state.borrow().style();
    MagneticHandle { node, style, onmouseenter, onmouseleave }
}
