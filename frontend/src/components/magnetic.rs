use yew::prelude::*;

use crate::config;
use crate::hooks::use_magnetic::use_magnetic;
use crate::motion::magnetic::Magnetic;

#[derive(Properties, PartialEq)]
pub struct MagneticWrapperProps {
    #[prop_or(config::MAGNETIC_STRENGTH)]
    pub strength: f64,
    #[prop_or(config::MAGNETIC_DISTANCE)]
    pub distance: f64,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MagneticWrapper)]
pub fn magnetic_wrapper(props: &MagneticWrapperProps) -> Html {
    let magnetic = use_magnetic(Magnetic {
        strength: props.strength,
        distance: props.distance,
        disabled: props.disabled,
    });

    html! {
        <div
            ref={magnetic.node}
            class={classes!("magnetic", props.class.clone())}
            style={magnetic.style}
            onmouseenter={magnetic.onmouseenter}
            onmouseleave={magnetic.onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}
