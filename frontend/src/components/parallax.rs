use yew::prelude::*;

use crate::config;
use crate::hooks::use_parallax::use_parallax;
use crate::motion::parallax::Parallax;

#[derive(Properties, PartialEq)]
pub struct ParallaxContainerProps {
    #[prop_or(config::PARALLAX_OFFSET)]
    pub offset: f64,
    #[prop_or(config::PARALLAX_SPEED)]
    pub speed: f64,
    #[prop_or_default]
    pub fade: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ParallaxContainer)]
pub fn parallax_container(props: &ParallaxContainerProps) -> Html {
    let parallax = use_parallax(Parallax { offset: props.offset, speed: props.speed }, props.fade);

    html! {
        <div ref={parallax.node} class={classes!("parallax", props.class.clone())} style={parallax.style}>
            { for props.children.iter() }
        </div>
    }
}
