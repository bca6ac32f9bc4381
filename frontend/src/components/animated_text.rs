use yew::prelude::*;

use super::reveal::Reveal;
use crate::config;
use crate::motion::variant::Variant;

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub text: AttrValue,
    #[prop_or(Variant::FadeUp)]
    pub variant: Variant,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Reveals a line of text word by word.
#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let words = props.text.split_whitespace().map(|word| {
        html! { <span class="animated-word">{ word }{ "\u{00a0}" }</span> }
    });

    html! {
        <Reveal
            variant={props.variant}
            delay={props.delay}
            stagger={true}
            stagger_delay={config::TEXT_STAGGER_S}
            tag={props.tag.clone()}
            item_tag="span"
            class={classes!("animated-text", props.class.clone())}
        >
            { for words }
        </Reveal>
    }
}
