use yew::prelude::*;

use crate::config;
use crate::hooks::use_count_up::use_count_up;
use crate::motion::count_up::CountUp;

#[derive(Properties, PartialEq)]
pub struct CountUpNumberProps {
    pub end: f64,
    #[prop_or_default]
    pub start: f64,
    #[prop_or(config::COUNT_UP_DURATION_MS)]
    pub duration_ms: f64,
    #[prop_or_default]
    pub decimals: usize,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CountUpNumber)]
pub fn count_up_number(props: &CountUpNumberProps) -> Html {
    let counter = use_count_up(CountUp {
        start: props.start,
        end: props.end,
        duration_ms: props.duration_ms,
        decimals: props.decimals,
        prefix: props.prefix.to_string(),
        suffix: props.suffix.to_string(),
    });

    html! {
        <span ref={counter.node} class={classes!("count-up", props.class.clone())}>
            { counter.display }
        </span>
    }
}
