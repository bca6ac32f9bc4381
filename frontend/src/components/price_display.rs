use yew::prelude::*;

use super::count_up::CountUpNumber;
use crate::motion::count_up::format_number;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum PriceSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PriceSize {
    fn class(self) -> &'static str {
        match self {
            PriceSize::Small => "price-sm",
            PriceSize::Medium => "price-md",
            PriceSize::Large => "price-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PriceDisplayProps {
    pub amount: f64,
    #[prop_or(AttrValue::Static("Rp"))]
    pub currency: AttrValue,
    #[prop_or_default]
    pub period: Option<AttrValue>,
    #[prop_or_default]
    pub size: PriceSize,
    /// Counts the amount up when it scrolls into view.
    #[prop_or(true)]
    pub animate: bool,
    #[prop_or(1500.0)]
    pub duration_ms: f64,
}

#[function_component(PriceDisplay)]
pub fn price_display(props: &PriceDisplayProps) -> Html {
    html! {
        <div class={classes!("price-display", props.size.class())}>
            <span class="price-currency">{ &props.currency }</span>
            <span class="price-amount">
                if props.animate {
                    <CountUpNumber end={props.amount} duration_ms={props.duration_ms} />
                } else {
                    { format_number(props.amount, 0) }
                }
            </span>
            if let Some(period) = &props.period {
                <span class="price-period">{ format!("/{}", period) }</span>
            }
        </div>
    }
}
