use gloo_timers::callback::Timeout;
use serde::Deserialize;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_reduced_motion::use_motion_preference;
use crate::motion::accordion::{Accordion, AccordionItem};
use crate::motion::easing::Easing;
use crate::motion::variant::Transition;

/// Lets the browser measure the panel's height before it animates to zero.
const COLLAPSE_START_MS: u32 = 20;

#[derive(Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Properties, PartialEq)]
struct FaqPanelProps {
    id: AttrValue,
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<AttrValue>,
}

#[function_component(FaqPanel)]
fn faq_panel(props: &FaqPanelProps) -> Html {
    let content = use_node_ref();
    let preference = use_motion_preference();
    let reduced = !preference.should_animate();
    let motion = preference.transition(Transition::tween(
        f64::from(config::ACCORDION_DURATION_MS) / 1000.0,
        Easing::SMOOTH,
    ));
    let item = use_mut_ref(|| AccordionItem::new(props.is_open));
    let height = use_state_eq(|| if props.is_open { "auto".to_string() } else { "0px".to_string() });

    {
        let content = content.clone();
        let height = height.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut pending = None;
                if item.borrow().is_open() != *open {
                    let natural = content
                        .cast::<HtmlElement>()
                        .map(|element| element.scroll_height() as f64)
                        .unwrap_or(0.0);
                    let step = item.borrow_mut().toggle(natural);

                    if reduced {
                        height.set(if *open { "auto".to_string() } else { "0px".to_string() });
                    } else if *open {
                        height.set(format!("{}px", step.to));
                        let height = height.clone();
                        pending = Some(Timeout::new(config::ACCORDION_DURATION_MS, move || {
                            height.set("auto".to_string());
                        }));
                    } else {
                        height.set(format!("{}px", step.from));
                        let height = height.clone();
                        pending = Some(Timeout::new(COLLAPSE_START_MS, move || {
                            height.set("0px".to_string());
                        }));
                    }
                }
                // Dropping a pending Timeout cancels it.
                move || drop(pending)
            },
            props.is_open,
        );
    }

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let id = props.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.clone());
        })
    };

    let transition = if motion.is_instant() {
        "none".to_string()
    } else {
        format!("height {}ms {}", config::ACCORDION_DURATION_MS, motion.easing.to_css())
    };
    let style = format!("height: {}; overflow: hidden; transition: {};", *height, transition);

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={onclick} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if props.is_open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer" style={style}>
                <div ref={content} class="faq-answer-inner">
                    <p>{ &props.answer }</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
    #[prop_or_default]
    pub initially_open: Option<String>,
}

/// FAQ list with at most one answer open at a time.
#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let accordion = {
        let initially_open = props.initially_open.clone();
        use_state(move || initially_open.map(Accordion::with_open).unwrap_or_default())
    };

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |id: AttrValue| {
            let mut next = (*accordion).clone();
            next.toggle(&id);
            accordion.set(next);
        })
    };

    html! {
        <div class="faq-list">
            { for props.entries.iter().map(|entry| html! {
                <FaqPanel
                    key={entry.id.clone()}
                    id={entry.id.clone()}
                    question={entry.question.clone()}
                    answer={entry.answer.clone()}
                    is_open={accordion.is_open(&entry.id)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </div>
    }
}
