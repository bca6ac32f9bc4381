use log::error;
use yew::prelude::*;

use crate::config;
use crate::error::MotionError;
use crate::hooks::use_in_view::use_in_view;
use crate::hooks::use_reduced_motion::use_reduced_motion;
use crate::motion::reveal::{RevealConfig, RevealController};
use crate::motion::variant::{Direction, Variant};

/// Logs a motion configuration error; development builds stop here so a
/// broken section never ships silently.
pub fn report_config_error(err: &MotionError) {
    error!("motion config error: {}", err);
    gloo_console::error!(format!("motion config error: {}", err));
    if config::is_dev() {
        panic!("{}", err);
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(Variant::FadeUp)]
    pub variant: Variant,
    #[prop_or_default]
    pub direction: Option<Direction>,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub duration: Option<f64>,
    #[prop_or_default]
    pub distance: Option<f64>,
    #[prop_or(config::DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(true)]
    pub trigger_once: bool,
    #[prop_or_default]
    pub stagger: bool,
    #[prop_or(config::DEFAULT_STAGGER_S)]
    pub stagger_delay: f64,
    /// Replaces every field above when set, e.g. with config parsed from JSON.
    #[prop_or_default]
    pub config: Option<RevealConfig>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or(AttrValue::Static("div"))]
    pub item_tag: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

impl RevealProps {
    fn to_config(&self) -> RevealConfig {
        if let Some(config) = &self.config {
            return config.clone();
        }
        RevealConfig {
            variant: self.variant,
            direction: self.direction,
            delay: self.delay,
            duration: self.duration,
            distance: self.distance,
            threshold: self.threshold,
            trigger_once: self.trigger_once,
            stagger: self.stagger,
            stagger_delay: self.stagger_delay,
            ..RevealConfig::default()
        }
    }
}

/// Reveals its children when scrolled into view. With `stagger`, each child
/// is wrapped and delayed by its index.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = props.to_config();
    let in_view = use_in_view(config.observe_options());
    let reduced = use_reduced_motion();
    let controller = use_mut_ref(|| {
        let controller = RevealController::new(config.clone());
        if let Err(err) = &controller {
            report_config_error(err);
        }
        controller
    });

    let tag = props.tag.to_string();
    let class = classes!("reveal", props.class.clone());
    let mut controller = controller.borrow_mut();
    let controller = match controller.as_mut() {
        Ok(controller) => controller,
        // Release builds fall back to static, readable content.
        Err(_) => {
            return html! {
                <@{tag} ref={in_view.node.clone()} class={class}>
                    { for props.children.iter() }
                </@>
            };
        }
    };

    if in_view.degraded {
        controller.degrade();
    } else {
        controller.on_visibility(in_view.is_visible, reduced);
    }

    if controller.config().stagger {
        let inline = props.item_tag.as_str() != "div";
        let frames = controller.child_frames(props.children.len(), reduced);
        let items = props.children.iter().zip(frames).map(|(child, frame)| {
            let mut style = frame.style();
            if inline {
                style.insert_str(0, "display: inline-block; ");
            }
            html! {
                <@{props.item_tag.to_string()} class="reveal-item" style={style}>
                    { child }
                </@>
            }
        });
        html! {
            <@{tag} ref={in_view.node.clone()} class={class}>
                { for items }
            </@>
        }
    } else {
        html! {
            <@{tag} ref={in_view.node.clone()} class={class} style={controller.frame(reduced).style()}>
                { for props.children.iter() }
            </@>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionRevealProps {
    #[prop_or(Variant::FadeUp)]
    pub variant: Variant,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub stagger: bool,
    #[prop_or_default]
    pub children: Children,
}

/// A `<section>` whose content reveals as a block.
#[function_component(SectionReveal)]
pub fn section_reveal(props: &SectionRevealProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("marketing-section", props.class.clone())}>
            <Reveal variant={props.variant} stagger={props.stagger}>
                { for props.children.iter() }
            </Reveal>
        </section>
    }
}
