use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

use crate::config;
use crate::motion::variant::Transition;

/// Accessibility preferences reflected from the host environment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionPreference {
    pub prefers_reduced_motion: bool,
    pub prefers_high_contrast: bool,
}

impl MotionPreference {
    pub fn should_animate(&self) -> bool {
        !self.prefers_reduced_motion
    }

    pub fn transition(&self, normal: Transition) -> Transition {
        if self.prefers_reduced_motion {
            Transition::instant()
        } else {
            normal
        }
    }
}

/// A `matchMedia` subscription, removed on drop.
struct MediaSubscription {
    list: MediaQueryList,
    listener: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl MediaSubscription {
    fn new(list: MediaQueryList, on_change: impl Fn(bool) + 'static) -> Option<Self> {
        let listener = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        match list.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
            Ok(()) => Some(MediaSubscription { list, listener }),
            Err(err) => {
                warn!("matchMedia change listener rejected: {:?}", err);
                None
            }
        }
    }
}

impl Drop for MediaSubscription {
    fn drop(&mut self) {
        let _ = self
            .list
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref());
    }
}

fn media_query(query: &str) -> Option<MediaQueryList> {
    web_sys::window()?.match_media(query).ok().flatten()
}

// Unsupported queries fail open: motion stays enabled.
fn query_matches(query: &str) -> bool {
    media_query(query).map(|list| list.matches()).unwrap_or(false)
}

/// Live result of a media query. Does nothing while `enabled` is false.
#[hook]
fn use_media_query(query: &'static str, enabled: bool) -> bool {
    let matches = use_state_eq(|| enabled && query_matches(query));

    {
        let matches = matches.clone();
        use_effect_with_deps(
            move |enabled: &bool| {
                let subscription = if *enabled {
                    matches.set(query_matches(query));
                    media_query(query).and_then(|list| {
                        let matches = matches.clone();
                        MediaSubscription::new(list, move |now| {
                            debug!("{} changed: {}", query, now);
                            matches.set(now);
                        })
                    })
                } else {
                    None
                };
                move || drop(subscription)
            },
            enabled,
        );
    }

    enabled && *matches
}

#[derive(Properties, PartialEq)]
pub struct MotionPreferenceProviderProps {
    /// Overrides the host preference, for previews and tests.
    #[prop_or_default]
    pub force_reduced_motion: Option<bool>,
    pub children: Children,
}

/// Shares one set of media subscriptions with every motion hook below it.
#[function_component(MotionPreferenceProvider)]
pub fn motion_preference_provider(props: &MotionPreferenceProviderProps) -> Html {
    let reduced = use_media_query(config::REDUCED_MOTION_QUERY, props.force_reduced_motion.is_none());
    let high_contrast = use_media_query(config::HIGH_CONTRAST_QUERY, true);

    let preference = MotionPreference {
        prefers_reduced_motion: props.force_reduced_motion.unwrap_or(reduced),
        prefers_high_contrast: high_contrast,
    };

    html! {
        <ContextProvider<MotionPreference> context={preference}>
            { for props.children.iter() }
        </ContextProvider<MotionPreference>>
    }
}

/// The provider's preference when one is mounted above, otherwise a
/// subscription owned by this component.
#[hook]
pub fn use_motion_preference() -> MotionPreference {
    let context = use_context::<MotionPreference>();
    let reduced = use_media_query(config::REDUCED_MOTION_QUERY, context.is_none());
    context.unwrap_or(MotionPreference { prefers_reduced_motion: reduced, prefers_high_contrast: false })
}

#[hook]
pub fn use_reduced_motion() -> bool {
    use_motion_preference().prefers_reduced_motion
}
