//! Named animation variants resolved into hidden/visible presentation pairs.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::easing::Easing;
use crate::error::MotionError;

const FADE_DISTANCE_PX: f64 = 20.0;
const SLIDE_DISTANCE_PCT: f64 = 100.0;
const SMOOTH_DURATION_S: f64 = 0.3;
const FAST_DURATION_S: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    pub fn is_zero(&self) -> bool {
        matches!(*self, Length::Px(v) | Length::Percent(v) if v == 0.0)
    }

    fn negate(self) -> Self {
        match self {
            Length::Px(v) => Length::Px(-v),
            Length::Percent(v) => Length::Percent(-v),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Presentation properties animated between states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationState {
    pub opacity: f64,
    pub x: Length,
    pub y: Length,
    pub scale: f64,
    pub skew_y: f64,
    pub rotate: f64,
    pub rotate_y: f64,
}

impl PresentationState {
    pub const IDENTITY: PresentationState = PresentationState {
        opacity: 1.0,
        x: Length::Px(0.0),
        y: Length::Px(0.0),
        scale: 1.0,
        skew_y: 0.0,
        rotate: 0.0,
        rotate_y: 0.0,
    };

    pub fn hidden() -> Self {
        PresentationState { opacity: 0.0, ..Self::IDENTITY }
    }

    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.rotate_y != 0.0 {
            parts.push("perspective(1000px)".to_string());
        }
        if !self.x.is_zero() || !self.y.is_zero() {
            parts.push(format!("translate3d({}, {}, 0)", self.x, self.y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.skew_y != 0.0 {
            parts.push(format!("skewY({}deg)", self.skew_y));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", self.rotate_y));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    pub fn to_css(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: Easing,
    pub stagger_s: Option<f64>,
}

impl Transition {
    pub fn tween(duration_s: f64, easing: Easing) -> Self {
        Transition { duration_s, delay_s: 0.0, easing, stagger_s: None }
    }

    pub fn spring(easing: Easing) -> Self {
        let duration_s = easing.natural_duration_s().unwrap_or(SMOOTH_DURATION_S);
        Transition::tween(duration_s, easing)
    }

    pub fn instant() -> Self {
        Transition::tween(0.0, Easing::Linear)
    }

    pub fn is_instant(&self) -> bool {
        self.duration_s == 0.0 && self.delay_s == 0.0
    }

    pub fn with_delay(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    pub fn with_stagger(mut self, stagger_s: f64) -> Self {
        self.stagger_s = Some(stagger_s);
        self
    }

    pub fn with_duration(mut self, duration_s: f64) -> Self {
        self.duration_s = duration_s;
        self
    }

    pub fn to_css(&self) -> String {
        if self.is_instant() {
            return "transition: none;".to_string();
        }
        let timing = format!(
            "{} {} {}",
            seconds(self.duration_s),
            self.easing.to_css(),
            seconds(self.delay_s)
        );
        format!("transition: opacity {timing}, transform {timing};")
    }
}

fn seconds(value: f64) -> String {
    format!("{}s", (value * 1000.0).round() / 1000.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Variant {
    Fade,
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Scale,
    ScaleCenter,
    SlideLeft,
    SlideRight,
    SlideUp,
    SlideDown,
    Flip,
    Bounce,
    Rotate,
    RevealText,
    Hero,
    Feature,
    Testimonial,
}

// Markup names, first entry per variant is canonical.
const VARIANT_NAMES: &[(&str, Variant)] = &[
    ("fadeIn", Variant::Fade),
    ("fade", Variant::Fade),
    ("fadeInUp", Variant::FadeUp),
    ("fadeUp", Variant::FadeUp),
    ("fadeInDown", Variant::FadeDown),
    ("fadeDown", Variant::FadeDown),
    ("fadeInLeft", Variant::FadeLeft),
    ("fadeLeft", Variant::FadeLeft),
    ("fadeInRight", Variant::FadeRight),
    ("fadeRight", Variant::FadeRight),
    ("scaleIn", Variant::Scale),
    ("scale", Variant::Scale),
    ("scaleInCenter", Variant::ScaleCenter),
    ("slideInLeft", Variant::SlideLeft),
    ("slideInRight", Variant::SlideRight),
    ("slideInUp", Variant::SlideUp),
    ("slideInDown", Variant::SlideDown),
    ("flipIn", Variant::Flip),
    ("bounceIn", Variant::Bounce),
    ("bounce", Variant::Bounce),
    ("rotateIn", Variant::Rotate),
    ("revealText", Variant::RevealText),
    ("reveal", Variant::RevealText),
    ("hero", Variant::Hero),
    ("feature", Variant::Feature),
    ("testimonial", Variant::Testimonial),
];

impl Variant {
    #[cfg(test)]
    pub const ALL: [Variant; 18] = [
        Variant::Fade,
        Variant::FadeUp,
        Variant::FadeDown,
        Variant::FadeLeft,
        Variant::FadeRight,
        Variant::Scale,
        Variant::ScaleCenter,
        Variant::SlideLeft,
        Variant::SlideRight,
        Variant::SlideUp,
        Variant::SlideDown,
        Variant::Flip,
        Variant::Bounce,
        Variant::Rotate,
        Variant::RevealText,
        Variant::Hero,
        Variant::Feature,
        Variant::Testimonial,
    ];

    pub fn name(&self) -> &'static str {
        VARIANT_NAMES
            .iter()
            .find(|(_, variant)| variant == self)
            .map(|(name, _)| *name)
            .unwrap_or("fadeIn")
    }

    /// Re-aims the fade and slide families at `direction`; other variants
    /// have a fixed motion and ignore it.
    pub fn toward(self, direction: Direction) -> Variant {
        use Variant::*;
        match self {
            Fade | FadeUp | FadeDown | FadeLeft | FadeRight => match direction {
                Direction::Up => FadeUp,
                Direction::Down => FadeDown,
                Direction::Left => FadeLeft,
                Direction::Right => FadeRight,
            },
            SlideLeft | SlideRight | SlideUp | SlideDown => match direction {
                Direction::Up => SlideUp,
                Direction::Down => SlideDown,
                Direction::Left => SlideLeft,
                Direction::Right => SlideRight,
            },
            other => other,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = MotionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        VARIANT_NAMES
            .iter()
            .find(|(candidate, _)| candidate.to_lowercase() == wanted)
            .map(|(_, variant)| *variant)
            .ok_or_else(|| MotionError::UnknownVariant(name.to_string()))
    }
}

impl TryFrom<String> for Variant {
    type Error = MotionError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Caller overrides for the travel distance and starting scale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offsets {
    pub distance: Option<f64>,
    pub scale: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStates {
    pub hidden: PresentationState,
    pub visible: PresentationState,
    pub exit: Option<PresentationState>,
    pub transition: Transition,
}

pub fn resolve(variant: Variant, direction: Option<Direction>, offsets: &Offsets) -> VariantStates {
    use Variant::*;

    let variant = match direction {
        Some(direction) => variant.toward(direction),
        None => variant,
    };
    let fade = Length::Px(offsets.distance.unwrap_or(FADE_DISTANCE_PX));
    let slide = Length::Percent(offsets.distance.unwrap_or(SLIDE_DISTANCE_PCT));
    let scale_or = |default: f64| offsets.scale.unwrap_or(default);

    let visible = PresentationState::IDENTITY;
    let hidden = PresentationState::hidden();
    let smooth = Transition::tween(SMOOTH_DURATION_S, Easing::SMOOTH);

    let (hidden, exit, transition) = match variant {
        Fade => (hidden, Some(hidden), smooth),
        FadeUp => (
            PresentationState { y: fade, ..hidden },
            Some(PresentationState { y: fade.negate(), ..hidden }),
            smooth,
        ),
        FadeDown => (
            PresentationState { y: fade.negate(), ..hidden },
            Some(PresentationState { y: fade, ..hidden }),
            smooth,
        ),
        FadeLeft => (
            PresentationState { x: fade.negate(), ..hidden },
            Some(PresentationState { x: fade, ..hidden }),
            smooth,
        ),
        FadeRight => (
            PresentationState { x: fade, ..hidden },
            Some(PresentationState { x: fade.negate(), ..hidden }),
            smooth,
        ),
        Scale => {
            let state = PresentationState { scale: scale_or(0.95), ..hidden };
            (state, Some(state), Transition::spring(Easing::SPRING_BOUNCY))
        }
        ScaleCenter => {
            let state = PresentationState { scale: scale_or(0.8), ..hidden };
            (state, Some(state), Transition::spring(Easing::ELASTIC))
        }
        SlideLeft => {
            let state = PresentationState { x: slide.negate(), ..hidden };
            (state, Some(state), Transition::spring(Easing::SPRING))
        }
        SlideRight => {
            let state = PresentationState { x: slide, ..hidden };
            (state, Some(state), Transition::spring(Easing::SPRING))
        }
        SlideUp => {
            let state = PresentationState { y: slide, ..hidden };
            (state, Some(state), Transition::spring(Easing::SPRING))
        }
        SlideDown => {
            let state = PresentationState { y: slide.negate(), ..hidden };
            (state, Some(state), Transition::spring(Easing::SPRING))
        }
        Flip => (
            PresentationState { rotate_y: -90.0, ..hidden },
            Some(PresentationState { rotate_y: 90.0, ..hidden }),
            Transition::spring(Easing::SPRING),
        ),
        Bounce => {
            let state = PresentationState { scale: scale_or(0.3), ..hidden };
            (state, Some(state), Transition::spring(Easing::BOUNCE))
        }
        Rotate => {
            let scale = scale_or(0.8);
            (
                PresentationState { rotate: -180.0, scale, ..hidden },
                Some(PresentationState { rotate: 180.0, scale, ..hidden }),
                Transition::spring(Easing::SPRING),
            )
        }
        RevealText => (
            PresentationState { y: Length::Px(offsets.distance.unwrap_or(50.0)), skew_y: 10.0, ..hidden },
            None,
            Transition::tween(0.8, Easing::EXPO),
        ),
        Hero => (
            PresentationState { y: Length::Px(offsets.distance.unwrap_or(30.0)), ..hidden },
            None,
            Transition::tween(0.8, Easing::EXPO),
        ),
        Feature => (
            PresentationState { y: Length::Px(offsets.distance.unwrap_or(50.0)), ..hidden },
            None,
            Transition::tween(0.6, Easing::EXPO),
        ),
        Testimonial => {
            let distance = offsets.distance.unwrap_or(30.0);
            (
                PresentationState { x: Length::Px(distance), ..hidden },
                Some(PresentationState { x: Length::Px(-distance), ..hidden }),
                smooth,
            )
        }
    };

    VariantStates { hidden, visible, exit, transition }
}

/// Transition used when an element leaves, shorter than the entrance.
pub fn exit_transition() -> Transition {
    Transition::tween(FAST_DURATION_S, Easing::SMOOTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_distinct_hidden_and_visible_states() {
        for variant in Variant::ALL {
            let states = resolve(variant, None, &Offsets::default());
            assert_ne!(states.hidden, states.visible, "{variant} hidden == visible");
            assert_eq!(states.visible, PresentationState::IDENTITY);
        }
    }

    #[test]
    fn every_variant_round_trips_through_its_name() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
        }
    }

    #[test]
    fn names_accept_kebab_case() {
        assert_eq!("fade-in-up".parse::<Variant>(), Ok(Variant::FadeUp));
        assert_eq!("bounce_in".parse::<Variant>(), Ok(Variant::Bounce));
        assert_eq!("FADEIN".parse::<Variant>(), Ok(Variant::Fade));
    }

    #[test]
    fn unknown_variant_is_a_loud_error() {
        let err = "wobble".parse::<Variant>().unwrap_err();
        assert_eq!(err, MotionError::UnknownVariant("wobble".into()));
        assert_eq!(err.to_string(), "unknown animation variant `wobble`");
    }

    #[test]
    fn unknown_variant_fails_deserialization() {
        assert!(serde_json::from_str::<Variant>("\"wobble\"").is_err());
        assert_eq!(serde_json::from_str::<Variant>("\"scaleIn\"").unwrap(), Variant::Scale);
    }

    #[test]
    fn fade_up_starts_twenty_pixels_low_and_transparent() {
        let states = resolve(Variant::FadeUp, None, &Offsets::default());
        assert_eq!(states.hidden.opacity, 0.0);
        assert_eq!(states.hidden.y, Length::Px(20.0));
        assert_eq!(states.hidden.to_css(), "opacity: 0; transform: translate3d(0px, 20px, 0);");
        assert_eq!(states.visible.to_css(), "opacity: 1; transform: none;");
    }

    #[test]
    fn direction_reaims_fade_and_slide_families() {
        let left = resolve(Variant::Fade, Some(Direction::Left), &Offsets::default());
        assert_eq!(left.hidden.x, Length::Px(-20.0));

        let down = resolve(Variant::SlideLeft, Some(Direction::Down), &Offsets::default());
        assert_eq!(down.hidden.y, Length::Percent(-100.0));

        let bounce = resolve(Variant::Bounce, Some(Direction::Left), &Offsets::default());
        assert_eq!(bounce.hidden.x, Length::Px(0.0));
    }

    #[test]
    fn custom_offsets_override_defaults() {
        let offsets = Offsets { distance: Some(40.0), scale: Some(0.5) };
        assert_eq!(resolve(Variant::FadeDown, None, &offsets).hidden.y, Length::Px(-40.0));
        assert_eq!(resolve(Variant::Scale, None, &offsets).hidden.scale, 0.5);
    }

    #[test]
    fn reveal_text_is_skewed() {
        let states = resolve(Variant::RevealText, None, &Offsets::default());
        assert_eq!(states.hidden.skew_y, 10.0);
        assert_eq!(
            states.hidden.transform(),
            "translate3d(0px, 50px, 0) skewY(10deg)"
        );
    }

    #[test]
    fn bounce_uses_spring_curve() {
        let states = resolve(Variant::Bounce, None, &Offsets::default());
        assert_eq!(states.transition.easing, Easing::BOUNCE);
        assert!(states.transition.duration_s > 0.0);
    }

    #[test]
    fn transition_css_rounds_delays() {
        let transition = Transition::tween(0.3, Easing::SMOOTH).with_delay(0.1 * 3.0);
        assert_eq!(
            transition.to_css(),
            "transition: opacity 0.3s cubic-bezier(0.4, 0, 0.2, 1) 0.3s, transform 0.3s cubic-bezier(0.4, 0, 0.2, 1) 0.3s;"
        );
        assert_eq!(Transition::instant().to_css(), "transition: none;");
    }
}
