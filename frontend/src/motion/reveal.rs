//! Two-phase reveal state machine driven by viewport visibility.

use serde::Deserialize;

use super::variant::{self, Direction, Offsets, PresentationState, Transition, Variant, VariantStates};
use super::visibility::ObserveOptions;
use crate::config;
use crate::error::{MotionError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub variant: Variant,
    pub direction: Option<Direction>,
    /// Seconds before the reveal starts.
    pub delay: f64,
    /// Seconds; `None` keeps the variant's own timing.
    pub duration: Option<f64>,
    pub distance: Option<f64>,
    pub threshold: f64,
    pub trigger_once: bool,
    pub stagger: bool,
    pub stagger_delay: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            variant: Variant::FadeUp,
            direction: None,
            delay: 0.0,
            duration: None,
            distance: None,
            threshold: config::DEFAULT_THRESHOLD,
            trigger_once: true,
            stagger: false,
            stagger_delay: config::DEFAULT_STAGGER_S,
            root_margin: config::DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> Result<()> {
        non_negative("delay", self.delay)?;
        non_negative("stagger_delay", self.stagger_delay)?;
        if let Some(duration) = self.duration {
            non_negative("duration", duration)?;
        }
        self.observe_options().validate()
    }

    pub fn observe_options(&self) -> ObserveOptions {
        ObserveOptions {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
            trigger_once: self.trigger_once,
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MotionError::InvalidConfig {
            field,
            reason: format!("must be a non-negative number of seconds, got {}", value),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub phase: RevealPhase,
    pub state: PresentationState,
    pub transition: Transition,
}

impl RevealFrame {
    pub fn style(&self) -> String {
        format!("{} {}", self.state.to_css(), self.transition.to_css())
    }
}

#[derive(Debug, Clone)]
pub struct RevealController {
    config: RevealConfig,
    states: VariantStates,
    phase: RevealPhase,
    revealed: bool,
    settled: bool,
    degraded: bool,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Result<Self> {
        config.validate()?;
        let offsets = Offsets { distance: config.distance, scale: None };
        let states = variant::resolve(config.variant, config.direction, &offsets);
        Ok(RevealController {
            config,
            states,
            phase: RevealPhase::Hidden,
            revealed: false,
            settled: false,
            degraded: false,
        })
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Feeds a visibility change. Returns the frame to apply, or `None` when
    /// the presentation does not change.
    pub fn on_visibility(&mut self, is_visible: bool, reduced_motion: bool) -> Option<RevealFrame> {
        if self.settled {
            return None;
        }
        match (self.phase, is_visible) {
            (RevealPhase::Hidden, true) => {
                self.phase = RevealPhase::Visible;
                self.revealed = true;
                self.settled = self.config.trigger_once;
                Some(self.frame(reduced_motion))
            }
            (RevealPhase::Visible, false) if !self.config.trigger_once => {
                self.phase = RevealPhase::Hidden;
                Some(self.frame(reduced_motion))
            }
            _ => None,
        }
    }

    /// Jumps to the final state without animating, for hosts that cannot
    /// report visibility. Every later frame is instant too.
    pub fn degrade(&mut self) -> RevealFrame {
        self.degraded = true;
        self.phase = RevealPhase::Visible;
        self.revealed = true;
        self.settled = true;
        self.frame(false)
    }

    /// Frame for the current phase.
    pub fn frame(&self, reduced_motion: bool) -> RevealFrame {
        self.frame_at(self.config.delay, reduced_motion)
    }

    /// One frame per staggered child, in index order.
    pub fn child_frames(&self, children: usize, reduced_motion: bool) -> Vec<RevealFrame> {
        self.stagger_delays(children, reduced_motion)
            .into_iter()
            .map(|delay| self.frame_at(delay, reduced_motion))
            .collect()
    }

    /// Start delays per child, in index order.
    pub fn stagger_delays(&self, children: usize, reduced_motion: bool) -> Vec<f64> {
        let instant = reduced_motion || self.degraded;
        (0..children)
            .map(|index| if instant { 0.0 } else { self.delay_for(index) })
            .collect()
    }

    fn frame_at(&self, delay: f64, reduced_motion: bool) -> RevealFrame {
        let instant = reduced_motion || self.degraded;
        let (state, transition) = match self.phase {
            // Nothing to animate out of before the first reveal.
            RevealPhase::Hidden if !self.revealed => (self.states.hidden, Transition::instant()),
            RevealPhase::Hidden => {
                let state = self.states.exit.unwrap_or(self.states.hidden);
                let transition = if instant { Transition::instant() } else { variant::exit_transition() };
                (state, transition)
            }
            RevealPhase::Visible => {
                let transition = if instant {
                    Transition::instant()
                } else {
                    let mut base = self.states.transition.with_delay(delay);
                    if self.config.stagger {
                        base = base.with_stagger(self.config.stagger_delay);
                    }
                    match self.config.duration {
                        Some(duration) => base.with_duration(duration),
                        None => base,
                    }
                };
                (self.states.visible, transition)
            }
        };
        RevealFrame { phase: self.phase, state, transition }
    }

    fn delay_for(&self, index: usize) -> f64 {
        if self.config.stagger {
            self.config.delay + self.config.stagger_delay * index as f64
        } else {
            self.config.delay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::variant::Length;
    use crate::motion::visibility::VisibilityTracker;

    fn controller(config: RevealConfig) -> RevealController {
        RevealController::new(config).unwrap()
    }

    #[test]
    fn starts_hidden_without_animation() {
        let reveal = controller(RevealConfig::default());
        let frame = reveal.frame(false);
        assert_eq!(frame.phase, RevealPhase::Hidden);
        assert_eq!(frame.state.opacity, 0.0);
        assert!(frame.transition.is_instant());
    }

    #[test]
    fn fade_up_section_reveals_once_and_stays_visible() {
        let config = RevealConfig { variant: Variant::FadeUp, threshold: 0.1, trigger_once: true, ..RevealConfig::default() };
        let mut tracker = VisibilityTracker::new(&config.observe_options());
        let mut reveal = controller(config);

        assert_eq!(reveal.frame(false).state.y, Length::Px(20.0));

        let update = tracker.observe(0.4, true);
        let frame = reveal.on_visibility(update.is_visible, false).unwrap();
        assert_eq!(frame.phase, RevealPhase::Visible);
        assert_eq!(frame.state.opacity, 1.0);
        assert_eq!(frame.state.y, Length::Px(0.0));
        assert!(!frame.transition.is_instant());

        // Scrolled fully off-screen and back.
        let away = tracker.observe(0.0, false);
        assert_eq!(reveal.on_visibility(away.is_visible, false), None);
        assert_eq!(reveal.on_visibility(false, false), None);
        let back = tracker.observe(1.0, true);
        assert_eq!(reveal.on_visibility(back.is_visible, false), None);
        assert_eq!(reveal.frame(false).phase, RevealPhase::Visible);
    }

    #[test]
    fn repeatable_reveal_leaves_through_the_exit_state() {
        let mut reveal = controller(RevealConfig { trigger_once: false, ..RevealConfig::default() });
        assert!(reveal.on_visibility(true, false).is_some());
        let hidden = reveal.on_visibility(false, false).unwrap();
        assert_eq!(hidden.phase, RevealPhase::Hidden);
        assert_eq!(hidden.state.opacity, 0.0);
        assert_eq!(hidden.state.y, Length::Px(-20.0));
        assert_eq!(hidden.transition, variant::exit_transition());
        assert!(reveal.on_visibility(true, false).is_some());
    }

    #[test]
    fn variants_without_exit_state_hide_back_to_entry_state() {
        let mut reveal =
            controller(RevealConfig { variant: Variant::Hero, trigger_once: false, ..RevealConfig::default() });
        let entry = reveal.frame(false).state;
        reveal.on_visibility(true, false);
        assert_eq!(reveal.on_visibility(false, false).unwrap().state, entry);
    }

    #[test]
    fn missing_observer_shows_final_state_without_animation() {
        let config = RevealConfig { delay: 0.4, stagger: true, ..RevealConfig::default() };
        let mut tracker = VisibilityTracker::new(&config.observe_options());
        let mut reveal = controller(config);

        let update = tracker.force_visible();
        assert!(update.degraded);
        let frame = reveal.degrade();
        assert_eq!(frame.phase, RevealPhase::Visible);
        assert_eq!(frame.state, PresentationState::IDENTITY);
        assert!(frame.transition.is_instant());

        assert!(reveal.frame(false).transition.is_instant());
        assert_eq!(reveal.stagger_delays(3, false), vec![0.0; 3]);
        assert!(reveal.child_frames(3, false).iter().all(|child| child.transition.is_instant()));
        assert_eq!(reveal.on_visibility(false, false), None);
    }

    #[test]
    fn redundant_visibility_reports_produce_no_frame() {
        let mut reveal = controller(RevealConfig { trigger_once: false, ..RevealConfig::default() });
        assert_eq!(reveal.on_visibility(false, false), None);
        assert!(reveal.on_visibility(true, false).is_some());
        assert_eq!(reveal.on_visibility(true, false), None);
    }

    #[test]
    fn reduced_motion_reaches_same_state_instantly() {
        for variant in Variant::ALL {
            let config = RevealConfig { variant, delay: 0.4, ..RevealConfig::default() };
            let animated = controller(config.clone()).on_visibility(true, false).unwrap();
            let reduced = controller(config).on_visibility(true, true).unwrap();

            assert_eq!(animated.state, reduced.state);
            assert!(reduced.transition.is_instant());
            assert_eq!(reduced.transition.duration_s, 0.0);
        }
    }

    #[test]
    fn stagger_delays_follow_index_order() {
        let reveal = controller(RevealConfig { stagger: true, stagger_delay: 0.15, ..RevealConfig::default() });
        let delays = reveal.stagger_delays(4, false);
        let expected = [0.0, 0.15, 0.30, 0.45];
        for (delay, want) in delays.iter().zip(expected) {
            assert!((delay - want).abs() < 1e-9);
        }
    }

    #[test]
    fn stagger_offsets_start_after_base_delay() {
        let mut reveal =
            controller(RevealConfig { stagger: true, delay: 0.2, stagger_delay: 0.1, ..RevealConfig::default() });
        reveal.on_visibility(true, false);
        let children = reveal.child_frames(4, false);
        assert!((children[0].transition.delay_s - 0.2).abs() < 1e-9);
        assert!((children[3].transition.delay_s - 0.5).abs() < 1e-9);
        assert_eq!(children[3].transition.stagger_s, Some(0.1));
    }

    #[test]
    fn reduced_motion_badges_appear_together() {
        let mut reveal = controller(RevealConfig { stagger: true, stagger_delay: 0.1, ..RevealConfig::default() });
        reveal.on_visibility(true, true);

        assert_eq!(reveal.stagger_delays(5, true), vec![0.0; 5]);
        for frame in reveal.child_frames(5, true) {
            assert!(frame.transition.is_instant());
            assert_eq!(frame.state, PresentationState::IDENTITY);
        }
    }

    #[test]
    fn duration_override_applies_to_visible_transition() {
        let mut reveal = controller(RevealConfig { duration: Some(1.2), ..RevealConfig::default() });
        let frame = reveal.on_visibility(true, false).unwrap();
        assert_eq!(frame.transition.duration_s, 1.2);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let negative = RevealConfig { delay: -1.0, ..RevealConfig::default() };
        assert!(matches!(
            RevealController::new(negative),
            Err(MotionError::InvalidConfig { field: "delay", .. })
        ));
        let threshold = RevealConfig { threshold: 2.0, ..RevealConfig::default() };
        assert!(RevealController::new(threshold).is_err());
    }

    #[test]
    fn config_parses_from_markup_json() {
        let config: RevealConfig =
            serde_json::from_str(r#"{"variant":"slideInLeft","direction":"up","stagger":true,"staggerDelay":0.2}"#)
                .unwrap();
        assert_eq!(config.variant, Variant::SlideLeft);
        assert_eq!(config.direction, Some(Direction::Up));
        assert!(config.trigger_once);
        assert_eq!(config.stagger_delay, 0.2);

        assert!(serde_json::from_str::<RevealConfig>(r#"{"variant":"wobble"}"#).is_err());
    }
}
