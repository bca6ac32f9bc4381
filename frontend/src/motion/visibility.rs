//! Viewport visibility bookkeeping behind `use_in_view`.

use serde::Deserialize;

use crate::config;
use crate::error::{MotionError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObserveOptions {
    /// Fraction of the element that has to be on screen, 0..=1.
    pub threshold: f64,
    pub root_margin: String,
    pub trigger_once: bool,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        ObserveOptions {
            threshold: config::DEFAULT_THRESHOLD,
            root_margin: config::DEFAULT_ROOT_MARGIN.to_string(),
            trigger_once: true,
        }
    }
}

impl ObserveOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(MotionError::InvalidConfig {
                field: "threshold",
                reason: format!("must be within 0..=1, got {}", self.threshold),
            });
        }
        if self.root_margin.trim().is_empty() {
            return Err(MotionError::InvalidConfig {
                field: "root_margin",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityUpdate {
    pub is_visible: bool,
    pub changed: bool,
    /// Set exactly once, on the first reveal of a trigger-once observation.
    pub disconnect: bool,
    /// The host cannot observe intersections; show the final state at once.
    pub degraded: bool,
}

#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    threshold: f64,
    trigger_once: bool,
    is_visible: bool,
    has_triggered: bool,
}

impl VisibilityTracker {
    pub fn new(options: &ObserveOptions) -> Self {
        let threshold = if options.threshold.is_finite() {
            options.threshold.clamp(0.0, 1.0)
        } else {
            config::DEFAULT_THRESHOLD
        };
        VisibilityTracker {
            threshold,
            trigger_once: options.trigger_once,
            is_visible: false,
            has_triggered: false,
        }
    }

    /// True once a trigger-once observation has fired and ignores input.
    pub fn is_settled(&self) -> bool {
        self.trigger_once && self.has_triggered
    }

    pub fn observe(&mut self, intersection_ratio: f64, is_intersecting: bool) -> VisibilityUpdate {
        let visible = is_intersecting && intersection_ratio >= self.threshold;
        self.apply(visible)
    }

    /// Degrade path for hosts without an intersection API.
    pub fn force_visible(&mut self) -> VisibilityUpdate {
        VisibilityUpdate { degraded: true, ..self.apply(true) }
    }

    fn apply(&mut self, visible: bool) -> VisibilityUpdate {
        if self.is_settled() {
            return VisibilityUpdate { is_visible: true, changed: false, disconnect: false, degraded: false };
        }

        let changed = visible != self.is_visible;
        self.is_visible = visible;

        let mut disconnect = false;
        if visible && !self.has_triggered {
            self.has_triggered = true;
            disconnect = self.trigger_once;
        }

        VisibilityUpdate { is_visible: visible, changed, disconnect, degraded: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(threshold: f64, trigger_once: bool) -> ObserveOptions {
        ObserveOptions { threshold, trigger_once, ..ObserveOptions::default() }
    }

    #[test]
    fn becomes_visible_only_past_threshold() {
        let mut tracker = VisibilityTracker::new(&options(0.5, false));
        assert!(!tracker.observe(0.2, true).is_visible);
        let update = tracker.observe(0.6, true);
        assert!(update.is_visible);
        assert!(update.changed);
        assert!(!update.disconnect);
    }

    #[test]
    fn zero_threshold_accepts_any_intersection() {
        let mut tracker = VisibilityTracker::new(&options(0.0, true));
        assert!(tracker.observe(0.0, true).is_visible);
    }

    #[test]
    fn trigger_once_disconnects_once_and_stays_visible() {
        let mut tracker = VisibilityTracker::new(&options(0.1, true));
        let first = tracker.observe(0.3, true);
        assert!(first.is_visible && first.disconnect);

        for _ in 0..3 {
            let later = tracker.observe(0.0, false);
            assert!(later.is_visible);
            assert!(!later.changed);
            assert!(!later.disconnect);
        }
        assert!(tracker.is_settled());
    }

    #[test]
    fn repeatable_observation_toggles_both_ways() {
        let mut tracker = VisibilityTracker::new(&options(0.1, false));
        assert!(tracker.observe(1.0, true).is_visible);
        let hidden = tracker.observe(0.0, false);
        assert!(!hidden.is_visible && hidden.changed);
        let again = tracker.observe(0.5, true);
        assert!(again.is_visible && !again.disconnect);
        assert!(!tracker.is_settled());
    }

    #[test]
    fn force_visible_counts_as_a_trigger() {
        let mut tracker = VisibilityTracker::new(&options(0.1, true));
        let update = tracker.force_visible();
        assert!(update.is_visible && update.disconnect && update.degraded);
        assert!(tracker.is_settled());
        assert!(!tracker.observe(1.0, true).degraded);
    }

    #[test]
    fn validate_rejects_out_of_range_threshold() {
        assert!(options(1.5, true).validate().is_err());
        assert!(options(f64::NAN, true).validate().is_err());
        assert!(options(1.0, true).validate().is_ok());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let parsed: ObserveOptions = serde_json::from_str(r#"{"threshold":0.25}"#).unwrap();
        assert_eq!(parsed.threshold, 0.25);
        assert!(parsed.trigger_once);
        assert_eq!(parsed.root_margin, "0px");
    }
}
