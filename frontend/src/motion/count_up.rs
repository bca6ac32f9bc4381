//! Eased numeric count-up used by stats and price tags.

use serde::Deserialize;

use super::easing::Easing;
use crate::config;
use crate::error::{MotionError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountUp {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    pub decimals: usize,
    pub prefix: String,
    pub suffix: String,
}

impl Default for CountUp {
    fn default() -> Self {
        CountUp {
            start: 0.0,
            end: 0.0,
            duration_ms: config::COUNT_UP_DURATION_MS,
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl CountUp {
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(MotionError::InvalidConfig {
                field: "end",
                reason: "start and end must be finite".to_string(),
            });
        }
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(MotionError::InvalidConfig {
                field: "duration_ms",
                reason: format!("must be non-negative, got {}", self.duration_ms),
            });
        }
        Ok(())
    }

    pub fn format(&self, value: f64) -> String {
        format!("{}{}{}", self.prefix, format_number(value, self.decimals), self.suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Running { started_at: f64 },
    Finished,
}

#[derive(Debug, Clone)]
pub struct CountUpRun {
    spec: CountUp,
    phase: Phase,
    value: f64,
}

impl CountUpRun {
    pub fn new(spec: CountUp) -> Self {
        let value = spec.start;
        CountUpRun { spec, phase: Phase::Idle, value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Starts counting. Returns false if the run already started; a finished
    /// count never restarts.
    pub fn begin(&mut self, now_ms: f64) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        if self.spec.duration_ms <= 0.0 {
            self.finish();
        } else {
            self.phase = Phase::Running { started_at: now_ms };
        }
        true
    }

    /// Jumps straight to the end value, used for reduced motion.
    pub fn finish(&mut self) {
        self.phase = Phase::Finished;
        self.value = self.spec.end;
    }

    pub fn sample(&mut self, now_ms: f64) -> f64 {
        let started_at = match self.phase {
            Phase::Running { started_at } => started_at,
            Phase::Idle | Phase::Finished => return self.value,
        };

        let progress = ((now_ms - started_at) / self.spec.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.finish();
            return self.value;
        }

        let CountUp { start, end, .. } = self.spec;
        let current = start + (end - start) * Easing::EaseOutQuart.sample(progress);
        self.value = if end >= start { current.min(end) } else { current.max(end) };
        self.value
    }
}

/// Formats with `.` thousands separators and `,` decimals (id-ID).
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }
    out
}
