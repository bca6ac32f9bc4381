//! Easing curves shared by CSS transitions and numeric interpolation.

/// Fraction of the spring's amplitude still allowed when we call it settled.
const SPRING_SETTLE_EPSILON: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutQuart,
    CubicBezier(f64, f64, f64, f64),
    Spring { damping: f64, stiffness: f64, mass: f64 },
}

impl Easing {
    pub const SMOOTH: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);
    pub const EXPO: Easing = Easing::CubicBezier(0.6, -0.05, 0.01, 0.99);

    pub const SPRING: Easing = Easing::Spring { damping: 25.0, stiffness: 300.0, mass: 0.8 };
    pub const SPRING_BOUNCY: Easing = Easing::Spring { damping: 15.0, stiffness: 400.0, mass: 0.6 };
    pub const ELASTIC: Easing = Easing::Spring { damping: 12.0, stiffness: 200.0, mass: 1.0 };
    pub const BOUNCE: Easing = Easing::Spring { damping: 10.0, stiffness: 300.0, mass: 0.8 };

    /// Progress at normalized time `t` (0..=1). Springs may overshoot 1.0
    /// in between but always land on exactly 1.0 at `t = 1`.
    pub fn sample(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Easing::Linear => t,
            Easing::EaseOutQuart => ease_out_quart(t),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                let s = solve_bezier_x(x1, x2, t);
                bezier(y1, y2, s)
            }
            Easing::Spring { damping, stiffness, mass } => {
                let elapsed = t * spring_settle_time(damping, stiffness, mass);
                spring_position(damping, stiffness, mass, elapsed)
            }
        }
    }

    /// Damping ratio for springs, `None` for tweens.
    pub fn damping_ratio(&self) -> Option<f64> {
        match *self {
            Easing::Spring { damping, stiffness, mass } => Some(damping_ratio(damping, stiffness, mass)),
            _ => None,
        }
    }

    /// Natural duration of a spring in seconds, `None` for tweens whose
    /// duration comes from the transition.
    pub fn natural_duration_s(&self) -> Option<f64> {
        match *self {
            Easing::Spring { damping, stiffness, mass } => Some(spring_settle_time(damping, stiffness, mass)),
            _ => None,
        }
    }

    pub fn to_css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOutQuart => "cubic-bezier(0.25, 1, 0.5, 1)".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2),
            Easing::Spring { .. } => {
                // CSS has no springs; approximate with an overshooting curve
                // when the spring is bouncy enough to visibly overshoot.
                let ratio = self.damping_ratio().unwrap_or(1.0);
                if ratio < 0.6 {
                    "cubic-bezier(0.34, 1.56, 0.64, 1)".to_string()
                } else {
                    "cubic-bezier(0.22, 1, 0.36, 1)".to_string()
                }
            }
        }
    }
}

pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

fn bezier(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

// x(s) is monotonic for control points inside 0..=1, so bisection converges.
fn solve_bezier_x(x1: f64, x2: f64, x: f64) -> f64 {
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..40 {
        let mid = (lo + hi) / 2.0;
        if bezier(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}

fn damping_ratio(damping: f64, stiffness: f64, mass: f64) -> f64 {
    damping / (2.0 * (stiffness * mass).sqrt())
}

fn spring_settle_time(damping: f64, stiffness: f64, mass: f64) -> f64 {
    let omega = (stiffness / mass).sqrt();
    let zeta = damping_ratio(damping, stiffness, mass);
    -SPRING_SETTLE_EPSILON.ln() / (zeta * omega)
}

fn spring_position(damping: f64, stiffness: f64, mass: f64, t: f64) -> f64 {
    let omega = (stiffness / mass).sqrt();
    let zeta = damping_ratio(damping, stiffness, mass);
    if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * t).exp();
        1.0 - envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
    } else {
        1.0 - (-omega * t).exp() * (1.0 + omega * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_quart_hits_endpoints_and_is_monotonic() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(2.0), 1.0);

        let mut last = 0.0;
        for step in 1..=100 {
            let value = ease_out_quart(step as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn ease_out_quart_front_loads_progress() {
        assert!(ease_out_quart(0.5) > 0.9);
    }

    #[test]
    fn ease_out_quart_variant_samples_the_quartic() {
        for step in 0..=10 {
            let t = step as f64 / 10.0;
            assert_eq!(Easing::EaseOutQuart.sample(t), ease_out_quart(t));
        }
    }

    #[test]
    fn cubic_bezier_matches_linear_when_control_points_are_diagonal() {
        let linear = Easing::CubicBezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for step in 0..=10 {
            let t = step as f64 / 10.0;
            assert!((linear.sample(t) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn smooth_curve_ends_exactly_at_one() {
        assert_eq!(Easing::SMOOTH.sample(1.0), 1.0);
        assert_eq!(Easing::SMOOTH.sample(0.0), 0.0);
        assert!(Easing::SMOOTH.sample(0.5) > 0.5);
    }

    #[test]
    fn bounce_spring_overshoots_then_lands() {
        let peak = (1..100)
            .map(|step| Easing::BOUNCE.sample(step as f64 / 100.0))
            .fold(0.0, f64::max);
        assert!(peak > 1.0);
        assert_eq!(Easing::BOUNCE.sample(1.0), 1.0);
        assert!((Easing::BOUNCE.sample(0.99) - 1.0).abs() < 0.01);
    }

    #[test]
    fn springs_map_to_css_curves() {
        assert_eq!(Easing::BOUNCE.to_css(), "cubic-bezier(0.34, 1.56, 0.64, 1)");
        assert_eq!(Easing::SPRING.to_css(), "cubic-bezier(0.22, 1, 0.36, 1)");
        assert_eq!(Easing::SMOOTH.to_css(), "cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(Easing::Linear.to_css(), "linear");
    }

    #[test]
    fn springs_report_natural_duration() {
        let duration = Easing::BOUNCE.natural_duration_s().unwrap();
        assert!(duration > 0.5 && duration < 2.0);
        assert_eq!(Easing::SMOOTH.natural_duration_s(), None);
    }
}
