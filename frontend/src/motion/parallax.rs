//! Scroll-derived progress and parallax offsets.

use super::easing::lerp;
use crate::config;

/// How far the document has been scrolled, 0..=1.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Progress of an element through the viewport: 0 when its top reaches the
/// bottom edge, 1 when its bottom passes the top edge.
pub fn element_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + rect_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / travel).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub offset: f64,
    pub speed: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Parallax { offset: config::PARALLAX_OFFSET, speed: config::PARALLAX_SPEED }
    }
}

impl Parallax {
    pub fn translate_y(&self, progress: f64, reduced_motion: bool) -> f64 {
        if reduced_motion {
            return 0.0;
        }
        let reach = self.offset * self.speed;
        lerp(-reach, reach, progress.clamp(0.0, 1.0))
    }

    /// Fades in towards the middle of the pass and out again.
    pub fn opacity(&self, progress: f64, reduced_motion: bool) -> f64 {
        if reduced_motion {
            return 1.0;
        }
        let progress = progress.clamp(0.0, 1.0);
        if progress <= 0.5 {
            progress * 2.0
        } else {
            (1.0 - progress) * 2.0
        }
    }

    pub fn style(&self, progress: f64, reduced_motion: bool, fade: bool) -> String {
        let y = self.translate_y(progress, reduced_motion);
        let mut style = format!("transform: translate3d(0, {:.2}px, 0); will-change: transform;", y);
        if fade {
            style.push_str(&format!(" opacity: {:.3};", self.opacity(progress, reduced_motion)));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_progress_spans_document() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_document_has_no_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn element_progress_tracks_entry_and_exit() {
        assert_eq!(element_progress(1000.0, 200.0, 1000.0), 0.0);
        assert_eq!(element_progress(-200.0, 200.0, 1000.0), 1.0);
        assert!((element_progress(400.0, 200.0, 1000.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn translation_is_scaled_by_speed() {
        let parallax = Parallax { offset: 100.0, speed: 0.5 };
        assert_eq!(parallax.translate_y(0.0, false), -50.0);
        assert_eq!(parallax.translate_y(0.5, false), 0.0);
        assert_eq!(parallax.translate_y(1.0, false), 50.0);
    }

    #[test]
    fn reduced_motion_pins_translation() {
        let parallax = Parallax::default();
        assert_eq!(parallax.translate_y(0.9, true), 0.0);
        assert_eq!(parallax.opacity(0.0, true), 1.0);
    }

    #[test]
    fn opacity_peaks_mid_pass() {
        let parallax = Parallax::default();
        assert_eq!(parallax.opacity(0.0, false), 0.0);
        assert_eq!(parallax.opacity(0.5, false), 1.0);
        assert_eq!(parallax.opacity(1.0, false), 0.0);
    }

    #[test]
    fn style_renders_transform() {
        let parallax = Parallax { offset: 10.0, speed: 1.0 };
        assert_eq!(
            parallax.style(1.0, false, false),
            "transform: translate3d(0, 10.00px, 0); will-change: transform;"
        );
    }
}
