//! Pointer-following offset for magnetic hover targets.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnetic {
    pub strength: f64,
    /// Pointer distance from the element center beyond which it is ignored.
    pub distance: f64,
    pub disabled: bool,
}

impl Default for Magnetic {
    fn default() -> Self {
        Magnetic {
            strength: config::MAGNETIC_STRENGTH,
            distance: config::MAGNETIC_DISTANCE,
            disabled: false,
        }
    }
}

impl Magnetic {
    pub fn pointer_offset(&self, center: (f64, f64), pointer: (f64, f64)) -> Option<(f64, f64)> {
        let dx = pointer.0 - center.0;
        let dy = pointer.1 - center.1;
        if dx.hypot(dy) < self.distance {
            Some((dx * self.strength, dy * self.strength))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MagneticState {
    hovered: bool,
    offset: (f64, f64),
}

impl MagneticState {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer moved. Out-of-range moves keep the last offset.
    pub fn pointer_moved(
        &mut self,
        magnetic: &Magnetic,
        center: (f64, f64),
        pointer: (f64, f64),
        reduced_motion: bool,
    ) -> (f64, f64) {
        if magnetic.disabled || reduced_motion {
            self.offset = (0.0, 0.0);
        } else if let Some(offset) = magnetic.pointer_offset(center, pointer) {
            self.offset = offset;
        }
        self.offset
    }

    pub fn leave(&mut self) -> (f64, f64) {
        self.hovered = false;
        self.offset = (0.0, 0.0);
        self.offset
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translate3d({:.2}px, {:.2}px, 0); transition: transform 0.3s cubic-bezier(0.22, 1, 0.36, 1);",
            self.offset.0, self.offset.1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulls_toward_pointer_within_range() {
        let magnetic = Magnetic::default();
        assert_eq!(magnetic.pointer_offset((100.0, 100.0), (150.0, 100.0)), Some((10.0, 0.0)));
        assert_eq!(magnetic.pointer_offset((100.0, 100.0), (300.0, 100.0)), None);
    }

    #[test]
    fn springs_back_on_leave() {
        let magnetic = Magnetic { strength: 0.5, ..Magnetic::default() };
        let mut state = MagneticState::default();
        state.enter();
        assert_eq!(state.pointer_moved(&magnetic, (0.0, 0.0), (20.0, -10.0), false), (10.0, -5.0));
        assert!(state.is_hovered());
        assert_eq!(state.leave(), (0.0, 0.0));
        assert!(!state.is_hovered());
    }

    #[test]
    fn out_of_range_move_keeps_last_offset() {
        let magnetic = Magnetic::default();
        let mut state = MagneticState::default();
        state.pointer_moved(&magnetic, (0.0, 0.0), (50.0, 0.0), false);
        assert_eq!(state.pointer_moved(&magnetic, (0.0, 0.0), (500.0, 0.0), false), (10.0, 0.0));
    }

    #[test]
    fn disabled_or_reduced_motion_never_moves() {
        let mut state = MagneticState::default();
        let disabled = Magnetic { disabled: true, ..Magnetic::default() };
        assert_eq!(state.pointer_moved(&disabled, (0.0, 0.0), (10.0, 10.0), false), (0.0, 0.0));
        assert_eq!(state.pointer_moved(&Magnetic::default(), (0.0, 0.0), (10.0, 10.0), true), (0.0, 0.0));
    }
}
