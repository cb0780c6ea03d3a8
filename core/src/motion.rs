use crate::config::MotionConfig;

/// Which animated effects run, derived from the reduced-motion signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPolicy {
    pub reduced: bool,
    pub time_scale: f64,
}

impl MotionPolicy {
    pub fn new(reduced: bool, config: &MotionConfig) -> Self {
        let time_scale = if reduced {
            config.reduced_time_scale.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self {
            reduced,
            time_scale,
        }
    }

    pub fn full() -> Self {
        Self {
            reduced: false,
            time_scale: 1.0,
        }
    }

    pub fn hover_effects(&self) -> bool {
        !self.reduced
    }

    pub fn smooth_glow(&self) -> bool {
        !self.reduced
    }

    pub fn staged_reveal(&self) -> bool {
        !self.reduced
    }
}

impl Default for MotionPolicy {
    fn default() -> Self {
        Self::full()
    }
}
