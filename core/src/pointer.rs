//! Pointer-driven hover math: magnetic buttons, tilt cards, hero parallax and
//! the glow marker. Everything here is a pure function of pointer position and
//! element bounds; the adapter turns the results into CSS transforms.

use crate::config::PointerConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticOffset {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl MagneticOffset {
    pub const REST: MagneticOffset = MagneticOffset {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "translate({:.3}px, {:.3}px) scale({:.3})",
            self.x, self.y, self.scale
        )
    }
}

pub fn magnetic_offset(
    bounds: Rect,
    pointer_x: f64,
    pointer_y: f64,
    config: &PointerConfig,
) -> MagneticOffset {
    let strength = bounds.width.min(bounds.height) / 4.0;
    if !(strength > 0.0) {
        return MagneticOffset::REST;
    }
    let (cx, cy) = bounds.center();
    MagneticOffset {
        x: (pointer_x - cx) / strength * config.magnetic_pull_x,
        y: (pointer_y - cy) / strength * config.magnetic_pull_y,
        scale: config.magnetic_scale,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub lift_px: f64,
    pub perspective_px: f64,
}

impl Tilt {
    pub fn neutral(config: &PointerConfig) -> Self {
        Self {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            lift_px: 0.0,
            perspective_px: config.tilt_perspective_px,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.rotate_x_deg == 0.0 && self.rotate_y_deg == 0.0 && self.lift_px == 0.0
    }

    pub fn to_css(&self) -> String {
        format!(
            "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) translateZ({:.1}px)",
            self.perspective_px, self.rotate_x_deg, self.rotate_y_deg, self.lift_px
        )
    }
}

pub fn tilt(bounds: Rect, pointer_x: f64, pointer_y: f64, config: &PointerConfig) -> Tilt {
    if !(bounds.width > 0.0) || !(bounds.height > 0.0) {
        return Tilt::neutral(config);
    }
    let px = (pointer_x - bounds.left) / bounds.width;
    let py = (pointer_y - bounds.top) / bounds.height;
    Tilt {
        rotate_x_deg: (py - 0.5) * -config.tilt_max_x_deg,
        rotate_y_deg: (px - 0.5) * config.tilt_max_y_deg,
        lift_px: config.tilt_lift_px,
        perspective_px: config.tilt_perspective_px,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub x: f64,
    pub y: f64,
    pub rotate_deg: f64,
}

impl Parallax {
    pub fn to_css(&self) -> String {
        format!(
            "translate({:.3}px, {:.3}px) rotate({:.3}deg)",
            self.x, self.y, self.rotate_deg
        )
    }
}

pub fn parallax(pointer_x: f64, pointer_y: f64, viewport_width: f64, viewport_height: f64) -> Parallax {
    if !(viewport_width > 0.0) || !(viewport_height > 0.0) {
        return Parallax {
            x: 0.0,
            y: 0.0,
            rotate_deg: 0.0,
        };
    }
    let cx = (pointer_x - viewport_width * 0.5) / viewport_width;
    let cy = (pointer_y - viewport_height * 0.5) / viewport_height;
    Parallax {
        x: cx * -18.0,
        y: cy * -10.0,
        rotate_deg: cx * -3.0,
    }
}

pub const GLOW_SCALE_REST: f64 = 1.0;
pub const GLOW_SCALE_PRESSED: f64 = 0.6;
pub const GLOW_SCALE_RELEASED: f64 = 0.95;
pub const GLOW_SCALE_HOVER: f64 = 1.2;
pub const GLOW_SCALE_UNHOVER: f64 = 0.8;
const GLOW_SETTLE_EPS: f64 = 0.01;

/// Smoothed follower for the glow marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    target_x: f64,
    target_y: f64,
    target_scale: f64,
    smoothing_ms: f64,
}

impl Glow {
    pub fn new(x: f64, y: f64, smoothing_ms: f64) -> Self {
        Self {
            x,
            y,
            scale: GLOW_SCALE_REST,
            target_x: x,
            target_y: y,
            target_scale: GLOW_SCALE_REST,
            smoothing_ms: smoothing_ms.max(0.0),
        }
    }

    pub fn target(&self) -> (f64, f64) {
        (self.target_x, self.target_y)
    }

    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.target_x = x;
        self.target_y = y;
    }

    pub fn press(&mut self) {
        self.target_scale = GLOW_SCALE_PRESSED;
    }

    pub fn release(&mut self) {
        self.target_scale = GLOW_SCALE_RELEASED;
    }

    pub fn hover(&mut self, interactive: bool) {
        self.target_scale = if interactive {
            GLOW_SCALE_HOVER
        } else {
            GLOW_SCALE_UNHOVER
        };
    }

    /// Jumps straight to the target.
    pub fn snap(&mut self) {
        self.x = self.target_x;
        self.y = self.target_y;
        self.scale = self.target_scale;
    }

    /// Eases toward the target; `k = 1 - exp(-dt / tau)`.
    pub fn step(&mut self, dt_ms: f64) {
        if !(self.smoothing_ms > 0.0) {
            self.snap();
            return;
        }
        let dt_ms = dt_ms.max(0.0);
        let k = 1.0 - (-dt_ms / self.smoothing_ms).exp();
        self.x += (self.target_x - self.x) * k;
        self.y += (self.target_y - self.y) * k;
        self.scale += (self.target_scale - self.scale) * k;
    }

    pub fn is_settled(&self) -> bool {
        (self.target_x - self.x).abs() < GLOW_SETTLE_EPS
            && (self.target_y - self.y).abs() < GLOW_SETTLE_EPS
            && (self.target_scale - self.scale).abs() < GLOW_SETTLE_EPS * 0.1
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%) scale({:.3})",
            self.x, self.y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_bounds_stay_at_rest() {
        let config = PointerConfig::default();
        let flat = Rect::new(0.0, 0.0, 100.0, 0.0);
        assert_eq!(magnetic_offset(flat, 50.0, 50.0, &config), MagneticOffset::REST);
        assert!(tilt(flat, 50.0, 50.0, &config).is_neutral());
    }

    #[test]
    fn glow_step_is_monotone_toward_target() {
        let mut glow = Glow::new(0.0, 0.0, 120.0);
        glow.pointer_move(100.0, 0.0);
        let mut last = glow.x;
        for _ in 0..10 {
            glow.step(16.0);
            assert!(glow.x > last && glow.x < 100.0);
            last = glow.x;
        }
    }
}
