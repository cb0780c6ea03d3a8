use std::fmt::Write;

const CENTER_X: f64 = 400.0;
const CENTER_Y: f64 = 300.0;
const RADIUS_X: f64 = 260.0;
const RADIUS_Y: f64 = 190.0;
const WOBBLE: f64 = 22.0;
const FRAME_STEP: f64 = 0.016;
const HANDLE: f64 = 0.45;
const SHOULDER: f64 = 0.6;

/// Breathing blob outline, a closed four-segment cubic path in an 800x600
/// viewBox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobMorph {
    t: f64,
    seed: f64,
}

impl BlobMorph {
    pub fn new(seed: f64) -> Self {
        Self { t: 0.0, seed }
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn advance(&mut self, time_scale: f64) {
        self.t += FRAME_STEP * time_scale.max(0.0);
    }

    pub fn radii(&self) -> (f64, f64) {
        (
            RADIUS_X + (self.seed + self.t * 0.6).sin() * WOBBLE,
            RADIUS_Y + (self.seed + self.t * 0.45).cos() * WOBBLE,
        )
    }

    pub fn path(&self) -> String {
        let (rx, ry) = self.radii();
        let (cx, cy) = (CENTER_X, CENTER_Y);
        let mut d = String::with_capacity(256);
        let _ = write!(d, "M {:.2},{:.2} ", cx - rx, cy);
        let segments = [
            [
                (cx - rx, cy - ry * HANDLE),
                (cx - rx * SHOULDER, cy - ry),
                (cx, cy - ry),
            ],
            [
                (cx + rx * SHOULDER, cy - ry),
                (cx + rx, cy - ry * HANDLE),
                (cx + rx, cy),
            ],
            [
                (cx + rx, cy + ry * HANDLE),
                (cx + rx * SHOULDER, cy + ry),
                (cx, cy + ry),
            ],
            [
                (cx - rx * SHOULDER, cy + ry),
                (cx - rx, cy + ry * HANDLE),
                (cx - rx, cy),
            ],
        ];
        for [c1, c2, end] in segments {
            let _ = write!(
                d,
                "C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2} ",
                c1.0, c1.1, c2.0, c2.1, end.0, end.1
            );
        }
        d.push('Z');
        d
    }
}
