//! Ambient particle field drawn behind the page.
//!
//! The field owns its particles and nothing else. The host passes the
//! viewport size to [`ParticleField::configure`] on every resize and calls
//! [`ParticleField::advance_frame`] once per display refresh with a
//! [`Surface`] to draw on.

use rand::Rng;

use crate::config::{ParticleConfig, Range};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub alpha: f64,
}

/// Drawing target for one frame, in logical (CSS) pixels.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64);
}

/// Backing-store size for a canvas at a given device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceScale {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub ratio: f64,
}

impl SurfaceScale {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let ratio = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.max(1.0)
        } else {
            1.0
        };
        let css_width = css_width.max(0.0);
        let css_height = css_height.max(0.0);
        Self {
            css_width,
            css_height,
            pixel_width: (css_width * ratio).ceil() as u32,
            pixel_height: (css_height * ratio).ceil() as u32,
            ratio,
        }
    }
}

pub struct ParticleField {
    config: ParticleConfig,
    width: f64,
    height: f64,
    time_scale: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            time_scale: 1.0,
            particles: Vec::new(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Swaps in an explicit particle set, keeping the configured viewport.
    pub fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = if scale.is_finite() { scale.max(0.0) } else { 1.0 };
    }

    /// Number of particles for a viewport, one per `area_per_particle`.
    pub fn target_count(&self, width: f64, height: f64) -> usize {
        particle_count(&self.config, width, height)
    }

    /// Drops the current set and generates a fresh one for the viewport.
    pub fn configure<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.width = width;
        self.height = height;
        let count = self.target_count(width, height);
        let config = &self.config;
        self.particles.clear();
        self.particles.reserve_exact(count);
        for _ in 0..count {
            self.particles.push(Particle {
                x: sample(rng, Range::new(0.0, width)),
                y: sample(rng, Range::new(0.0, height)),
                radius: sample(rng, config.radius),
                vx: sample(rng, config.velocity_x),
                vy: sample(rng, config.velocity_y),
                alpha: sample(rng, config.alpha),
            });
        }
    }

    /// Moves every particle one step, then redraws the whole field.
    pub fn advance_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.draw(surface);
    }

    pub fn step(&mut self) {
        let margin = self.config.wrap_margin;
        let scale = self.time_scale;
        for particle in &mut self.particles {
            particle.x = wrap(particle.x + particle.vx * scale, self.width, margin);
            particle.y = wrap(particle.y + particle.vy * scale, self.height, margin);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        for particle in &self.particles {
            surface.fill_circle(particle.x, particle.y, particle.radius, particle.alpha);
        }
    }
}

pub fn particle_count(config: &ParticleConfig, width: f64, height: f64) -> usize {
    let area = width.max(0.0) * height.max(0.0);
    if !(area > 0.0) || !area.is_finite() {
        return 0;
    }
    let raw = (area / config.area_per_particle).floor();
    let raw = if raw.is_finite() { raw as usize } else { usize::MAX };
    raw.max(config.min_particles).min(config.max_particles)
}

/// Toroidal wrap over `[-margin, extent + margin)`.
pub fn wrap(value: f64, extent: f64, margin: f64) -> f64 {
    let span = extent + margin * 2.0;
    if !(span > 0.0) {
        return value;
    }
    let low = -margin;
    if value >= low && value < extent + margin {
        return value;
    }
    let wrapped = (value - low).rem_euclid(span) + low;
    // rem_euclid can round up to exactly `span` for tiny negative inputs
    if wrapped >= extent + margin {
        low
    } else {
        wrapped
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: Range) -> f64 {
    if range.max > range.min {
        rng.random_range(range.min..range.max)
    } else {
        range.min
    }
}
