use folio_core::config::ParticleConfig;
use folio_core::{Particle, ParticleField, Surface};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Default)]
struct RecordingSurface {
    clears: Vec<(f64, f64)>,
    circles: Vec<(f64, f64, f64, f64)>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.clears.push((width, height));
        self.circles.clear();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) {
        self.circles.push((x, y, radius, alpha));
    }
}

fn field_with_one(particle: Particle, width: f64, height: f64) -> ParticleField {
    // one particle for any positive area
    let config = ParticleConfig {
        min_particles: 1,
        max_particles: 1,
        ..ParticleConfig::default()
    };
    let mut field = ParticleField::new(config);
    let mut rng = SmallRng::seed_from_u64(7);
    field.configure(width, height, &mut rng);
    field.replace_particles(vec![particle]);
    field
}

fn still(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle {
        x,
        y,
        radius: 2.0,
        vx,
        vy,
        alpha: 0.1,
    }
}

#[test]
fn count_is_monotone_in_area_and_positions_in_bounds() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut field = ParticleField::new(ParticleConfig::default());
    let sizes = [
        (0.0, 0.0),
        (320.0, 0.0),
        (320.0, 240.0),
        (640.0, 480.0),
        (1280.0, 720.0),
        (1920.0, 1080.0),
        (2560.0, 1440.0),
        (3840.0, 2160.0),
        (7680.0, 4320.0),
    ];
    let mut last_count = 0usize;
    for (width, height) in sizes {
        field.configure(width, height, &mut rng);
        assert!(field.len() >= last_count, "count shrank at {width}x{height}");
        last_count = field.len();
        for particle in field.particles() {
            assert!(particle.x >= 0.0 && particle.x < width);
            assert!(particle.y >= 0.0 && particle.y < height);
            assert!(particle.radius >= 1.8 && particle.radius < 5.5);
            assert!(particle.alpha >= 0.06 && particle.alpha < 0.24);
        }
    }
    assert_eq!(field.target_count(1920.0, 1080.0), 29);
    assert_eq!(field.target_count(7680.0, 4320.0), 400);
}

#[test]
fn zero_area_viewport_runs_harmlessly() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut field = ParticleField::new(ParticleConfig::default());
    field.configure(0.0, 0.0, &mut rng);
    assert!(field.is_empty());
    let mut surface = RecordingSurface::default();
    field.advance_frame(&mut surface);
    field.advance_frame(&mut surface);
    assert_eq!(surface.clears, vec![(0.0, 0.0), (0.0, 0.0)]);
    assert!(surface.circles.is_empty());
}

#[test]
fn configure_twice_resets_with_fresh_positions() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut field = ParticleField::new(ParticleConfig::default());
    field.configure(1920.0, 1080.0, &mut rng);
    let first: Vec<Particle> = field.particles().to_vec();
    field.configure(1920.0, 1080.0, &mut rng);
    let second: Vec<Particle> = field.particles().to_vec();
    assert_eq!(first.len(), second.len());
    assert!(!first.is_empty());
    assert_ne!(first, second);
}

#[test]
fn wraps_across_every_edge() {
    let (width, height) = (800.0, 600.0);
    // margin is 10, so the extended span is [-10, 810) x [-10, 610)
    let cases = [
        (still(809.0, 300.0, 3.0, 0.0), (-8.0, 300.0)),
        (still(-9.0, 300.0, -3.0, 0.0), (808.0, 300.0)),
        (still(400.0, 609.0, 0.0, 2.5), (400.0, -8.5)),
        (still(400.0, -9.5, 0.0, -1.0), (400.0, 609.5)),
    ];
    for (particle, (ex, ey)) in cases {
        let mut field = field_with_one(particle, width, height);
        field.step();
        let moved = field.particles()[0];
        assert!((moved.x - ex).abs() < 1e-9, "x {} expected {}", moved.x, ex);
        assert!((moved.y - ey).abs() < 1e-9, "y {} expected {}", moved.y, ey);
    }
}

#[test]
fn wrap_holds_for_large_velocities() {
    let mut field = field_with_one(still(100.0, 100.0, 5000.0, -7321.5), 800.0, 600.0);
    for _ in 0..50 {
        field.step();
        let particle = field.particles()[0];
        assert!(particle.x >= -10.0 && particle.x < 810.0);
        assert!(particle.y >= -10.0 && particle.y < 610.0);
    }
}

#[test]
fn advance_frame_clears_then_draws_every_particle() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut field = ParticleField::new(ParticleConfig::default());
    field.configure(1280.0, 720.0, &mut rng);
    let mut surface = RecordingSurface::default();
    field.advance_frame(&mut surface);
    assert_eq!(surface.clears, vec![(1280.0, 720.0)]);
    assert_eq!(surface.circles.len(), field.len());
    let drawn: Vec<(f64, f64)> = surface.circles.iter().map(|c| (c.0, c.1)).collect();
    let stored: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(drawn, stored);
}

#[test]
fn zero_time_scale_holds_particles_still() {
    let mut field = field_with_one(still(100.0, 100.0, 0.3, 0.1), 800.0, 600.0);
    field.set_time_scale(0.0);
    field.step();
    assert_eq!(field.particles()[0].x, 100.0);
    assert_eq!(field.particles()[0].y, 100.0);
}
