use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid range for {field}: {min} > {max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Half-open `[min, max)` sampling range.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub area_per_particle: f64,
    pub min_particles: usize,
    pub max_particles: usize,
    pub wrap_margin: f64,
    pub radius: Range,
    pub velocity_x: Range,
    pub velocity_y: Range,
    pub alpha: Range,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 70_000.0,
            min_particles: 0,
            max_particles: 400,
            wrap_margin: 10.0,
            radius: Range::new(1.8, 5.5),
            velocity_x: Range::new(-0.3, 0.3),
            velocity_y: Range::new(-0.12, 0.12),
            alpha: Range::new(0.06, 0.24),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub active_ratio: f64,
    pub reveal_ratio: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            active_ratio: 0.32,
            reveal_ratio: 0.85,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    pub glow_smoothing_ms: f64,
    pub magnetic_pull_x: f64,
    pub magnetic_pull_y: f64,
    pub magnetic_scale: f64,
    pub tilt_max_x_deg: f64,
    pub tilt_max_y_deg: f64,
    pub tilt_perspective_px: f64,
    pub tilt_lift_px: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            glow_smoothing_ms: 120.0,
            magnetic_pull_x: 10.0,
            magnetic_pull_y: 8.0,
            magnetic_scale: 1.03,
            tilt_max_x_deg: 8.0,
            tilt_max_y_deg: 10.0,
            tilt_perspective_px: 800.0,
            tilt_lift_px: 12.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub reduced_time_scale: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_time_scale: 0.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub particles: ParticleConfig,
    pub scroll: ScrollConfig,
    pub pointer: PointerConfig,
    pub motion: MotionConfig,
    pub contact: ContactConfig,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let particles = &self.particles;
        if !(particles.area_per_particle > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "particles.area_per_particle",
                value: particles.area_per_particle,
            });
        }
        if particles.min_particles > particles.max_particles {
            return Err(ConfigError::InvalidRange {
                field: "particles.min_particles",
                min: particles.min_particles as f64,
                max: particles.max_particles as f64,
            });
        }
        if !(particles.wrap_margin >= 0.0) {
            return Err(ConfigError::NotPositive {
                field: "particles.wrap_margin",
                value: particles.wrap_margin,
            });
        }
        particles.radius.check("particles.radius")?;
        particles.velocity_x.check("particles.velocity_x")?;
        particles.velocity_y.check("particles.velocity_y")?;
        particles.alpha.check("particles.alpha")?;
        if !(self.pointer.glow_smoothing_ms >= 0.0) {
            return Err(ConfigError::NotPositive {
                field: "pointer.glow_smoothing_ms",
                value: self.pointer.glow_smoothing_ms,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{"particles":{"max_particles":50},"contact":{"recipient":"a@b.c"}}"#)
                .expect("valid config");
        assert_eq!(config.particles.max_particles, 50);
        assert_eq!(config.particles.area_per_particle, 70_000.0);
        assert_eq!(config.scroll.active_ratio, 0.32);
        assert_eq!(config.contact.recipient, "a@b.c");
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = SiteConfig::from_json(r#"{"particles":{"alpha":{"min":0.5,"max":0.1}}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRange {
                field: "particles.alpha",
                ..
            }
        ));
    }

    #[test]
    fn zero_quota_is_rejected() {
        let err = SiteConfig::from_json(r#"{"particles":{"area_per_particle":0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
