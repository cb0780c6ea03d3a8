pub mod blob;
pub mod config;
pub mod contact;
pub mod links;
pub mod motion;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod scroll_spy;
pub mod theme;

pub use blob::BlobMorph;
pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactDraft, ContactError, ContactField, ContactMessage};
pub use links::is_external;
pub use motion::MotionPolicy;
pub use particles::{Particle, ParticleField, Surface, SurfaceScale};
pub use pointer::{Glow, MagneticOffset, Parallax, Rect, Tilt};
pub use reveal::RevealTracker;
pub use scroll_spy::ScrollSpy;
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemePreference, THEME_KEY};
