pub mod avatar;
pub mod config;
pub mod engine;
pub mod events;
pub mod geometry;
pub mod header;
pub mod math;
pub mod registry;
pub mod route;
pub mod sim;
pub mod theme;

pub use avatar::{AvatarTransform, interpolate_avatar};
pub use config::{AvatarConfig, ConfigError, EngineConfig};
pub use engine::{LayoutEngine, PassOutcome, Phase};
pub use events::{EventHost, EventKind, ListenerSet, detach_all};
pub use geometry::GeometrySampler;
pub use header::{HeaderLayout, InnerPosition, Regime};
pub use registry::{MemoryRegistry, StyleRegistry};
pub use route::Route;
