pub mod commands;
pub mod style;
pub mod theme;
pub mod types;

pub use commands::StyleCommand;
pub use style::{CssNumber, Position, StyleKey, StyleValue, Transform};
pub use theme::{ColorScheme, SchemePreference};
pub use types::{GeometrySnapshot, HeaderGeometry, ScrollMetrics};
