//! A drip-painting brush: strokes that thin as the pointer speeds up, and paint that spatters off
//! sharp turns, thin strokes, pauses, and the end of every gesture.

pub(crate) mod util;

pub mod color;
pub mod config;
pub mod engine;
pub mod export;
pub mod geom;
pub mod random;
pub mod replay;

pub use color::Color;
pub use config::{BigSplatterParams, BrushConfig, ConfigError, SplatterParams};
pub use engine::{Canvas, Painting, StrokeRenderer, StrokeStep, Surface};
pub use geom::Point;
pub use random::RandomSource;
