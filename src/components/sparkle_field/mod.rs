//! Twinkling particle field drawn behind a hero section.
//!
//! A [`ParticleField`] overlays a canvas on a host element and animates a fixed
//! set of sparkles with:
//! - Linear drift with wraparound at the surface edges
//! - Per-particle sine twinkle of the base opacity
//! - Light and dark palettes chosen once at construction
//!
//! # Example
//!
//! ```ignore
//! use sparkle_field::{FieldOptions, SparkleHero, Theme};
//!
//! let options = FieldOptions { particle_count: Some(80), ..Default::default() };
//! view! {
//!     <SparkleHero theme=Theme::Dark options=options>
//!         <h1>"Hello"</h1>
//!     </SparkleHero>
//! }
//! ```

mod component;
mod field;
mod lifecycle;
mod options;
mod particles;
mod render;
mod state;
pub mod theme;

pub use component::SparkleHero;
pub use field::ParticleField;
pub use options::{FieldConfig, FieldOptions};
pub use theme::Theme;
