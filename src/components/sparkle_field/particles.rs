//! Individual sparkles and their per-frame motion.

use std::f64::consts::TAU;

use rand::Rng;

use super::options::FieldConfig;

/// Maximum speed on each axis, in pixels per frame, is half of this.
const SPEED_SPREAD: f64 = 0.3;
const OPACITY_MIN: f64 = 0.3;
const OPACITY_SPREAD: f64 = 0.5;
const TWINKLE_SPEED_MIN: f64 = 0.01;
const TWINKLE_SPEED_SPREAD: f64 = 0.02;

/// A single floating sparkle.
///
/// Only `x`, `y` and `phase` change after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Core radius in pixels.
	pub size: f64,
	/// Base opacity before twinkling.
	pub opacity: f64,
	pub phase: f64, // For twinkling
	pub twinkle_speed: f64,
}

/// Uniform sample in `[0, 1)`.
fn unit<R: Rng>(rng: &mut R) -> f64 {
	rng.gen_range(0.0..1.0)
}

/// Largest coordinate still inside `[0, extent)`.
fn far_edge(extent: f64) -> f64 {
	if extent > 0.0 {
		extent - extent * f64::EPSILON
	} else {
		0.0
	}
}

/// Teleport a coordinate that left `[0, extent)` to the opposite edge.
fn wrap(value: f64, extent: f64) -> f64 {
	if value < 0.0 {
		far_edge(extent)
	} else if value >= extent {
		0.0
	} else {
		value
	}
}

impl Particle {
	/// Create a particle at a random spot of a `width` x `height` surface.
	pub fn random<R: Rng>(rng: &mut R, config: &FieldConfig, width: f64, height: f64) -> Self {
		Self {
			x: unit(rng) * width,
			y: unit(rng) * height,
			size: config.min_size + unit(rng) * (config.max_size - config.min_size),
			vx: (unit(rng) - 0.5) * SPEED_SPREAD,
			vy: (unit(rng) - 0.5) * SPEED_SPREAD,
			opacity: OPACITY_MIN + unit(rng) * OPACITY_SPREAD,
			twinkle_speed: TWINKLE_SPEED_MIN + unit(rng) * TWINKLE_SPEED_SPREAD,
			phase: unit(rng) * TAU,
		}
	}

	/// Advance one frame: move, wrap each axis, and advance the twinkle.
	pub fn update(&mut self, width: f64, height: f64) {
		self.x = wrap(self.x + self.vx, width);
		self.y = wrap(self.y + self.vy, height);
		self.phase += self.twinkle_speed;
	}

	/// Brightness multiplier in `[0.4, 1.0]`.
	pub fn twinkle(&self) -> f64 {
		0.7 + 0.3 * self.phase.sin()
	}

	/// Opacity to draw with this frame.
	pub fn final_opacity(&self) -> f64 {
		self.opacity * self.twinkle()
	}
}
