//! Browser-independent state of one sparkle field.
//!
//! `FieldState` owns the particles and the current surface size. The canvas
//! binding calls [`FieldState::frame`] once per animation frame and
//! [`FieldState::resize`] whenever the host container changes size.

use rand::Rng;

use super::options::FieldConfig;
use super::particles::Particle;
use super::render::{Painter, Sparkle};
use super::theme::SparklePalette;

/// Core field state, mutated each frame by the animation loop.
pub struct FieldState {
	pub particles: Vec<Particle>,
	config: FieldConfig,
	palette: SparklePalette,
	width: f64,
	height: f64,
	frames: u64,
}

impl FieldState {
	/// Spawn `config.particle_count` particles over a `width` x `height` surface.
	pub fn new<R: Rng>(config: FieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
		let particles = (0..config.particle_count)
			.map(|_| Particle::random(rng, &config, width, height))
			.collect();

		Self {
			particles,
			palette: config.theme().palette(),
			config,
			width,
			height,
			frames: 0,
		}
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Number of frames drawn so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Adopt a new surface size. Particles are left where they are; any that
	/// now lie outside are wrapped by their next update.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Clear the surface, then update and draw each particle in turn.
	pub fn frame<P: Painter>(&mut self, painter: &mut P) -> Result<(), P::Error> {
		painter.clear(self.width, self.height);
		for particle in &mut self.particles {
			particle.update(self.width, self.height);
			painter.draw_sparkle(&Sparkle::new(particle, &self.palette))?;
		}
		self.frames += 1;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::convert::Infallible;

	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::sparkle_field::options::FieldOptions;

	/// Painter that records what it was asked to draw.
	#[derive(Default)]
	struct Recorder {
		clears: Vec<(f64, f64)>,
		sparkles: Vec<Sparkle>,
	}

	impl Painter for Recorder {
		type Error = Infallible;

		fn clear(&mut self, width: f64, height: f64) {
			self.clears.push((width, height));
		}

		fn draw_sparkle(&mut self, sparkle: &Sparkle) -> Result<(), Infallible> {
			self.sparkles.push(sparkle.clone());
			Ok(())
		}
	}

	/// Painter whose draws fail after `budget` sparkles.
	struct Failing {
		budget: usize,
	}

	impl Painter for Failing {
		type Error = &'static str;

		fn clear(&mut self, _width: f64, _height: f64) {}

		fn draw_sparkle(&mut self, _sparkle: &Sparkle) -> Result<(), &'static str> {
			if self.budget == 0 {
				return Err("context lost");
			}
			self.budget -= 1;
			Ok(())
		}
	}

	fn field(json: &str, width: f64, height: f64, seed: u64) -> FieldState {
		let config = FieldOptions::from_json(json).unwrap().resolve();
		FieldState::new(config, width, height, &mut SmallRng::seed_from_u64(seed))
	}

	fn in_bounds(state: &FieldState) -> bool {
		state.particles.iter().all(|p| {
			p.x >= 0.0 && p.x < state.width() && p.y >= 0.0 && p.y < state.height()
		})
	}

	#[test]
	fn small_dark_field_on_square_container() {
		let state = field(r#"{ "particleCount": 3, "isDark": true }"#, 100.0, 100.0, 3);
		assert_eq!(state.particles.len(), 3);
		assert!(state.config().is_dark);
		assert!(in_bounds(&state));
	}

	#[test]
	fn default_field_has_120_particles() {
		let state = field("{}", 640.0, 480.0, 9);
		assert_eq!(state.particles.len(), 120);
	}

	#[test]
	fn count_and_sizes_are_stable_across_frames() {
		let mut state = field(r#"{ "particleCount": 40 }"#, 200.0, 120.0, 11);
		let sizes: Vec<f64> = state.particles.iter().map(|p| p.size).collect();
		let opacities: Vec<f64> = state.particles.iter().map(|p| p.opacity).collect();
		let mut painter = Recorder::default();

		for _ in 0..250 {
			state.frame(&mut painter).unwrap();
			assert_eq!(state.particles.len(), 40);
		}

		let config = state.config().clone();
		for (p, (size, opacity)) in state.particles.iter().zip(sizes.iter().zip(&opacities)) {
			assert_eq!(p.size, *size);
			assert_eq!(p.opacity, *opacity);
			assert!(p.size >= config.min_size && p.size <= config.max_size);
		}
		assert_eq!(state.frames(), 250);
	}

	#[test]
	fn particles_stay_in_bounds_over_many_frames() {
		let mut state = field(r#"{ "particleCount": 60 }"#, 30.0, 20.0, 5);
		let mut painter = Recorder::default();
		for _ in 0..5000 {
			state.frame(&mut painter).unwrap();
			assert!(in_bounds(&state));
		}
	}

	#[test]
	fn one_frame_moves_each_particle_by_its_velocity() {
		let mut state = field(r#"{ "isDark": false, "particleCount": 50 }"#, 400.0, 300.0, 21);
		let before = state.particles.clone();
		state.frame(&mut Recorder::default()).unwrap();

		for (old, new) in before.iter().zip(&state.particles) {
			let wrapped_x = new.x == 0.0 || new.x > 399.0 && old.x < 1.0;
			let wrapped_y = new.y == 0.0 || new.y > 299.0 && old.y < 1.0;
			if !wrapped_x {
				assert!((new.x - (old.x + old.vx)).abs() < 1e-9);
			}
			if !wrapped_y {
				assert!((new.y - (old.y + old.vy)).abs() < 1e-9);
			}
			assert!((new.phase - (old.phase + old.twinkle_speed)).abs() < 1e-12);
		}
	}

	#[test]
	fn frame_clears_then_draws_each_updated_particle_in_order() {
		let mut state = field(r#"{ "particleCount": 5 }"#, 100.0, 80.0, 8);
		let mut painter = Recorder::default();
		state.frame(&mut painter).unwrap();

		assert_eq!(painter.clears, vec![(100.0, 80.0)]);
		assert_eq!(painter.sparkles.len(), 5);
		for (sparkle, p) in painter.sparkles.iter().zip(&state.particles) {
			assert_eq!((sparkle.x, sparkle.y), (p.x, p.y));
			assert_eq!(sparkle.opacity, p.final_opacity());
			assert!(sparkle.opacity <= p.opacity && sparkle.opacity >= 0.4 * p.opacity - 1e-12);
		}
	}

	#[test]
	fn resize_keeps_particles_until_they_next_move() {
		let mut state = field(r#"{ "particleCount": 1 }"#, 100.0, 100.0, 2);
		{
			let p = &mut state.particles[0];
			p.x = 80.0;
			p.y = 20.0;
			p.vx = 0.1;
			p.vy = 0.0;
		}

		state.resize(50.0, 50.0);
		assert_eq!((state.width(), state.height()), (50.0, 50.0));
		assert_eq!(state.particles[0].x, 80.0);

		let mut painter = Recorder::default();
		state.frame(&mut painter).unwrap();
		assert_eq!(state.particles[0].x, 0.0);
		assert_eq!(painter.clears, vec![(50.0, 50.0)]);
	}

	#[test]
	fn zero_area_surface_still_updates() {
		let mut state = field(r#"{ "particleCount": 4 }"#, 0.0, 0.0, 4);
		let mut painter = Recorder::default();
		state.frame(&mut painter).unwrap();
		assert_eq!(painter.sparkles.len(), 4);
		assert!(state.particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}

	#[test]
	fn draw_failure_stops_the_frame() {
		let mut state = field(r#"{ "particleCount": 6 }"#, 100.0, 100.0, 12);
		let mut painter = Failing { budget: 2 };
		assert_eq!(state.frame(&mut painter), Err("context lost"));
		assert_eq!(state.frames(), 0);
	}
}
