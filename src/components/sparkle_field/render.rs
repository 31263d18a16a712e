//! Canvas rendering for the sparkle field.
//!
//! Each particle becomes a [`Sparkle`]: a radial glow of four times its size
//! with a solid core on top. Drawing goes through the [`Painter`] trait so the
//! frame logic stays independent of the browser.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::theme::{Color, SparklePalette};

/// Glow radius as a multiple of the particle size.
const GLOW_SCALE: f64 = 4.0;

/// Everything needed to draw one particle for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
	pub x: f64,
	pub y: f64,
	/// Twinkled opacity every color below was derived from.
	pub opacity: f64,
	pub glow_radius: f64,
	/// Gradient stops `(offset, color)` from the center outwards.
	pub glow: [(f64, Color); 3],
	pub core_radius: f64,
	pub core: Color,
}

impl Sparkle {
	pub fn new(particle: &Particle, palette: &SparklePalette) -> Self {
		let opacity = particle.final_opacity();
		Self {
			x: particle.x,
			y: particle.y,
			opacity,
			glow_radius: particle.size * GLOW_SCALE,
			glow: [
				(
					0.0,
					palette
						.glow_inner
						.with_alpha(opacity * palette.glow_inner_alpha),
				),
				(
					palette.glow_mid_offset,
					palette.glow_mid.with_alpha(opacity * palette.glow_mid_alpha),
				),
				(1.0, Color::TRANSPARENT),
			],
			core_radius: particle.size,
			core: palette.core.with_alpha(opacity * palette.core_alpha),
		}
	}
}

/// A 2D surface sparkles can be drawn onto.
pub trait Painter {
	type Error;

	/// Erase the whole `width` x `height` surface.
	fn clear(&mut self, width: f64, height: f64);

	fn draw_sparkle(&mut self, sparkle: &Sparkle) -> Result<(), Self::Error>;
}

/// [`Painter`] backed by a canvas 2D context.
pub struct CanvasPainter<'a> {
	ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasPainter<'a> {
	pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}

	fn fill_sparkle(&self, sparkle: &Sparkle) -> Result<(), JsValue> {
		let ctx = self.ctx;
		ctx.translate(sparkle.x, sparkle.y)?;

		let gradient = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, sparkle.glow_radius)?;
		for (offset, color) in &sparkle.glow {
			gradient.add_color_stop(*offset as f32, &color.to_css())?;
		}

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.begin_path();
		ctx.arc(0.0, 0.0, sparkle.glow_radius, 0.0, PI * 2.0)?;
		ctx.fill();

		ctx.set_fill_style_str(&sparkle.core.to_css());
		ctx.begin_path();
		ctx.arc(0.0, 0.0, sparkle.core_radius, 0.0, PI * 2.0)?;
		ctx.fill();
		Ok(())
	}
}

impl Painter for CanvasPainter<'_> {
	type Error = JsValue;

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn draw_sparkle(&mut self, sparkle: &Sparkle) -> Result<(), JsValue> {
		self.ctx.save();
		let result = self.fill_sparkle(sparkle);
		self.ctx.restore();
		result
	}
}
