//! Canvas overlay that animates a [`FieldState`] inside a host element.
//!
//! Construction inserts a canvas as the container's first child, listens for
//! window resizes, and starts a `requestAnimationFrame` loop that runs until
//! [`ParticleField::destroy`] (or drop).

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

use super::lifecycle::FrameLoop;
use super::options::{FieldConfig, FieldOptions};
use super::render::CanvasPainter;
use super::state::FieldState;

/// Inline styles that stretch the canvas over its container without
/// catching pointer input.
const OVERLAY_STYLE: [(&str, &str); 6] = [
	("position", "absolute"),
	("top", "0"),
	("left", "0"),
	("width", "100%"),
	("height", "100%"),
	("pointer-events", "none"),
];

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running sparkle animation mounted in one container.
///
/// Independent fields may coexist; each owns its canvas, listener and loop.
pub struct ParticleField {
	container: HtmlElement,
	canvas: HtmlCanvasElement,
	state: Rc<RefCell<FieldState>>,
	frame_loop: Rc<RefCell<FrameLoop>>,
	animate: FrameCallback,
	on_resize: Option<Closure<dyn FnMut()>>,
}

/// Canvas pixel size for a CSS extent; negative or NaN extents become 0.
fn surface_extent(css: f64) -> u32 {
	if css.is_finite() && css > 0.0 {
		css as u32
	} else {
		0
	}
}

/// Match the canvas backing store to the container's bounding box.
fn fit_to_container(container: &HtmlElement, canvas: &HtmlCanvasElement) -> (f64, f64) {
	let rect = container.get_bounding_client_rect();
	let (w, h) = (surface_extent(rect.width()), surface_extent(rect.height()));
	canvas.set_width(w);
	canvas.set_height(h);
	(w as f64, h as f64)
}

fn overlay(container: &HtmlElement, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
	let style = canvas.style();
	for (property, value) in OVERLAY_STYLE {
		style.set_property(property, value)?;
	}
	container.style().set_property("position", "relative")?;
	container.insert_before(canvas, container.first_child().as_ref())?;
	Ok(())
}

fn request_frame(window: &Window, animate: &FrameCallback, frame_loop: &RefCell<FrameLoop>) {
	if let Some(ref cb) = *animate.borrow() {
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(handle) => {
				if !frame_loop.borrow_mut().schedule(handle) {
					let _ = window.cancel_animation_frame(handle);
				}
			}
			Err(err) => warn!("sparkle-field: requestAnimationFrame failed: {:?}", err),
		}
	}
}

/// Per-field random source, seeded from the browser's `Math.random()`.
fn field_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

impl ParticleField {
	/// Mount a new field into `container` and start animating.
	pub fn new(container: &HtmlElement, options: &FieldOptions) -> Result<Self, JsValue> {
		let window = web_sys::window().ok_or("sparkle-field: no window")?;
		let document = window.document().ok_or("sparkle-field: no document")?;

		let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or("sparkle-field: 2d context unavailable")?
			.dyn_into()?;

		overlay(container, &canvas)?;
		let (w, h) = fit_to_container(container, &canvas);

		let config = options.resolve();
		info!(
			"sparkle-field: {} particles on {}x{} ({} theme)",
			config.particle_count,
			w,
			h,
			config.theme().as_str()
		);
		let state = Rc::new(RefCell::new(FieldState::new(config, w, h, &mut field_rng())));
		let frame_loop = Rc::new(RefCell::new(FrameLoop::default()));

		let (container_resize, canvas_resize, state_resize) =
			(container.clone(), canvas.clone(), state.clone());
		let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
			let (nw, nh) = fit_to_container(&container_resize, &canvas_resize);
			state_resize.borrow_mut().resize(nw, nh);
			debug!("sparkle-field: resized to {}x{}", nw, nh);
		});
		window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

		let animate: FrameCallback = Rc::new(RefCell::new(None));
		let (state_anim, loop_anim, animate_inner) =
			(state.clone(), frame_loop.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if !loop_anim.borrow_mut().fire() {
				return;
			}
			let mut painter = CanvasPainter::new(&ctx);
			if let Err(err) = state_anim.borrow_mut().frame(&mut painter) {
				error!("sparkle-field: frame failed, animation stopped: {:?}", err);
				return;
			}
			if let Some(win) = web_sys::window() {
				request_frame(&win, &animate_inner, &loop_anim);
			}
		}));
		request_frame(&window, &animate, &frame_loop);

		Ok(Self {
			container: container.clone(),
			canvas,
			state,
			frame_loop,
			animate,
			on_resize: Some(on_resize),
		})
	}

	/// Re-read the container size and resize the surface to match.
	pub fn resize(&self) {
		if !self.is_running() {
			return;
		}
		let (w, h) = fit_to_container(&self.container, &self.canvas);
		self.state.borrow_mut().resize(w, h);
	}

	/// Whether the loop is still live (not destroyed).
	pub fn is_running(&self) -> bool {
		self.frame_loop.borrow().is_running()
	}

	/// The overlay canvas.
	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}

	/// Configuration the field was built with.
	pub fn config(&self) -> FieldConfig {
		self.state.borrow().config().clone()
	}

	/// Current surface size in pixels.
	pub fn size(&self) -> (f64, f64) {
		let state = self.state.borrow();
		(state.width(), state.height())
	}

	/// Number of particles animated.
	pub fn particle_count(&self) -> usize {
		self.state.borrow().particles.len()
	}

	/// Frames drawn since construction.
	pub fn frames(&self) -> u64 {
		self.state.borrow().frames()
	}

	/// Stop the loop, detach the canvas and unregister the resize listener.
	///
	/// Safe to call more than once; later calls do nothing.
	pub fn destroy(&mut self) {
		let window = web_sys::window();

		if let Some(handle) = self.frame_loop.borrow_mut().destroy() {
			if let Some(ref win) = window {
				let _ = win.cancel_animation_frame(handle);
			}
		}

		if self.canvas.parent_node().is_some() {
			self.canvas.remove();
		}

		if let Some(cb) = self.on_resize.take() {
			if let Some(ref win) = window {
				let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			debug!(
				"sparkle-field: destroyed after {} frames",
				self.state.borrow().frames()
			);
		}

		// Breaks the closure's reference cycle back to itself.
		self.animate.borrow_mut().take();
	}
}

impl Drop for ParticleField {
	fn drop(&mut self) {
		self.destroy();
	}
}
