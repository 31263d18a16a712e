//! Running/destroyed bookkeeping for the animation loop.

/// Where a field is in its lifetime. `Destroyed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
	#[default]
	Running,
	Destroyed,
}

/// Tracks the single pending `requestAnimationFrame` handle of a field.
///
/// Each frame consumes the pending handle via [`FrameLoop::fire`] and
/// registers the next one via [`FrameLoop::schedule`]. [`FrameLoop::destroy`]
/// hands back whatever is still pending so it can be cancelled.
#[derive(Debug, Default)]
pub struct FrameLoop {
	phase: Phase,
	pending: Option<i32>,
}

impl FrameLoop {
	pub fn is_running(&self) -> bool {
		self.phase == Phase::Running
	}

	/// Record the handle of the next requested frame.
	///
	/// Returns `false` once destroyed, in which case the caller must cancel
	/// `handle` itself.
	pub fn schedule(&mut self, handle: i32) -> bool {
		if !self.is_running() {
			return false;
		}
		self.pending = Some(handle);
		true
	}

	/// A scheduled frame fired. Returns whether it should draw.
	pub fn fire(&mut self) -> bool {
		self.pending = None;
		self.is_running()
	}

	/// Enter `Destroyed`, returning the handle that still needs cancelling.
	pub fn destroy(&mut self) -> Option<i32> {
		self.phase = Phase::Destroyed;
		self.pending.take()
	}
}
