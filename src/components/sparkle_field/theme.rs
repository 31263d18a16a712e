//! Light/dark sparkle palettes.
//!
//! The host decides the theme; the field only sees the resulting palette.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Fully transparent black, the last stop of every glow.
	pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string: hex when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Page theme as stored by the host in `data-theme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Blue sparkles for light pages.
	#[default]
	Light,
	/// White sparkles for dark pages.
	Dark,
}

impl Theme {
	/// Parse the host's theme string. Anything but `"light"`/`"dark"` is rejected.
	pub fn from_attr(value: &str) -> Option<Self> {
		match value.trim() {
			"light" => Some(Theme::Light),
			"dark" => Some(Theme::Dark),
			_ => None,
		}
	}

	/// Theme for an `isDark` flag.
	pub fn from_dark(is_dark: bool) -> Self {
		if is_dark { Theme::Dark } else { Theme::Light }
	}

	/// Whether this is the dark theme.
	pub fn is_dark(self) -> bool {
		self == Theme::Dark
	}

	/// The `data-theme` spelling.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	/// Sparkle colors for this theme.
	pub fn palette(self) -> SparklePalette {
		match self {
			Theme::Light => SparklePalette::light(),
			Theme::Dark => SparklePalette::dark(),
		}
	}
}

/// Colors for one sparkle: a radial glow and a solid core.
///
/// Each `*_alpha` is a multiplier applied to the particle's final opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparklePalette {
	/// Glow color at the center.
	pub glow_inner: Color,
	/// Opacity multiplier for `glow_inner`.
	pub glow_inner_alpha: f64,
	/// Glow color at `glow_mid_offset` of the glow radius.
	pub glow_mid: Color,
	/// Opacity multiplier for `glow_mid`.
	pub glow_mid_alpha: f64,
	/// Gradient offset of the middle stop.
	pub glow_mid_offset: f64,
	/// Solid core disk.
	pub core: Color,
	/// Opacity multiplier for `core`.
	pub core_alpha: f64,
}

impl SparklePalette {
	/// White sparkles with a pale blue halo.
	pub fn dark() -> Self {
		Self {
			glow_inner: Color::rgb(255, 255, 255),
			glow_inner_alpha: 0.8,
			glow_mid: Color::rgb(147, 197, 253),
			glow_mid_alpha: 0.4,
			glow_mid_offset: 0.3,
			core: Color::rgb(255, 255, 255),
			core_alpha: 1.0,
		}
	}

	/// Blue (#2563EB) sparkles fading through #3B82F6.
	pub fn light() -> Self {
		Self {
			glow_inner: Color::rgb(37, 99, 235),
			glow_inner_alpha: 0.6,
			glow_mid: Color::rgb(59, 130, 246),
			glow_mid_alpha: 0.3,
			glow_mid_offset: 0.3,
			core: Color::rgb(37, 99, 235),
			core_alpha: 0.8,
		}
	}
}
