//! Field configuration and the overrides a host may supply.

use log::warn;
use serde::Deserialize;

use super::theme::Theme;

/// Resolved, immutable configuration of one particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Use the dark palette.
	pub is_dark: bool,
	/// Number of particles, fixed for the field's lifetime.
	pub particle_count: usize,
	/// Smallest core radius in pixels.
	pub min_size: f64,
	/// Largest core radius in pixels.
	pub max_size: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			is_dark: false,
			particle_count: 120,
			min_size: 0.5,
			max_size: 1.5,
		}
	}
}

impl FieldConfig {
	/// Theme matching `is_dark`.
	pub fn theme(&self) -> Theme {
		Theme::from_dark(self.is_dark)
	}
}

/// Optional overrides for [`FieldConfig`].
///
/// Deserializes from the camelCase JSON a page embeds, e.g.
/// `{ "particleCount": 80, "isDark": true }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldOptions {
	/// `isDark`; when absent the host theme decides.
	pub is_dark: Option<bool>,
	/// `particleCount`.
	pub particle_count: Option<usize>,
	/// `minSize`, in pixels.
	pub min_size: Option<f64>,
	/// `maxSize`, in pixels.
	pub max_size: Option<f64>,
}

impl FieldOptions {
	/// Parse overrides from JSON text.
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str(text)
	}

	/// Fill in `isDark` from the host theme unless it was set explicitly.
	pub fn or_theme(mut self, theme: Theme) -> Self {
		self.is_dark.get_or_insert(theme.is_dark());
		self
	}

	/// Apply the overrides on top of the defaults.
	///
	/// Negative sizes are clamped to zero and an inverted range is swapped so
	/// every particle size lands in `[min_size, max_size]`.
	pub fn resolve(&self) -> FieldConfig {
		let defaults = FieldConfig::default();
		let mut min_size = self.min_size.unwrap_or(defaults.min_size);
		let mut max_size = self.max_size.unwrap_or(defaults.max_size);

		if min_size < 0.0 || max_size < 0.0 {
			warn!("sparkle-field: negative particle size ({min_size}, {max_size}), clamping to 0");
			min_size = min_size.max(0.0);
			max_size = max_size.max(0.0);
		}
		if min_size > max_size {
			warn!("sparkle-field: minSize {min_size} exceeds maxSize {max_size}, swapping");
			std::mem::swap(&mut min_size, &mut max_size);
		}

		FieldConfig {
			is_dark: self.is_dark.unwrap_or(defaults.is_dark),
			particle_count: self.particle_count.unwrap_or(defaults.particle_count),
			min_size,
			max_size,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_overrides_resolve_to_defaults() {
		let config = FieldOptions::default().resolve();
		assert_eq!(config, FieldConfig::default());
		assert_eq!(config.particle_count, 120);
		assert_eq!(config.min_size, 0.5);
		assert_eq!(config.max_size, 1.5);
		assert!(!config.is_dark);
	}

	#[test]
	fn json_overrides_use_camel_case_keys() {
		let options = FieldOptions::from_json(r#"{ "isDark": true, "particleCount": 3 }"#).unwrap();
		let config = options.resolve();
		assert!(config.is_dark);
		assert_eq!(config.particle_count, 3);
		assert_eq!(config.min_size, 0.5);

		let sized = FieldOptions::from_json(r#"{ "minSize": 1.0, "maxSize": 4.0 }"#).unwrap();
		assert_eq!(sized.resolve().max_size, 4.0);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(FieldOptions::from_json(r#"{ "particleCount": "many" }"#).is_err());
		assert!(FieldOptions::from_json("not json").is_err());
	}

	#[test]
	fn host_theme_fills_missing_is_dark() {
		let options = FieldOptions::default().or_theme(Theme::Dark);
		assert!(options.resolve().is_dark);
		assert_eq!(options.resolve().theme(), Theme::Dark);
	}

	#[test]
	fn explicit_is_dark_beats_host_theme() {
		let options = FieldOptions::from_json(r#"{ "isDark": false }"#)
			.unwrap()
			.or_theme(Theme::Dark);
		assert!(!options.resolve().is_dark);

		let options = FieldOptions::from_json(r#"{ "isDark": true }"#)
			.unwrap()
			.or_theme(Theme::Light);
		assert_eq!(options.resolve().theme(), Theme::Dark);
	}

	#[test]
	fn inverted_and_negative_sizes_are_repaired() {
		let swapped = FieldOptions {
			min_size: Some(3.0),
			max_size: Some(1.0),
			..Default::default()
		}
		.resolve();
		assert_eq!((swapped.min_size, swapped.max_size), (1.0, 3.0));

		let clamped = FieldOptions {
			min_size: Some(-2.0),
			..Default::default()
		}
		.resolve();
		assert_eq!((clamped.min_size, clamped.max_size), (0.0, 1.5));
	}
}
