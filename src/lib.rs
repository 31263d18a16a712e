//! sparkle-field: twinkling particle background for landing-page hero sections.
//!
//! This crate provides a WASM canvas overlay that animates drifting,
//! twinkling sparkles behind a page's hero content, themed for light or
//! dark pages.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::sparkle_field::{FieldConfig, FieldOptions, ParticleField, SparkleHero, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("sparkle-field: logging initialized");
}

/// Read the page theme from the `data-theme` attribute of `<html>`.
/// Missing or unknown values fall back to light.
fn load_theme() -> Theme {
	let attr = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
		.and_then(|el| el.get_attribute("data-theme"));

	match attr.as_deref().map(Theme::from_attr) {
		Some(Some(theme)) => theme,
		Some(None) => {
			warn!("sparkle-field: unknown data-theme {:?}, using light", attr);
			Theme::Light
		}
		None => Theme::Light,
	}
}

/// Load field overrides from a script element with id="sparkle-config".
/// Expected format: JSON with any of { isDark, particleCount, minSize, maxSize }
fn load_options() -> Option<FieldOptions> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("sparkle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldOptions::from_json(&json_text) {
		Ok(options) => {
			info!("sparkle-field: loaded overrides {:?}", options);
			Some(options)
		}
		Err(e) => {
			warn!("sparkle-field: failed to parse sparkle config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads theme and overrides from the DOM and renders the hero section.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let theme = load_theme();
	let options = load_options().unwrap_or_default();
	let theme_signal = Signal::derive(move || theme);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=theme.as_str() />
		<Title text="Sparkle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<SparkleHero theme=theme_signal options=options>
			<div class="hero-content">
				<h1>"Sparkle Field"</h1>
				<p class="subtitle">"Drifting, twinkling particles behind your hero content."</p>
			</div>
		</SparkleHero>
	}
}
