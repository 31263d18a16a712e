//! Leptos component hosting a sparkle field behind hero content.
//!
//! The component renders a `<section class="hero">` and, once it is in the
//! document, mounts a [`ParticleField`] into it. Whenever the theme signal
//! changes the old field is destroyed and a new one is built, since a field's
//! palette is fixed for its lifetime.

use leptos::prelude::*;
use log::warn;
use web_sys::HtmlElement;

use super::field::ParticleField;
use super::options::FieldOptions;
use super::theme::Theme;

/// Hero section with an animated sparkle background.
///
/// `options` carries the page's overrides; the theme signal decides `isDark`
/// unless the overrides set it.
#[component]
pub fn SparkleHero(
	#[prop(into)] theme: Signal<Theme>,
	#[prop(optional)] options: FieldOptions,
	children: Children,
) -> impl IntoView {
	let hero_ref = NodeRef::<leptos::html::Section>::new();

	Effect::new(move |previous: Option<Option<ParticleField>>| {
		if let Some(Some(mut field)) = previous {
			field.destroy();
		}

		let theme = theme.get();
		let container: HtmlElement = hero_ref.get()?.into();
		match ParticleField::new(&container, &options.clone().or_theme(theme)) {
			Ok(field) => Some(field),
			Err(err) => {
				warn!("sparkle-field: could not start particle field: {:?}", err);
				None
			}
		}
	});

	view! {
		<section node_ref=hero_ref class="hero">
			{children()}
		</section>
	}
}
