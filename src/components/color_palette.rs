use crate::engine::{Color, PALETTE};
use leptos::prelude::*;

/// One button per palette color. The selected swatch carries the `selected` class.
#[component]
pub fn ColorPalette(
	#[prop(into)] selected: Signal<Color>,
	#[prop(into)] on_select: Callback<Color>,
) -> impl IntoView {
	let swatches = PALETTE
		.iter()
		.map(|swatch| {
			let color = swatch.color;
			view! {
				<button
					class="Swatch"
					class:selected=move || selected.get() == color
					class:outlined={color == Color::WHITE}
					title=swatch.name
					style:background-color=color.to_string()
					on:click=move |_| on_select.run(color)
				></button>
			}
		})
		.collect_view();

	view! { <div class="ColorPalette">{swatches}</div> }
}
