use super::WhiteboardError;
use leptos::prelude::*;

#[component]
pub fn InitializationFailed(error: WhiteboardError) -> impl IntoView {
	view! {
		<div class="InitializationFailed">
			"The drawing surface could not be created: " {error.to_string()}
		</div>
	}
}
