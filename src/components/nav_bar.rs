use leptos::prelude::*;

// The buttons are placeholders and do nothing yet.
#[component]
pub fn NavBar(#[prop(into)] title: String) -> impl IntoView {
	view! {
		<nav class="NavBar">
			<div class="NavLogo">
				<h1>{title}</h1>
			</div>
			<div class="NavActions">
				<button class="NavButton">"Save"</button>
				<button class="NavButton">"Settings"</button>
				<button class="NavButton">"Logout"</button>
			</div>
		</nav>
	}
}
