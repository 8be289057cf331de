use super::{fallback, CanvasSurface, ColorPalette, WhiteboardError};
use crate::engine::{self, Color, InputEvent, PrimaryContact, WhiteboardConfig};
use crate::util::{find_touch, touch_ids, ClientPosition};
use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_event_listener_with_options, UseEventListenerOptions};

type Engine = engine::Whiteboard<CanvasSurface>;

/// A full-viewport drawing canvas with a color palette and a clear button.
///
/// The engine is created once the `<canvas>` is mounted. Input listeners are attached to the
/// canvas for as long as this component lives and are removed when it is disposed.
#[component]
pub fn Whiteboard(#[prop(optional)] config: WhiteboardConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<html::Canvas>::new();
	let engine = StoredValue::new_local(None::<Engine>);
	let selected = RwSignal::new(config.initial_color);
	let (error, set_error) = signal(None::<WhiteboardError>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if engine.with_value(Option::is_some) {
			return;
		}
		match CanvasSurface::new(canvas) {
			Ok(surface) => {
				let mut whiteboard = Engine::new(surface, &config);
				whiteboard.select_color(selected.get_untracked());
				engine.set_value(Some(whiteboard));
			}
			// Already logged by `CanvasSurface::new`.
			Err(err) => set_error.set(Some(err)),
		}
	});

	let dispatch = move |event: InputEvent| {
		engine.update_value(|engine| {
			if let Some(engine) = engine {
				engine.handle(event);
			}
		});
	};

	let _ = use_event_listener(canvas_ref, ev::mousedown, move |e| {
		if let Some(client) = e.client_position() {
			dispatch(InputEvent::Down { client });
		}
	});
	let _ = use_event_listener(canvas_ref, ev::mousemove, move |e| {
		if let Some(client) = e.client_position() {
			dispatch(InputEvent::Move { client });
		}
	});
	let _ = use_event_listener(canvas_ref, ev::mouseup, move |_| dispatch(InputEvent::Up));
	let _ = use_event_listener(canvas_ref, ev::mouseleave, move |_| dispatch(InputEvent::Leave));

	// Touch handlers cancel the default action so the page does not scroll and no emulated mouse
	// events follow. Only the first finger down draws; the stroke follows that finger alone.
	let contact = StoredValue::new(PrimaryContact::default());
	let touch_options = || UseEventListenerOptions::default().passive(false);
	let _ = use_event_listener_with_options(
		canvas_ref,
		ev::touchstart,
		move |e| {
			e.prevent_default();
			let Some(touch) = e.changed_touches().get(0) else {
				return;
			};
			let mut tracked = contact.get_value();
			if !tracked.start(touch.identifier(), e.touches().length()) {
				tracing::trace!(id = touch.identifier(), "ignoring additional touch contact");
				return;
			}
			contact.set_value(tracked);
			if let Some(client) = touch.client_position() {
				dispatch(InputEvent::Down { client });
			}
		},
		touch_options(),
	);
	let _ = use_event_listener_with_options(
		canvas_ref,
		ev::touchmove,
		move |e| {
			e.prevent_default();
			let Some(id) = contact.get_value().id() else {
				return;
			};
			if let Some(client) = find_touch(&e.touches(), id).and_then(|t| t.client_position()) {
				dispatch(InputEvent::Move { client });
			}
		},
		touch_options(),
	);
	let touch_ended = move |e: web_sys::TouchEvent| {
		let mut tracked = contact.get_value();
		if tracked.end(touch_ids(&e.changed_touches())) {
			contact.set_value(tracked);
			dispatch(InputEvent::Up);
		}
	};
	let _ = use_event_listener(canvas_ref, ev::touchend, touch_ended);
	let _ = use_event_listener(canvas_ref, ev::touchcancel, touch_ended);

	let select_color = Callback::new(move |color: Color| {
		selected.set(color);
		engine.update_value(|engine| {
			if let Some(engine) = engine {
				engine.select_color(color);
			}
		});
	});

	let clear = move |_| {
		engine.update_value(|engine| {
			if let Some(engine) = engine {
				engine.clear();
			}
		});
	};

	view! {
		<div class="Whiteboard">
			<div class="WhiteboardControls">
				<ColorPalette selected=selected on_select=select_color/>
				<button class="ClearButton" on:click=clear>"Clear"</button>
			</div>
			{move || error.get().map(|error| view! { <fallback::InitializationFailed error/> })}
			<canvas
				node_ref=canvas_ref
				class="WhiteboardCanvas"
				style:border="1px solid black"
				style:touch-action="none"
				style:display=move || if error.with(Option::is_some) { "none" } else { "block" }
			>
				"Sorry, your browser does not support HTML5 canvas technology."
			</canvas>
		</div>
	}
}
