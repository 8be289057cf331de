use super::*;

/// Binds input to a `PathStore` and keeps a `Surface` in sync with it.
///
/// Every mutation is followed by a full repaint: background first, then every path in
/// append order so later strokes land on top.
pub struct Whiteboard<S> {
	store: PathStore,
	surface: S,
	background: Color,
}

impl<S: Surface> Whiteboard<S> {
	/// Takes ownership of `surface` and paints the empty board onto it.
	pub fn new(surface: S, config: &WhiteboardConfig) -> Self {
		let mut whiteboard = Self {
			store: PathStore::new(config.initial_color, config.line_width),
			surface,
			background: config.background,
		};
		whiteboard.repaint();
		whiteboard
	}

	pub fn store(&self) -> &PathStore {
		&self.store
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	pub fn gesture(&self) -> Gesture {
		Gesture::from_drawing(self.store.is_drawing())
	}

	/// Applies one input event. Returns whether the surface was repainted.
	pub fn handle(&mut self, event: InputEvent) -> bool {
		let transition = transition(self.gesture(), event, self.surface.client_origin());
		tracing::trace!(?event, ?transition);
		match transition {
			Transition::Begin(origin) => {
				tracing::debug!(%origin, color = %self.store.active_color(), "stroke started");
				self.store.begin_path(origin);
			}
			Transition::Append(point) => {
				self.store.append_point(point);
			}
			Transition::End => {
				self.store.end_path();
				tracing::debug!(paths = self.store.paths().len(), "stroke ended");
			}
			Transition::Ignore => return false,
		}
		self.repaint();
		true
	}

	/// Sets the color for strokes started from now on.
	pub fn select_color(&mut self, color: Color) {
		tracing::debug!(%color, "color selected");
		self.store.set_color(color);
	}

	/// Removes every stroke and repaints the blank background.
	pub fn clear(&mut self) {
		tracing::debug!(paths = self.store.paths().len(), "clearing");
		self.store.clear();
		self.repaint();
	}

	#[tracing::instrument(level = "trace", skip(self), fields(paths = self.store.paths().len()))]
	pub fn repaint(&mut self) {
		let size = self.surface.size().as_vec2();
		self.surface.fill_rect(Point::ZERO, size, self.background);
		for path in self.store.paths() {
			self
				.surface
				.stroke_polyline(path.points(), path.color(), path.line_width());
		}
	}
}
