use super::Point;

/// Raw input, in viewport-absolute (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
	/// `mousedown`, or `touchstart` for the first contact.
	Down { client: Point },
	/// `mousemove` or `touchmove`.
	Move { client: Point },
	/// `mouseup` or `touchend`.
	Up,
	/// `mouseleave`.
	Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
	Idle,
	Drawing,
}

impl Gesture {
	pub fn from_drawing(is_drawing: bool) -> Self {
		if is_drawing {
			Self::Drawing
		} else {
			Self::Idle
		}
	}
}

/// What a single event does to the drawing state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
	Begin(Point),
	Append(Point),
	End,
	Ignore,
}

/// Follows the first touch contact of a gesture so that other fingers can neither start, move,
/// nor end its stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimaryContact(Option<i32>);

impl PrimaryContact {
	pub fn id(&self) -> Option<i32> {
		self.0
	}

	/// `touching` counts every contact on the surface, `id` included. Returns whether `id` became
	/// the primary contact.
	pub fn start(&mut self, id: i32, touching: u32) -> bool {
		if self.0.is_some() || touching > 1 {
			return false;
		}
		self.0 = Some(id);
		true
	}

	/// Returns whether the primary contact is among `ended`, releasing it if so.
	pub fn end(&mut self, ended: impl IntoIterator<Item = i32>) -> bool {
		let Some(id) = self.0 else {
			return false;
		};
		let released = ended.into_iter().any(|e| e == id);
		if released {
			self.0 = None;
		}
		released
	}
}

/// Converts a client-space position to surface-local coordinates.
pub fn to_local(client: Point, origin: Point) -> Point {
	client - origin
}

/// The gesture state machine. `origin` is the surface's current client-space origin.
pub fn transition(gesture: Gesture, event: InputEvent, origin: Point) -> Transition {
	use InputEvent::*;
	match (gesture, event) {
		// Starting over while drawing finalizes the previous path.
		(_, Down { client }) => Transition::Begin(to_local(client, origin)),
		(Gesture::Drawing, Move { client }) => Transition::Append(to_local(client, origin)),
		(Gesture::Drawing, Up | Leave) => Transition::End,
		(Gesture::Idle, Move { .. } | Up | Leave) => Transition::Ignore,
	}
}
