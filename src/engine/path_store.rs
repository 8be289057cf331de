use super::Color;

/// Surface-local pixel coordinates.
pub type Point = glam::Vec2;

/// One continuous stroke, from pen-down to pen-up.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
	color: Color,
	line_width: f32,
	points: Vec<Point>,
}

impl Path {
	fn new(origin: Point, color: Color, line_width: f32) -> Self {
		Self {
			color,
			line_width,
			points: vec![origin],
		}
	}

	pub fn color(&self) -> Color {
		self.color
	}

	pub fn line_width(&self) -> f32 {
		self.line_width
	}

	/// Never empty: the first point is where the stroke began.
	pub fn points(&self) -> &[Point] {
		&self.points
	}
}

/// The authoritative list of strokes, in paint order, and the color for the next stroke.
///
/// While drawing, the last path is the active one and grows with `append_point`. Every
/// earlier path is final.
#[derive(Debug, Clone)]
pub struct PathStore {
	paths: Vec<Path>,
	active_color: Color,
	line_width: f32,
	is_drawing: bool,
}

impl PathStore {
	pub fn new(active_color: Color, line_width: f32) -> Self {
		Self {
			paths: Vec::new(),
			active_color,
			line_width,
			is_drawing: false,
		}
	}

	pub fn paths(&self) -> &[Path] {
		&self.paths
	}

	pub fn active_color(&self) -> Color {
		self.active_color
	}

	pub fn is_drawing(&self) -> bool {
		self.is_drawing
	}

	pub fn active_path(&self) -> Option<&Path> {
		self.paths.last().filter(|_| self.is_drawing)
	}

	/// Applies to paths begun after this call only.
	pub fn set_color(&mut self, color: Color) {
		self.active_color = color;
	}

	/// Starts a new path at `origin`. A path that was still active is finalized first.
	pub fn begin_path(&mut self, origin: Point) {
		if self.is_drawing {
			tracing::debug!(
				points = self.paths.last().map_or(0, |p| p.points.len()),
				"path was never ended; finalizing it"
			);
		}
		self
			.paths
			.push(Path::new(origin, self.active_color, self.line_width));
		self.is_drawing = true;
	}

	/// Returns `false`, without touching any path, when nothing is being drawn.
	pub fn append_point(&mut self, point: Point) -> bool {
		if !self.is_drawing {
			return false;
		}
		match self.paths.last_mut() {
			Some(path) => {
				path.points.push(point);
				true
			}
			None => false,
		}
	}

	pub fn end_path(&mut self) {
		self.is_drawing = false;
	}

	pub fn clear(&mut self) {
		self.paths.clear();
		self.is_drawing = false;
	}
}
