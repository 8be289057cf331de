use super::{Color, Point};

/// The 2D raster the engine paints onto, and the element that receives input for it.
pub trait Surface {
	/// Width and height in pixels.
	fn size(&self) -> glam::UVec2;

	/// Viewport-absolute position of the surface's top-left corner. Implementations must read
	/// this fresh on every call, since layout may change between input events.
	fn client_origin(&self) -> Point;

	/// Paints an axis-aligned rectangle, replacing whatever was there.
	fn fill_rect(&mut self, min: Point, max: Point, color: Color);

	/// Strokes straight segments between consecutive points.
	fn stroke_polyline(&mut self, points: &[Point], color: Color, line_width: f32);
}
