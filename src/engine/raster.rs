use super::{Color, Point, Surface};
use glam::{vec2, IVec2, UVec2, Vec2};
use itertools::Itertools;
use std::ops::{Range, RangeInclusive};

fn floor_as_i32(x: f32) -> i32 {
	x.floor() as i32
}

fn max_line_along_x(p0: Vec2, p1: Vec2) -> impl Iterator<Item = i32> {
	let d = p1 - p0;
	debug_assert!(d.x >= 0f32);
	let slope = d.y / d.x;
	let intercept = p0.y - slope * p0.x;
	let xi0 = floor_as_i32(p0.x);
	let xi1 = floor_as_i32(p1.x);

	let (start, end) = if d.y >= 0f32 {
		(None, Some(floor_as_i32(p1.y)))
	} else {
		(Some(floor_as_i32(p0.y)), None)
	};
	start
		.into_iter()
		.chain((xi0 + 1..=xi1).map(move |xi| floor_as_i32(intercept + slope * xi as f32)))
		.chain(end)
}

fn min_line_along_x(p0: Vec2, p1: Vec2) -> impl Iterator<Item = i32> {
	max_line_along_x(vec2(p0.x, -p0.y), vec2(p1.x, -p1.y)).map(|yi| -(yi + 1))
}

/// A column of pixels, `(x, y_min..=y_max)`.
type Span = (i32, RangeInclusive<i32>);

/// Spans of the wedge at `a`, restricted to `columns`.
fn conservative_wedge(a: Vec2, b: Vec2, c: Vec2, columns: Range<i32>) -> impl Iterator<Item = Span> {
	debug_assert!(b.x >= a.x);
	debug_assert!(c.x >= b.x);
	let Range { start, end } = columns;
	(floor_as_i32(a.x)..)
		.zip(min_line_along_x(a, c))
		.zip(max_line_along_x(a, b))
		.skip_while(move |((x, _), _)| *x < start)
		.take_while(move |((x, _), _)| *x < end)
		.map(|((x, y_min), y_max)| (x, y_min..=y_max))
}

fn conservative_clockwise_triangle(a: Vec2, b: Vec2, c: Vec2, width: i32) -> impl Iterator<Item = Span> {
	conservative_wedge(a, b, c, 0..width).chain(
		conservative_wedge(vec2(-c.x, c.y), vec2(-b.x, b.y), vec2(-a.x, a.y), -width..0)
			.map(|(x, ys)| (-(x + 1), ys)),
	)
}

/// Every pixel within `size` that the triangle touches, each exactly once, column by column.
fn conservative_triangle(a: Vec2, b: Vec2, c: Vec2, size: IVec2) -> impl Iterator<Item = (i32, i32)> {
	let mut points = [a, b, c];
	points.sort_by(|a, b| a.x.total_cmp(&b.x));
	let [a, b, c] = points;
	let det = (c - a).perp_dot(b - a);
	let spans: Vec<Span> = if det >= 0f32 {
		conservative_clockwise_triangle(a, b, c, size.x).collect()
	} else {
		conservative_clockwise_triangle(vec2(a.x, -a.y), vec2(b.x, -b.y), vec2(c.x, -c.y), size.x)
			.map(|(x, ys)| (x, -(ys.end() + 1)..=-(ys.start() + 1)))
			.collect()
	};
	spans
		.into_iter()
		.flat_map(move |(x, ys)| {
			let ys = (*ys.start()).max(0)..=(*ys.end()).min(size.y - 1);
			ys.map(move |y| (x, y))
		})
		.sorted()
		.dedup()
}

/// An in-memory RGB surface.
///
/// Segments are drawn as quads of `line_width` with butt ends and no joins, and coverage is
/// conservative: any pixel the quad touches is painted fully. A lone point or a zero-length
/// segment paints nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
	size: UVec2,
	client_origin: Point,
	pixels: Vec<Color>,
}

impl Raster {
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			size: UVec2::new(width, height),
			client_origin: Point::ZERO,
			pixels: vec![Color::BLACK; width as usize * height as usize],
		}
	}

	/// Places the raster at `origin` in client space, as if laid out on a page.
	pub fn with_client_origin(self, origin: Point) -> Self {
		Self {
			client_origin: origin,
			..self
		}
	}

	pub fn set_client_origin(&mut self, origin: Point) {
		self.client_origin = origin;
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
		self.index(x as i32, y as i32).map(|i| self.pixels[i])
	}

	/// Row-major.
	pub fn pixels(&self) -> &[Color] {
		&self.pixels
	}

	pub fn count(&self, color: Color) -> usize {
		self.pixels.iter().filter(|&&p| p == color).count()
	}

	fn index(&self, x: i32, y: i32) -> Option<usize> {
		let in_bounds = x >= 0 && y >= 0 && (x as u32) < self.size.x && (y as u32) < self.size.y;
		in_bounds.then(|| y as usize * self.size.x as usize + x as usize)
	}

	fn plot(&mut self, (x, y): (i32, i32), color: Color) {
		if let Some(i) = self.index(x, y) {
			self.pixels[i] = color;
		}
	}

	fn fill_segment(&mut self, p0: Point, p1: Point, color: Color, line_width: f32) {
		let Some(direction) = (p1 - p0).try_normalize() else {
			return;
		};
		let offset = direction.perp() * (line_width / 2.0);
		let size = self.size.as_ivec2();
		let corners = [p0 + offset, p1 + offset, p1 - offset, p0 - offset];
		for (a, b, c) in [
			(corners[0], corners[1], corners[2]),
			(corners[0], corners[2], corners[3]),
		] {
			for pixel in conservative_triangle(a, b, c, size) {
				self.plot(pixel, color);
			}
		}
	}
}

impl Surface for Raster {
	fn size(&self) -> UVec2 {
		self.size
	}

	fn client_origin(&self) -> Point {
		self.client_origin
	}

	fn fill_rect(&mut self, min: Point, max: Point, color: Color) {
		// Pixels whose centers fall inside the rectangle.
		let clamp = |v: f32, limit: u32| (v.round().max(0.0) as u32).min(limit) as usize;
		let (x0, x1) = (clamp(min.x, self.size.x), clamp(max.x, self.size.x));
		let (y0, y1) = (clamp(min.y, self.size.y), clamp(max.y, self.size.y));
		let width = self.size.x as usize;
		for y in y0..y1 {
			self.pixels[y * width + x0..y * width + x1.max(x0)].fill(color);
		}
	}

	fn stroke_polyline(&mut self, points: &[Point], color: Color, line_width: f32) {
		if line_width <= 0.0 {
			return;
		}
		for (&p0, &p1) in points.iter().tuple_windows() {
			self.fill_segment(p0, p1, color, line_width);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn max_line_follows_upper_edge() {
		assert_eq!(
			max_line_along_x(vec2(1.8, 2.1), vec2(6.8, 5.2)).collect_vec(),
			vec![2, 2, 3, 4, 4, 5],
		);
		assert_eq!(
			max_line_along_x(vec2(1.8, 5.2), vec2(6.8, 2.1)).collect_vec(),
			vec![5, 5, 4, 3, 3, 2],
		);
	}

	#[test]
	fn min_line_follows_lower_edge() {
		assert_eq!(
			min_line_along_x(vec2(1.8, 2.1), vec2(6.8, 5.2)).collect_vec(),
			vec![2, 2, 2, 3, 4, 4],
		);
		assert_eq!(
			min_line_along_x(vec2(1.6, 2.9), vec2(6.6, 2.9)).collect_vec(),
			vec![2, 2, 2, 2, 2, 2],
		);
	}

	#[test]
	fn triangle_covers_its_interior() {
		let bounds = IVec2::new(100, 100);
		let pixels = conservative_triangle(vec2(0.0, 0.0), vec2(8.0, 0.0), vec2(0.0, 8.0), bounds).collect_vec();
		assert!(pixels.contains(&(0, 0)));
		assert!(pixels.contains(&(1, 1)));
		assert!(pixels.contains(&(2, 4)));
		assert!(!pixels.contains(&(7, 7)));
		assert!(pixels.iter().all(|&(x, y)| (0..=8).contains(&x) && (0..=8).contains(&y)));
		assert!(pixels.iter().tuple_windows().all(|(a, b)| a < b));
	}

	#[test]
	fn triangle_coverage_is_clipped_to_bounds() {
		let pixels = conservative_triangle(vec2(-3.0, -3.0), vec2(9.0, -3.0), vec2(-3.0, 9.0), IVec2::new(4, 3))
			.collect_vec();
		assert!(pixels.contains(&(0, 0)));
		assert!(pixels.contains(&(3, 2)));
		assert!(pixels.iter().all(|&(x, y)| (0..4).contains(&x) && (0..3).contains(&y)));
		assert_eq!(pixels.len(), 12);
	}

	#[test]
	fn far_off_coverage_stays_within_bounds() {
		let bounds = IVec2::new(10, 10);
		let pixels = conservative_triangle(vec2(-1e6, 4.0), vec2(1e6, 4.0), vec2(1e6, 6.0), bounds).collect_vec();
		assert!(pixels.len() <= 100);
		assert!(pixels.contains(&(0, 4)));
		assert!(pixels.contains(&(9, 4)));
		assert!(pixels.iter().all(|&(x, y)| (0..10).contains(&x) && (0..10).contains(&y)));

		// Opposite winding.
		let pixels = conservative_triangle(vec2(-1e6, 4.0), vec2(1e6, 6.0), vec2(1e6, 4.0), bounds).collect_vec();
		assert!(pixels.len() <= 100);
		assert!(pixels.contains(&(5, 4)));
	}

	#[test]
	fn fill_rect_clips_to_bounds() {
		let mut raster = Raster::new(4, 3);
		raster.fill_rect(vec2(-5.0, 1.0), vec2(2.0, 10.0), Color::RED);
		assert_eq!(raster.count(Color::RED), 4);
		assert_eq!(raster.pixel(1, 2), Some(Color::RED));
		assert_eq!(raster.pixel(2, 2), Some(Color::BLACK));
		assert_eq!(raster.pixel(0, 0), Some(Color::BLACK));
		assert_eq!(raster.pixel(4, 0), None);
	}

	#[test]
	fn horizontal_stroke_has_width() {
		let mut raster = Raster::new(40, 40);
		raster.stroke_polyline(&[vec2(10.0, 20.0), vec2(30.0, 20.0)], Color::BLUE, 5.0);
		for x in 11..29 {
			for y in 18..=21 {
				assert_eq!(raster.pixel(x, y), Some(Color::BLUE), "({x}, {y})");
			}
			assert_eq!(raster.pixel(x, 10), Some(Color::BLACK));
			assert_eq!(raster.pixel(x, 30), Some(Color::BLACK));
		}
		assert_eq!(raster.pixel(5, 20), Some(Color::BLACK));
		assert_eq!(raster.pixel(35, 20), Some(Color::BLACK));
	}

	#[test]
	fn diagonal_stroke_passes_through_its_points() {
		let mut raster = Raster::new(50, 50);
		let points = [vec2(5.0, 5.0), vec2(25.0, 25.0), vec2(45.0, 5.0)];
		raster.stroke_polyline(&points, Color::GREEN, 5.0);
		for (x, y) in [(10, 10), (20, 20), (30, 20), (40, 10)] {
			assert_eq!(raster.pixel(x, y), Some(Color::GREEN), "({x}, {y})");
		}
		assert_eq!(raster.pixel(25, 45), Some(Color::BLACK));
		assert_eq!(raster.pixel(25, 5), Some(Color::BLACK));
	}

	#[test]
	fn degenerate_strokes_paint_nothing() {
		let mut raster = Raster::new(10, 10);
		raster.stroke_polyline(&[vec2(5.0, 5.0)], Color::RED, 5.0);
		raster.stroke_polyline(&[vec2(5.0, 5.0), vec2(5.0, 5.0)], Color::RED, 5.0);
		raster.stroke_polyline(&[vec2(1.0, 1.0), vec2(8.0, 8.0)], Color::RED, 0.0);
		raster.stroke_polyline(&[], Color::RED, 5.0);
		assert_eq!(raster.count(Color::RED), 0);
	}

	#[test]
	fn strokes_clip_at_the_edges() {
		let mut raster = Raster::new(10, 10);
		raster.stroke_polyline(&[vec2(-20.0, 5.0), vec2(30.0, 5.0)], Color::RED, 3.0);
		assert!(raster.count(Color::RED) >= 30);
		assert_eq!(raster.pixel(0, 5), Some(Color::RED));
		assert_eq!(raster.pixel(9, 5), Some(Color::RED));
	}

	#[test]
	fn huge_strokes_paint_only_visible_pixels() {
		let mut raster = Raster::new(10, 10);
		raster.stroke_polyline(&[vec2(-1e6, 5.0), vec2(1e6, 5.0)], Color::RED, 3.0);
		for x in 0..10 {
			assert_eq!(raster.pixel(x, 5), Some(Color::RED), "({x}, 5)");
		}
		assert_eq!(raster.pixel(5, 0), Some(Color::BLACK));
		assert_eq!(raster.pixel(5, 9), Some(Color::BLACK));
	}
}
