use crate::engine::{Color, Point, Surface};
use crate::util::{JsError, ResultExt};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Clone, Debug, thiserror::Error)]
pub enum WhiteboardError {
	#[error("2d rendering context unavailable")]
	ContextUnavailable,

	#[error("no window")]
	NoWindow,

	#[error(transparent)]
	Js(#[from] JsError),
}

static_assertions::assert_impl_all!(WhiteboardError: std::error::Error, Send, Sync);

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	context: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Sizes `canvas` to the viewport, or leaves its size alone if the viewport can't be measured.
	/// Later viewport resizes are not followed.
	#[tracing::instrument(err, skip(canvas))]
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, WhiteboardError> {
		use WhiteboardError::*;
		let context = canvas
			.get_context("2d")
			.map_err(JsError::from)?
			.ok_or(ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| ContextUnavailable)?;

		let (width, height) = viewport_size()
			.ok_or_log()
			.unwrap_or((canvas.width(), canvas.height()));
		canvas.set_width(width);
		canvas.set_height(height);
		tracing::info!(width, height, "drawing surface created");

		Ok(Self { canvas, context })
	}
}

fn viewport_size() -> Result<(u32, u32), WhiteboardError> {
	let window = web_sys::window().ok_or(WhiteboardError::NoWindow)?;
	let width = window.inner_width().map_err(JsError::from)?;
	let height = window.inner_height().map_err(JsError::from)?;
	Ok((
		width.as_f64().unwrap_or_default() as u32,
		height.as_f64().unwrap_or_default() as u32,
	))
}

impl Surface for CanvasSurface {
	fn size(&self) -> glam::UVec2 {
		glam::UVec2::new(self.canvas.width(), self.canvas.height())
	}

	fn client_origin(&self) -> Point {
		let rect = self.canvas.get_bounding_client_rect();
		Point::new(rect.left() as f32, rect.top() as f32)
	}

	fn fill_rect(&mut self, min: Point, max: Point, color: Color) {
		let size = max - min;
		self.context.set_fill_style_str(&color.to_string());
		self.context
			.fill_rect(min.x.into(), min.y.into(), size.x.into(), size.y.into());
	}

	fn stroke_polyline(&mut self, points: &[Point], color: Color, line_width: f32) {
		let Some((first, rest)) = points.split_first() else {
			return;
		};
		let context = &self.context;
		context.set_stroke_style_str(&color.to_string());
		context.set_line_width(line_width.into());
		context.begin_path();
		context.move_to(first.x.into(), first.y.into());
		for point in rest {
			context.line_to(point.x.into(), point.y.into());
		}
		context.stroke();
	}
}
