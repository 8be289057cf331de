mod result_ext;
pub use result_ext::*;

use crate::engine::Point;

#[derive(thiserror::Error, Debug, Clone)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

/// Viewport-absolute coordinates of an input event.
pub trait ClientPosition {
	fn client_position(&self) -> Option<Point>;
}

impl ClientPosition for web_sys::MouseEvent {
	fn client_position(&self) -> Option<Point> {
		Some(Point::new(self.client_x() as f32, self.client_y() as f32))
	}
}

impl ClientPosition for web_sys::Touch {
	fn client_position(&self) -> Option<Point> {
		Some(Point::new(self.client_x() as f32, self.client_y() as f32))
	}
}

/// The touch in `list` with the given identifier.
pub fn find_touch(list: &web_sys::TouchList, id: i32) -> Option<web_sys::Touch> {
	(0..list.length())
		.filter_map(|i| list.get(i))
		.find(|touch| touch.identifier() == id)
}

/// Identifiers of every touch in `list`.
pub fn touch_ids(list: &web_sys::TouchList) -> impl Iterator<Item = i32> + '_ {
	(0..list.length()).filter_map(|i| list.get(i)).map(|touch| touch.identifier())
}
