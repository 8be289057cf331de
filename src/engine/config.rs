use super::Color;

#[derive(Debug, Clone, PartialEq, bon::Builder)]
pub struct WhiteboardConfig {
	#[builder(default = 5.0)]
	pub line_width: f32,
	#[builder(default = Color::WHITE)]
	pub background: Color,
	/// Color of strokes until another swatch is selected.
	#[builder(default = Color::BLACK)]
	pub initial_color: Color,
}

impl Default for WhiteboardConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = WhiteboardConfig::default();
		assert_eq!(config.line_width, 5.0);
		assert_eq!(config.background, Color::WHITE);
		assert_eq!(config.initial_color, Color::BLACK);
	}

	#[test]
	fn builder_overrides() {
		let config = WhiteboardConfig::builder()
			.initial_color(Color::ORANGE)
			.line_width(2.0)
			.build();
		assert_eq!(config.initial_color, Color::ORANGE);
		assert_eq!(config.line_width, 2.0);
		assert_eq!(config.background, Color::WHITE);
	}
}
