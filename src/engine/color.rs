use std::str::FromStr;
use thiserror::Error;

/// An opaque 8-bit RGB color. Displays as `#RRGGBB`, the form the 2D canvas accepts as a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{r:02X}{g:02X}{b:02X}")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
	pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
	pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
	pub const GREEN: Self = Self::rgb(0x00, 0xFF, 0x00);
	pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xFF);
	pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x00);
	pub const MAGENTA: Self = Self::rgb(0xFF, 0x00, 0xFF);
	pub const CYAN: Self = Self::rgb(0x00, 0xFF, 0xFF);
	pub const ORANGE: Self = Self::rgb(0xFF, 0xA5, 0x00);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}
}

#[derive(Debug, Error)]
#[error("invalid color {input:?}")]
pub struct ParseColorError {
	input: String,
	#[source]
	source: csscolorparser::ParseColorError,
}

impl FromStr for Color {
	type Err = ParseColorError;

	/// Accepts any CSS color; the alpha channel is discarded.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let [r, g, b, _] = csscolorparser::parse(s)
			.map_err(|source| ParseColorError {
				input: s.to_owned(),
				source,
			})?
			.to_rgba8();
		Ok(Self::rgb(r, g, b))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
	pub name: &'static str,
	pub color: Color,
}

/// The fixed set of colors offered for drawing, in display order.
pub const PALETTE: [Swatch; 9] = [
	Swatch { name: "Red", color: Color::RED },
	Swatch { name: "Green", color: Color::GREEN },
	Swatch { name: "Blue", color: Color::BLUE },
	Swatch { name: "Yellow", color: Color::YELLOW },
	Swatch { name: "Magenta", color: Color::MAGENTA },
	Swatch { name: "Cyan", color: Color::CYAN },
	Swatch { name: "Black", color: Color::BLACK },
	Swatch { name: "White", color: Color::WHITE },
	Swatch { name: "Orange", color: Color::ORANGE },
];
