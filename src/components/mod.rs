mod canvas_surface;
pub use canvas_surface::*;

pub mod fallback;

mod color_palette;
pub use color_palette::*;

mod nav_bar;
pub use nav_bar::*;

mod whiteboard;
pub use whiteboard::*;
