//! Everything that does not touch the DOM: the stroke store, the gesture state machine, and
//! repainting onto an abstract `Surface`.

mod color;
pub use color::*;

mod config;
pub use config::*;

mod path_store;
pub use path_store::*;

mod input;
pub use input::*;

mod surface;
pub use surface::*;

mod whiteboard;
pub use whiteboard::*;

pub mod raster;
pub use raster::Raster;
