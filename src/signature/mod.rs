//! Freehand signature capture.

pub mod data_uri;
pub mod pad;
pub mod png;
pub mod raster;
pub mod script;

pub use pad::{PadState, Point, PointerEvent, SignaturePad};
pub use raster::Raster;
