pub mod raster;
pub use raster::Canvas;

mod surface;
pub use surface::*;

pub mod stroke;

pub mod splatter;

mod renderer;
pub use renderer::*;

mod painting;
pub use painting::*;
