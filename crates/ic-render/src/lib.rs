/// Rasterisation des identicons sur un canvas RGBA.
pub mod rasterizer;

pub use rasterizer::{GRID_CELLS, canvas_side, rasterize, render_image, validate_cell_size};
