//! Shape rasterization into palette-indexed tiles
//!
//! Each function allocates a bounding-box [`Tile`](crate::tile::Tile),
//! paints it according to a [`PaintSpec`], and returns it for the scene
//! compositor to place. Nothing here touches a display or holds state
//! between calls.
//!
//! - `paint` - `PaintSpec` and the palette builder
//! - `rect` - axis-aligned rectangles, plain and rounded
//! - `circle` - midpoint circles with stroke rings
//! - `ellipse` - tolerance-band ellipses
//! - `triangle` - scanline-filled triangles with Bresenham edges
//! - `line` - Bresenham lines with thickness, plus `hline`/`vline`
//!
//! No anti-aliasing anywhere: every pixel is either a palette index or
//! background.

pub mod circle;
pub mod ellipse;
pub mod line;
pub mod paint;
pub mod rect;
pub mod triangle;

pub use circle::circle;
pub use ellipse::ellipse;
pub use line::{hline, line, vline};
pub use paint::{PaintIndices, PaintSpec};
pub use rect::{rect, rounded_rect};
pub use triangle::triangle;
