//! # pixtile
//!
//! Palette-indexed shape rasterizer and SD status screens for small SPI
//! displays.
//!
//! ## Overview
//!
//! Every drawing call is a pure function: it allocates a bitmap of
//! palette indices sized to the shape's bounding box, paints it, and
//! returns it as a [`Tile`] together with a bounded palette and the
//! placement offset. A [`Frame`] composites finished tiles through
//! their palettes, treating palette index 0 as transparent background
//! unless told otherwise.
//!
//! - **Shapes** - rectangles (plain and rounded), circles, ellipses,
//!   triangles and lines, with optional fill, optional outline and a
//!   stroke width per [`PaintSpec`]
//! - **Text** - built-in 5x7 font labels rendered as tiles
//! - **Compositing** - RGB frame with raw byte access and a BLAKE3
//!   content hash for redundant-flush suppression
//! - **Storage** (`std`) - SD card manager over a directory root with
//!   CRUD, statistics and incremental file naming
//! - **Status** (`std`) - the 240x135 SD info screen composition
//!
//! The drawing core is deliberate about its approximations: no
//! anti-aliasing, tolerance-band ellipse outlines, quarter-disk corner
//! tests. Pixel output is part of the contract.
//!
//! ## Example
//!
//! ```
//! use pixtile::color::{GREEN, RED};
//! use pixtile::{rect, Frame, PaintSpec};
//!
//! let tile = rect(10, 10, 40, 20, &PaintSpec::fill_outline(GREEN, RED).with_stroke(2));
//! let mut frame = Frame::new(240, 135);
//! frame.blit(&tile);
//!
//! assert_eq!(frame.get(11, 11), Some(RED));
//! assert_eq!(frame.get(30, 20), Some(GREEN));
//! ```
//!
//! ## License
//!
//! Dual-licensed under MIT or Apache-2.0, at your option.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod color;
pub mod draw;
pub mod scene;
pub mod text;
pub mod tile;

#[cfg(feature = "std")]
pub mod sdcard;
#[cfg(feature = "std")]
pub mod status;

pub use color::Rgb;
pub use draw::{
    circle, ellipse, hline, line, rect, rounded_rect, triangle, vline, PaintIndices, PaintSpec,
};
pub use scene::Frame;
pub use tile::{Bitmap, Palette, Tile, MAX_COLORS};

/// pixtile version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION, "0.1.0");
    }
}
