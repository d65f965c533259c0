//! Frame compositing for finished tiles
//!
//! The `Frame` is the destination side of the drawing contract: paint
//! each tile's indexed buffer through its palette at the tile's offset,
//! skipping palette index 0 when the palette is transparent. Pixels are
//! packed `0x00RRGGBB` row-major, and the raw byte view plus a content
//! hash exist so a display driver can push the buffer and skip pushes
//! whose content has not changed.

use crate::color::{Rgb, BLACK};
use crate::tile::Tile;
use alloc::vec;
use alloc::vec::Vec;

/// RGB framebuffer that tiles composite into
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Frame {
    /// Frame cleared to black
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_background(width, height, BLACK)
    }

    /// Frame cleared to a background colour
    pub fn with_background(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color.0; width * height],
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` pair
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Reset every pixel to `color`
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.0);
    }

    /// Write one pixel; out-of-range writes are dropped
    pub fn pset(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color.0;
        }
    }

    /// Read one pixel, `None` outside the frame
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            Some(Rgb(self.pixels[y as usize * self.width + x as usize]))
        } else {
            None
        }
    }

    /// Composite a tile at its placement offset.
    ///
    /// Index 0 is skipped when the tile's palette is transparent and
    /// painted as a solid colour otherwise; writes outside the frame
    /// clip silently.
    pub fn blit(&mut self, tile: &Tile) {
        let (w, h) = tile.bitmap.dimensions();
        for yy in 0..h as i32 {
            for xx in 0..w as i32 {
                let index = match tile.bitmap.get(xx, yy) {
                    Some(index) => index,
                    None => continue,
                };
                if index == 0 && tile.palette.is_transparent_bg() {
                    continue;
                }
                if let Some(color) = tile.palette.get(index) {
                    self.pset(tile.x + xx, tile.y + yy, color);
                }
            }
        }
    }

    /// Packed pixels, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Native-endian byte view of the pixel buffer, the layout a display
    /// driver's DMA push expects
    pub fn as_raw_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// BLAKE3 digest of the pixel buffer.
    ///
    /// Two frames hash equal exactly when every pixel matches, so a
    /// driver can compare against the last pushed hash and skip the
    /// flush when nothing changed.
    pub fn content_hash(&self) -> [u8; 32] {
        *blake3::hash(self.as_raw_bytes()).as_bytes()
    }

    /// Dump the frame as a binary PPM image
    #[cfg(feature = "std")]
    pub fn write_ppm<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        use std::io::Write;

        let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        for &pixel in &self.pixels {
            let c = Rgb(pixel);
            out.write_all(&[c.r(), c.g(), c.b()])?;
        }
        Ok(())
    }
}
