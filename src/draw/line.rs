//! Bresenham lines with thickness, plus single-axis specializations
//!
//! The general line steps the integer Bresenham error term and stamps a
//! `thickness x thickness` square (centred with radius `thickness / 2`)
//! at every step, clipped by the buffer. `hline` and `vline` skip the
//! stepping entirely and fill one row or column at thickness 1.
//!
//! The line colour is the outline role of the paint; a paint without an
//! outline draws nothing.

use crate::draw::paint::PaintSpec;
use crate::tile::{Bitmap, Tile};

/// Step the Bresenham error term from `(x0, y0)` to `(x1, y1)`, stamping
/// a `thickness`-sided square at each visited pixel
pub(crate) fn plot_segment(
    bmp: &mut Bitmap,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: i32,
    index: u8,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    let r = thickness / 2;

    loop {
        for yy in (y - r)..(y - r + thickness) {
            for xx in (x - r)..(x - r + thickness) {
                bmp.pset(xx, yy, index);
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Line segment between two absolute endpoints.
///
/// The tile covers the endpoint span padded by `stroke - 1` on each axis
/// and is placed at the span's top-left corner. The paint's stroke is
/// the line thickness.
pub fn line(x0: i32, y0: i32, x1: i32, y1: i32, paint: &PaintSpec) -> Tile {
    let minx = x0.min(x1);
    let miny = y0.min(y1);
    let maxx = x0.max(x1);
    let maxy = y0.max(y1);
    let thickness = paint.stroke_px();
    let w = (maxx - minx + 1 + (thickness - 1)).max(1);
    let h = (maxy - miny + 1 + (thickness - 1)).max(1);

    let (palette, indices) = paint.build_palette();
    let mut bmp = Bitmap::new(w, h);

    if let Some(outline) = indices.outline {
        plot_segment(
            &mut bmp,
            x0 - minx,
            y0 - miny,
            x1 - minx,
            y1 - miny,
            thickness,
            outline,
        );
    }

    Tile::new(bmp, palette, minx, miny)
}

/// Horizontal line of `length` pixels at thickness 1
pub fn hline(x: i32, y: i32, length: i32, paint: &PaintSpec) -> Tile {
    let len = length.max(1);
    let (palette, indices) = paint.build_palette();
    let mut bmp = Bitmap::new(len, 1);
    if let Some(outline) = indices.outline {
        for xx in 0..len {
            bmp.pset(xx, 0, outline);
        }
    }
    Tile::new(bmp, palette, x, y)
}

/// Vertical line of `length` pixels at thickness 1
pub fn vline(x: i32, y: i32, length: i32, paint: &PaintSpec) -> Tile {
    let len = length.max(1);
    let (palette, indices) = paint.build_palette();
    let mut bmp = Bitmap::new(1, len);
    if let Some(outline) = indices.outline {
        for yy in 0..len {
            bmp.pset(0, yy, outline);
        }
    }
    Tile::new(bmp, palette, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RED;

    #[test]
    fn horizontal_line_fills_one_row() {
        let t = line(0, 0, 5, 0, &PaintSpec::outline(RED));
        assert_eq!(t.bitmap.dimensions(), (6, 1));
        assert!(t.bitmap.pixels().iter().all(|&p| p == 1));
        assert_eq!((t.x, t.y), (0, 0));
    }

    #[test]
    fn diagonal_line_visits_every_column_and_row() {
        let t = line(0, 0, 7, 7, &PaintSpec::outline(RED));
        assert_eq!(t.bitmap.dimensions(), (8, 8));
        for i in 0..8 {
            assert_eq!(t.bitmap.get(i, i), Some(1));
        }
    }

    #[test]
    fn endpoint_order_is_normalized() {
        let a = line(5, 3, 0, 0, &PaintSpec::outline(RED));
        let b = line(0, 0, 5, 3, &PaintSpec::outline(RED));
        assert_eq!((a.x, a.y), (0, 0));
        assert_eq!(a.bitmap.dimensions(), b.bitmap.dimensions());
        assert_eq!(a.bitmap.pixels(), b.bitmap.pixels());
    }

    #[test]
    fn thickness_pads_the_bounding_box() {
        let t = line(0, 0, 5, 0, &PaintSpec::outline(RED).with_stroke(3));
        assert_eq!(t.bitmap.dimensions(), (8, 3));
        // The stamp reaches from one pixel above the stepped row to one
        // below; the top overhang clips, so the last padded row stays
        // background
        assert_eq!(t.bitmap.get(2, 0), Some(1));
        assert_eq!(t.bitmap.get(2, 1), Some(1));
        assert_eq!(t.bitmap.get(2, 2), Some(0));
    }

    #[test]
    fn degenerate_line_is_a_single_stamp() {
        let t = line(4, 4, 4, 4, &PaintSpec::outline(RED));
        assert_eq!(t.bitmap.dimensions(), (1, 1));
        assert_eq!(t.bitmap.get(0, 0), Some(1));
    }

    #[test]
    fn hline_and_vline_shapes() {
        let h = hline(2, 9, 6, &PaintSpec::outline(RED));
        assert_eq!(h.bitmap.dimensions(), (6, 1));
        assert!(h.bitmap.pixels().iter().all(|&p| p == 1));
        assert_eq!((h.x, h.y), (2, 9));

        let v = vline(7, 1, 4, &PaintSpec::outline(RED));
        assert_eq!(v.bitmap.dimensions(), (1, 4));
        assert!(v.bitmap.pixels().iter().all(|&p| p == 1));
        assert_eq!((v.x, v.y), (7, 1));
    }

    #[test]
    fn zero_length_hline_still_allocates_a_pixel() {
        let t = hline(0, 0, 0, &PaintSpec::outline(RED));
        assert_eq!(t.bitmap.dimensions(), (1, 1));
        assert_eq!(t.bitmap.get(0, 0), Some(1));
    }
}
