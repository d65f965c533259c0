//! Axis-aligned rectangles, plain and rounded
//!
//! The plain path fills the whole buffer and then paints a stroke-thick
//! border ring over it, clamping the bottom/right bands at the buffer
//! edge. The rounded path fills a central band plus top/bottom caps,
//! completes the corners with quarter-disk membership tests that only
//! touch background, and borders the result with straight stroke bands
//! and midpoint corner rings.

use crate::draw::circle::ring;
use crate::draw::paint::PaintSpec;
use crate::tile::{Bitmap, Tile};

/// Rectangle of `w x h` pixels placed at `(x, y)`.
///
/// Degenerate sizes clamp the buffer to 1x1 but paint nothing.
pub fn rect(x: i32, y: i32, w: i32, h: i32, paint: &PaintSpec) -> Tile {
    let (palette, indices) = paint.build_palette();
    let mut bmp = Bitmap::new(w, h);

    if let Some(fill) = indices.fill {
        for yy in 0..h {
            for xx in 0..w {
                bmp.pset(xx, yy, fill);
            }
        }
    }

    if let Some(outline) = indices.outline {
        let s = paint.stroke_px();
        // top
        for yy in 0..s.min(h) {
            for xx in 0..w {
                bmp.pset(xx, yy, outline);
            }
        }
        // bottom, clamped when the stroke exceeds the height
        for yy in (h - s)..h {
            if yy < 0 {
                continue;
            }
            for xx in 0..w {
                bmp.pset(xx, yy, outline);
            }
        }
        // left
        for xx in 0..s.min(w) {
            for yy in 0..h {
                bmp.pset(xx, yy, outline);
            }
        }
        // right, clamped when the stroke exceeds the width
        for xx in (w - s)..w {
            if xx < 0 {
                continue;
            }
            for yy in 0..h {
                bmp.pset(xx, yy, outline);
            }
        }
    }

    Tile::new(bmp, palette, x, y)
}

/// Quarter-disk corner fill: circle membership around `(cx, cy)`,
/// touching only background so caps and borders stay intact
fn paint_corner(bmp: &mut Bitmap, cx: i32, cy: i32, rr: i32, fill: u8) {
    for yy in -rr..=rr {
        for xx in -rr..=rr {
            if xx * xx + yy * yy <= rr * rr {
                bmp.pset_if_bg(cx + xx, cy + yy, fill);
            }
        }
    }
}

/// Rectangle with quarter-disk corners of radius `r`.
///
/// `r < 1` falls back to the plain [`rect`] path. An `r` at or past half
/// the smaller dimension is not rejected; overlapping corner fills stay
/// consistent because they only ever paint background.
pub fn rounded_rect(x: i32, y: i32, w: i32, h: i32, r: i32, paint: &PaintSpec) -> Tile {
    if r < 1 {
        return rect(x, y, w, h, paint);
    }

    let (palette, indices) = paint.build_palette();
    let mut bmp = Bitmap::new(w, h);

    if let Some(fill) = indices.fill {
        // central band, full width
        for yy in r..(h - r) {
            for xx in 0..w {
                bmp.pset(xx, yy, fill);
            }
        }
        // straight caps above and below the band
        for yy in 0..r {
            for xx in r..(w - r) {
                bmp.pset(xx, yy, fill);
            }
        }
        for yy in (h - r)..h {
            for xx in r..(w - r) {
                bmp.pset(xx, yy, fill);
            }
        }
        paint_corner(&mut bmp, r, r, r, fill);
        paint_corner(&mut bmp, w - r - 1, r, r, fill);
        paint_corner(&mut bmp, r, h - r - 1, r, fill);
        paint_corner(&mut bmp, w - r - 1, h - r - 1, r, fill);
    }

    if let Some(outline) = indices.outline {
        let s = paint.stroke_px();
        // straight border segments, corner-width inset
        for yy in 0..s.min(h) {
            for xx in r..(w - r) {
                bmp.pset(xx, yy, outline);
            }
        }
        for yy in (h - s)..h {
            for xx in r..(w - r) {
                bmp.pset(xx, yy, outline);
            }
        }
        for xx in 0..s.min(w) {
            for yy in r..(h - r) {
                bmp.pset(xx, yy, outline);
            }
        }
        for xx in (w - s)..w {
            for yy in r..(h - r) {
                bmp.pset(xx, yy, outline);
            }
        }
        // corner rings; the off-quadrant arcs land on painted border or
        // clip at the buffer edge
        ring(&mut bmp, r, r, r, s, outline);
        ring(&mut bmp, w - r - 1, r, r, s, outline);
        ring(&mut bmp, r, h - r - 1, r, s, outline);
        ring(&mut bmp, w - r - 1, h - r - 1, r, s, outline);
    }

    Tile::new(bmp, palette, x, y)
}
