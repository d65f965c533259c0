//! Midpoint circle rasterization
//!
//! The outline comes from the classic integer midpoint algorithm: one
//! octant is stepped and mirrored eight ways, and thicker strokes rerun
//! the mirror at radii `r, r-1, ..., r-stroke+1`. The fill pass scans
//! each row between the outline pixels already present, falling back to
//! the analytic half-width `floor(sqrt(r^2 - dy^2))` on rows that have
//! no outline at all (the only fill path when outline is absent).

use crate::draw::paint::PaintSpec;
use crate::tile::{Bitmap, Tile};

/// Mirror one octant point to all eight positions around `(cx, cy)`
#[inline]
pub(crate) fn plot8(bmp: &mut Bitmap, cx: i32, cy: i32, px: i32, py: i32, index: u8) {
    bmp.pset(cx + px, cy + py, index);
    bmp.pset(cx + py, cy + px, index);
    bmp.pset(cx - py, cy + px, index);
    bmp.pset(cx - px, cy + py, index);
    bmp.pset(cx - px, cy - py, index);
    bmp.pset(cx - py, cy - px, index);
    bmp.pset(cx + py, cy - px, index);
    bmp.pset(cx + px, cy - py, index);
}

/// Midpoint ring of the given radius around `(cx, cy)`, thickened inward
/// by rerunning each mirrored point at `radius - s` for every stroke pass
pub(crate) fn ring(bmp: &mut Bitmap, cx: i32, cy: i32, radius: i32, stroke: i32, index: u8) {
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        for s in 0..stroke {
            plot8(bmp, cx, cy, x - s, y, index);
            plot8(bmp, cx, cy, y, x - s, index);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x + 1);
        }
    }
}

/// Circle of radius `r` centred at `(xc, yc)`.
///
/// The tile spans the bounding box `(2r+1) x (2r+1)` and is placed at
/// `(xc - r, yc - r)`. `r = 0` degenerates to a single pixel.
pub fn circle(xc: i32, yc: i32, r: i32, paint: &PaintSpec) -> Tile {
    let d = r * 2 + 1;
    let (palette, indices) = paint.build_palette();
    let mut bmp = Bitmap::new(d, d);

    if let Some(outline) = indices.outline {
        ring(&mut bmp, r, r, r, paint.stroke_px(), outline);
    }

    if let Some(fill) = indices.fill {
        for yy in 0..d {
            // Row extremes of the outline already painted, if any
            let mut left = None;
            let mut right = None;
            for xx in 0..d {
                if bmp.get(xx, yy) != Some(0) {
                    left = Some(xx);
                    break;
                }
            }
            for xx in (0..d).rev() {
                if bmp.get(xx, yy) != Some(0) {
                    right = Some(xx);
                    break;
                }
            }
            match (left, right) {
                (Some(left), Some(right)) => {
                    // Span between the outline extremes, background only
                    for xx in left..=right {
                        bmp.pset_if_bg(xx, yy, fill);
                    }
                }
                _ => {
                    // No outline on this row: analytic half-width
                    let dy = yy - r;
                    let v = r * r - dy * dy;
                    if v >= 0 {
                        let x_max = libm::sqrtf(v as f32) as i32;
                        for xx in (r - x_max)..=(r + x_max) {
                            bmp.pset(xx, yy, fill);
                        }
                    }
                }
            }
        }
    }

    Tile::new(bmp, palette, xc - r, yc - r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, RED, WHITE};

    fn painted(tile: &Tile) -> alloc::vec::Vec<(i32, i32)> {
        let (w, h) = tile.bitmap.dimensions();
        let mut out = alloc::vec::Vec::new();
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                if tile.bitmap.get(x, y) != Some(0) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn bounding_box_and_placement() {
        let t = circle(50, 40, 7, &PaintSpec::fill(BLUE));
        assert_eq!(t.bitmap.dimensions(), (15, 15));
        assert_eq!((t.x, t.y), (43, 33));
    }

    #[test]
    fn outline_has_eightfold_symmetry() {
        let r = 9;
        let t = circle(0, 0, r, &PaintSpec::outline(RED));
        for (x, y) in painted(&t) {
            let (dx, dy) = (x - r, y - r);
            // 90-degree rotations of every painted offset are painted too
            assert_eq!(t.bitmap.get(r - dy, r + dx), Some(1));
            assert_eq!(t.bitmap.get(r - dx, r - dy), Some(1));
            assert_eq!(t.bitmap.get(r + dy, r - dx), Some(1));
            assert_eq!(t.bitmap.get(r + dy, r + dx), Some(1));
        }
    }

    #[test]
    fn zero_radius_fill_is_single_fill_pixel() {
        let t = circle(10, 10, 0, &PaintSpec::fill(BLUE));
        assert_eq!(t.bitmap.dimensions(), (1, 1));
        assert_eq!(t.bitmap.get(0, 0), Some(1));
        assert_eq!((t.x, t.y), (10, 10));
    }

    #[test]
    fn zero_radius_without_paint_stays_background() {
        let t = circle(0, 0, 0, &PaintSpec::default());
        assert_eq!(t.bitmap.dimensions(), (1, 1));
        assert_eq!(t.bitmap.get(0, 0), Some(0));
        assert_eq!(t.palette.len(), 1);
    }

    #[test]
    fn fill_without_outline_covers_the_midrow() {
        let r = 5;
        let t = circle(0, 0, r, &PaintSpec::fill(WHITE));
        // The centre row spans the full diameter
        for xx in 0..=(2 * r) {
            assert_eq!(t.bitmap.get(xx, r), Some(1));
        }
        // Corners of the bounding box stay background
        assert_eq!(t.bitmap.get(0, 0), Some(0));
        assert_eq!(t.bitmap.get(2 * r, 2 * r), Some(0));
    }

    #[test]
    fn fill_between_outline_preserves_the_ring() {
        let r = 8;
        let t = circle(0, 0, r, &PaintSpec::fill_outline(BLUE, RED));
        // Midrow: outline at both extremes, fill strictly inside
        assert_eq!(t.bitmap.get(0, r), Some(2));
        assert_eq!(t.bitmap.get(2 * r, r), Some(2));
        assert_eq!(t.bitmap.get(r, r), Some(1));
        // No background left between the extremes
        for xx in 0..=(2 * r) {
            assert_ne!(t.bitmap.get(xx, r), Some(0));
        }
    }

    #[test]
    fn stroke_thickens_the_ring_inward() {
        let r = 10;
        let thin = circle(0, 0, r, &PaintSpec::outline(RED));
        let thick = circle(0, 0, r, &PaintSpec::outline(RED).with_stroke(3));
        let n_thin = painted(&thin).len();
        let n_thick = painted(&thick).len();
        assert!(n_thick > n_thin);
        // Midrow gains the two inner ring pixels per extra stroke
        assert_eq!(thick.bitmap.get(1, r), Some(1));
        assert_eq!(thick.bitmap.get(2, r), Some(1));
        assert_eq!(thick.bitmap.get(3, r), Some(0));
    }
}
