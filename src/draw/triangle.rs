//! Scanline triangle fill with Bresenham edge outline
//!
//! Fill sorts the vertices by y and walks scanlines, interpolating the
//! left/right boundary along the edge pair in effect; the pair switches
//! at the middle vertex. The outline draws the three edges over the
//! fill afterwards, so on a triangle the border always wins, unlike the
//! other shapes where fill defers to the border instead.

use crate::draw::line::plot_segment;
use crate::draw::paint::PaintSpec;
use crate::tile::{Bitmap, Tile};

/// Truncating x-interpolation of the edge `(xa, ya)-(xb, yb)` at scanline
/// `y`; a horizontal edge answers its left endpoint
fn edge_interpolate(y: i32, xa: i32, ya: i32, xb: i32, yb: i32) -> i32 {
    if ya == yb {
        return xa;
    }
    let t = (y - ya) as f32 / (yb - ya) as f32;
    (xa as f32 + t * (xb - xa) as f32) as i32
}

/// Triangle over three absolute vertices.
///
/// The tile spans the vertex bounding box and is placed at its top-left
/// corner.
pub fn triangle(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    paint: &PaintSpec,
) -> Tile {
    let minx = x0.min(x1).min(x2);
    let miny = y0.min(y1).min(y2);
    let maxx = x0.max(x1).max(x2);
    let maxy = y0.max(y1).max(y2);

    let (palette, indices) = paint.build_palette();
    let mut bmp = Bitmap::new(maxx - minx + 1, maxy - miny + 1);

    // local buffer coordinates
    let (x0, y0) = (x0 - minx, y0 - miny);
    let (x1, y1) = (x1 - minx, y1 - miny);
    let (x2, y2) = (x2 - minx, y2 - miny);

    if let Some(fill) = indices.fill {
        // Stable sort: ties on y keep input order, which decides the
        // edge pair used for flat tops and bottoms
        let mut pts = [(x0, y0), (x1, y1), (x2, y2)];
        pts.sort_by_key(|p| p.1);
        let [(ax, ay), (bx, by), (cx, cy)] = pts;

        for y in ay..=cy {
            let (mut xl, mut xr) = if y < by {
                (
                    edge_interpolate(y, ax, ay, bx, by),
                    edge_interpolate(y, ax, ay, cx, cy),
                )
            } else {
                (
                    edge_interpolate(y, bx, by, cx, cy),
                    edge_interpolate(y, ax, ay, cx, cy),
                )
            };
            if xl > xr {
                core::mem::swap(&mut xl, &mut xr);
            }
            for x in xl..=xr {
                bmp.pset(x, y, fill);
            }
        }
    }

    if let Some(outline) = indices.outline {
        plot_segment(&mut bmp, x0, y0, x1, y1, 1, outline);
        plot_segment(&mut bmp, x1, y1, x2, y2, 1, outline);
        plot_segment(&mut bmp, x2, y2, x0, y0, 1, outline);
    }

    Tile::new(bmp, palette, minx, miny)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{RED, WHITE};

    fn row_span(t: &Tile, y: i32, index: u8) -> usize {
        let w = t.bitmap.width() as i32;
        (0..w)
            .filter(|&x| t.bitmap.get(x, y) == Some(index))
            .count()
    }

    #[test]
    fn bounding_box_and_placement() {
        let t = triangle(4, 2, 14, 2, 9, 12, &PaintSpec::fill(WHITE));
        assert_eq!(t.bitmap.dimensions(), (11, 11));
        assert_eq!((t.x, t.y), (4, 2));
    }

    #[test]
    fn fill_tapers_toward_the_apex() {
        let t = triangle(0, 0, 10, 0, 5, 10, &PaintSpec::fill(WHITE));
        let top = row_span(&t, 0, 1);
        let mid = row_span(&t, 5, 1);
        let tip = row_span(&t, 10, 1);
        assert_eq!(top, 11);
        assert!(mid < top);
        assert!(tip <= 2);
        assert!(mid > tip);
    }

    #[test]
    fn outline_overwrites_fill_on_the_edges() {
        let t = triangle(0, 0, 10, 0, 5, 10, &PaintSpec::fill_outline(WHITE, RED));
        // Top edge is outline, not fill
        for x in 0..=10 {
            assert_eq!(t.bitmap.get(x, 0), Some(2), "top edge at {x}");
        }
        // Interior keeps the fill index
        assert_eq!(t.bitmap.get(5, 3), Some(1));
    }

    #[test]
    fn outline_only_leaves_interior_background() {
        let t = triangle(0, 0, 12, 0, 6, 12, &PaintSpec::outline(RED));
        assert_eq!(t.bitmap.get(6, 4), Some(0));
        assert!(row_span(&t, 0, 1) > 0);
    }

    #[test]
    fn degenerate_collinear_triangle_is_a_line_of_fill() {
        let t = triangle(0, 0, 6, 0, 3, 0, &PaintSpec::fill(WHITE));
        assert_eq!(t.bitmap.dimensions(), (7, 1));
        assert!(t.bitmap.pixels().iter().all(|&p| p == 1));
    }

    #[test]
    fn vertex_order_does_not_change_the_painted_set() {
        let a = triangle(2, 1, 11, 4, 5, 9, &PaintSpec::fill(WHITE));
        let b = triangle(5, 9, 2, 1, 11, 4, &PaintSpec::fill(WHITE));
        assert_eq!(a.bitmap.pixels(), b.bitmap.pixels());
        assert_eq!((a.x, a.y), (b.x, b.y));
    }
}
