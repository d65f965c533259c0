//! Tolerance-band ellipse rasterization
//!
//! The outline is not a stepped curve: every pixel of the bounding box
//! is tested against the implicit equation and painted when the value
//! `x^2/rx^2 + y^2/ry^2` lands inside the band `[0.98, 1.02]`. The band
//! test is the contract here; callers depend on its exact pixel output,
//! so a sharper algorithm belongs behind a new entry point rather than
//! in this one. The fill is an analytic per-row span that only touches
//! background, keeping the band intact.

use crate::draw::paint::PaintSpec;
use crate::tile::{Bitmap, Tile};

/// Ellipse with radii `(rx, ry)` centred at `(xc, yc)`.
///
/// The tile spans `(2rx+1) x (2ry+1)` and is placed at
/// `(xc - rx, yc - ry)`.
pub fn ellipse(xc: i32, yc: i32, rx: i32, ry: i32, paint: &PaintSpec) -> Tile {
    let w = rx * 2 + 1;
    let h = ry * 2 + 1;
    let (palette, indices) = paint.build_palette();
    let mut bmp = Bitmap::new(w, h);

    // Epsilon keeps zero radii from dividing by zero; the band then
    // simply never matches on that axis.
    let rx2 = (rx * rx) as f32 + 1e-9;
    let ry2 = (ry * ry) as f32 + 1e-9;
    let on_edge =
        |x: i32, y: i32| -> bool {
            let val = (x * x) as f32 / rx2 + (y * y) as f32 / ry2;
            (0.98..=1.02).contains(&val)
        };

    if let Some(outline) = indices.outline {
        for yy in -ry..=ry {
            for xx in -rx..=rx {
                if on_edge(xx, yy) {
                    // TODO: widen radially instead of repainting the same
                    // band pixel per stroke pass
                    for _ in 0..paint.stroke_px() {
                        bmp.pset(rx + xx, ry + yy, outline);
                    }
                }
            }
        }
    }

    if let Some(fill) = indices.fill {
        for yy in -ry..=ry {
            let frac = 1.0 - (yy * yy) as f32 / ry2;
            if frac < 0.0 {
                continue;
            }
            let x_max = (rx as f32 * libm::sqrtf(frac)) as i32;
            for xx in -x_max..=x_max {
                bmp.pset_if_bg(rx + xx, ry + yy, fill);
            }
        }
    }

    Tile::new(bmp, palette, xc - rx, yc - ry)
}
