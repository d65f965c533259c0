//! Paint configuration and palette building
//!
//! Every shape call takes one [`PaintSpec`]: which of fill/outline are
//! present, the stroke width, and whether the background slot should be
//! transparent. The builder maps the present roles onto palette indices:
//!
//! - background is always index 0;
//! - with both roles present, fill is index 1 and outline index 2;
//! - a lone role (either one) takes index 1.

use crate::color::Rgb;
use crate::tile::Palette;

/// Which of fill and outline are painted, how thick the outline is, and
/// whether the background composites as transparent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintSpec {
    /// Interior colour, `None` for no fill
    pub fill: Option<Rgb>,
    /// Border colour, `None` for no outline
    pub outline: Option<Rgb>,
    /// Outline thickness in pixels, always >= 1
    pub stroke: u32,
    /// Background slot transparency, on by default
    pub transparent_bg: bool,
}

/// Palette indices resolved for the roles present in a [`PaintSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintIndices {
    /// Index of the fill colour, `None` when not filling
    pub fill: Option<u8>,
    /// Index of the outline colour, `None` when not outlining
    pub outline: Option<u8>,
}

impl Default for PaintSpec {
    fn default() -> Self {
        Self {
            fill: None,
            outline: None,
            stroke: 1,
            transparent_bg: true,
        }
    }
}

impl PaintSpec {
    /// Fill-only paint
    pub fn fill(color: Rgb) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    /// Outline-only paint
    pub fn outline(color: Rgb) -> Self {
        Self {
            outline: Some(color),
            ..Self::default()
        }
    }

    /// Fill plus outline
    pub fn fill_outline(fill: Rgb, outline: Rgb) -> Self {
        Self {
            fill: Some(fill),
            outline: Some(outline),
            ..Self::default()
        }
    }

    /// Set the stroke width. Zero clamps to 1; the unsigned type rules
    /// out negative strokes entirely.
    pub fn with_stroke(mut self, stroke: u32) -> Self {
        self.stroke = stroke.max(1);
        self
    }

    /// Keep index 0 opaque so the shape composites over a solid black
    /// background
    pub fn opaque_bg(mut self) -> Self {
        self.transparent_bg = false;
        self
    }

    /// Stroke width as the signed pixel count the drawing loops use
    pub(crate) fn stroke_px(&self) -> i32 {
        self.stroke.max(1) as i32
    }

    /// Allocate the palette for the roles present and resolve their
    /// indices
    pub fn build_palette(&self) -> (Palette, PaintIndices) {
        let mut palette = Palette::new(self.transparent_bg);
        let indices = match (self.fill, self.outline) {
            (None, None) => PaintIndices {
                fill: None,
                outline: None,
            },
            (Some(f), None) => PaintIndices {
                fill: palette.push(f),
                outline: None,
            },
            (None, Some(o)) => PaintIndices {
                fill: None,
                outline: palette.push(o),
            },
            (Some(f), Some(o)) => PaintIndices {
                fill: palette.push(f),
                outline: palette.push(o),
            },
        };
        (palette, indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, GREEN, RED};

    #[test]
    fn no_paint_gives_background_only() {
        let (pal, idx) = PaintSpec::default().build_palette();
        assert_eq!(pal.len(), 1);
        assert_eq!(idx.fill, None);
        assert_eq!(idx.outline, None);
        assert_eq!(pal.get(0), Some(BLACK));
    }

    #[test]
    fn fill_only_takes_index_one() {
        let (pal, idx) = PaintSpec::fill(GREEN).build_palette();
        assert_eq!(pal.len(), 2);
        assert_eq!(idx.fill, Some(1));
        assert_eq!(idx.outline, None);
        assert_eq!(pal.get(1), Some(GREEN));
    }

    #[test]
    fn outline_only_takes_index_one() {
        let (pal, idx) = PaintSpec::outline(RED).build_palette();
        assert_eq!(pal.len(), 2);
        assert_eq!(idx.fill, None);
        assert_eq!(idx.outline, Some(1));
        assert_eq!(pal.get(1), Some(RED));
    }

    #[test]
    fn both_roles_order_fill_then_outline() {
        let (pal, idx) = PaintSpec::fill_outline(GREEN, RED).build_palette();
        assert_eq!(pal.len(), 3);
        assert_eq!(idx.fill, Some(1));
        assert_eq!(idx.outline, Some(2));
        assert_eq!(pal.get(1), Some(GREEN));
        assert_eq!(pal.get(2), Some(RED));
    }

    #[test]
    fn zero_stroke_clamps_to_one() {
        let p = PaintSpec::outline(RED).with_stroke(0);
        assert_eq!(p.stroke, 1);
        assert_eq!(p.stroke_px(), 1);
    }

    #[test]
    fn transparency_flag_reaches_the_palette() {
        let (pal, _) = PaintSpec::fill(GREEN).build_palette();
        assert!(pal.is_transparent_bg());
        let (pal, _) = PaintSpec::fill(GREEN).opaque_bg().build_palette();
        assert!(!pal.is_transparent_bg());
    }
}
