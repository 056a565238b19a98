//! # Layout Constants
//!
//! Tuned pixel geometry for the emblem grid and the coin face. These are
//! visual tuning constants owned by configuration - they were chosen by
//! eye, are not derived from other geometry, and must not be re-derived.
//!
//! Both layouts ship one canonical constant set (`CLASSIC`); callers that
//! need a different look construct their own values.

use crate::geometry::Size;

/// Geometry for the coat-of-arms emblem canvas.
#[derive(Debug, Clone)]
pub struct EmblemLayout {
    /// Square canvas side in pixels. The canvas viewBox spans the same
    /// range, so canvas units map 1:1 to pixels.
    pub canvas: u32,
    /// Quadrant anchors: upper-left, upper-right, lower-left,
    /// lower-right. Icons fill them in this order.
    pub quadrants: [(f64, f64); 4],
    /// Target box each quadrant icon is fit into.
    pub icon_target: Size,
}

impl EmblemLayout {
    /// The canonical 500x500 emblem grid.
    pub const CLASSIC: Self = Self {
        canvas: 500,
        quadrants: [
            (90.0, 70.0),
            (300.0, 70.0),
            (90.0, 270.0),
            (300.0, 270.0),
        ],
        icon_target: Size::square(125.0),
    };
}

impl Default for EmblemLayout {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Geometry and palette for an 850x850 coin face.
#[derive(Debug, Clone)]
pub struct CoinLayout {
    /// Square canvas side in pixels (viewBox spans the same range).
    pub canvas: u32,
    /// Canvas center, `cx` = `cy` for both border circles.
    pub center: f64,
    /// Outer border circle radius.
    pub outer_radius: f64,
    /// Inner face circle radius.
    pub inner_radius: f64,
    /// Outer circle fill.
    pub outer_fill: &'static str,
    /// Inner circle fill.
    pub inner_fill: &'static str,
    /// Stroke width shared by both circles.
    pub ring_stroke_width: u32,

    /// Radius of the invisible guide circle the inscriptions follow.
    pub text_radius: f64,
    /// startOffset percentage for the left-half inscription. Tuned so the
    /// text reads upright without crossing the right half.
    pub left_text_offset: f64,
    /// startOffset percentage for the right-half inscription.
    pub right_text_offset: f64,
    /// Inscription font size.
    pub text_size: u32,
    /// Inscription used when the caller supplies no left text.
    pub default_left_text: &'static str,
    /// Inscription used when the caller supplies no right text.
    pub default_right_text: &'static str,

    /// Anchor for an already-normalized emblem center.
    pub emblem_offset: (f64, f64),
    /// Same, when a crown sits above (shifted down to make visual room).
    pub emblem_offset_crowned: (f64, f64),
    /// Target box a raw center icon is fit into.
    pub icon_target: Size,
    /// Anchor for a raw fit-scaled center icon.
    pub icon_offset: (f64, f64),
    /// Same, when a crown sits above.
    pub icon_offset_crowned: (f64, f64),

    /// Reference box the crown is fit against before enlargement.
    pub crown_target: Size,
    /// Fixed enlargement applied on top of the crown's fit scale.
    pub crown_enlarge: f64,
    /// Crown anchor above the canvas center.
    pub crown_offset: (f64, f64),

    /// Laurel wreath anchor, spanning near the full coin edge.
    pub laurel_offset: (f64, f64),
    /// Fixed laurel scale.
    pub laurel_scale: f64,
}

impl CoinLayout {
    /// The canonical coin face: black rim, gold field, Arial inscriptions.
    pub const CLASSIC: Self = Self {
        canvas: 850,
        center: 425.0,
        outer_radius: 420.0,
        inner_radius: 390.0,
        outer_fill: "black",
        inner_fill: "#FFD700",
        ring_stroke_width: 5,

        text_radius: 315.0,
        left_text_offset: 61.0,
        right_text_offset: 11.8,
        text_size: 80,
        default_left_text: "DARK \u{25BE} VADA",
        default_right_text: "VADA \u{25BE} COIN",

        emblem_offset: (172.0, 205.0),
        emblem_offset_crowned: (172.0, 230.0),
        icon_target: Size::square(500.0),
        icon_offset: (175.0, 215.0),
        icon_offset_crowned: (175.0, 240.0),

        crown_target: Size::square(100.0),
        crown_enlarge: 2.4,
        crown_offset: (263.0, -15.0),

        laurel_offset: (31.0, 60.0),
        laurel_scale: 0.615,
    };
}

impl Default for CoinLayout {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrants_are_symmetric() {
        let layout = EmblemLayout::default();
        let [ul, ur, ll, lr] = layout.quadrants;
        // Left and right columns line up, as do top and bottom rows
        assert_eq!(ul.0, ll.0);
        assert_eq!(ur.0, lr.0);
        assert_eq!(ul.1, ur.1);
        assert_eq!(ll.1, lr.1);
    }

    #[test]
    fn test_coin_rings_fit_canvas() {
        let layout = CoinLayout::default();
        assert!(layout.inner_radius < layout.outer_radius);
        assert!(layout.text_radius < layout.inner_radius);
        // Outer rim stays inside the canvas
        assert!(layout.center + layout.outer_radius <= f64::from(layout.canvas));
    }

    #[test]
    fn test_crown_makes_room() {
        let layout = CoinLayout::default();
        // Crowned anchors sit lower than plain ones
        assert!(layout.emblem_offset_crowned.1 > layout.emblem_offset.1);
        assert!(layout.icon_offset_crowned.1 > layout.icon_offset.1);
    }
}
