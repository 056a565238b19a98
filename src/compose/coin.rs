//! # Coin Composer
//!
//! Assembles one full circular coin face on an 850x850 canvas:
//! background, two concentric border circles, the central emblem or icon,
//! an optional crown, and either a laurel wreath or two arcs of circular
//! text.

use std::path::{Path, PathBuf};

use crate::error::EscudoError;
use crate::fragment::Fragment;
use crate::layout::CoinLayout;
use crate::svg::builder::{self, TextStyle};
use crate::svg::{Element, writer};

/// Id of the invisible circle the rim inscriptions follow.
const TEXT_GUIDE_ID: &str = "rim-text-guide";

/// One coin-face request: which fragments to place and which assembly
/// steps to enable.
#[derive(Debug, Clone)]
pub struct CoinSpec {
    /// Central fragment: a raw icon, or an emblem produced by
    /// [`compose_emblem`](crate::compose::compose_emblem).
    pub center: PathBuf,
    /// Crown above the center, or `None` to omit.
    pub crown: Option<PathBuf>,
    /// Laurel wreath spanning the rim. Mutually exclusive with the
    /// inscriptions: when set, no circular text is emitted.
    pub laurels: Option<PathBuf>,
    /// Left-half inscription. Empty selects the layout default.
    pub left_text: String,
    /// Right-half inscription. Empty selects the layout default.
    pub right_text: String,
    /// The center is already normalized to the emblem coordinate system
    /// and needs no fit scale of its own.
    pub center_normalized: bool,
    /// Overlay center crosshair guides.
    pub debug: bool,
    /// Paint an opaque white background behind the coin.
    pub with_background: bool,
}

impl CoinSpec {
    /// A plain face: raw icon center, no crown, no laurels, default
    /// inscriptions, background on.
    pub fn new(center: impl Into<PathBuf>) -> Self {
        Self {
            center: center.into(),
            crown: None,
            laurels: None,
            left_text: String::new(),
            right_text: String::new(),
            center_normalized: false,
            debug: false,
            with_background: true,
        }
    }
}

/// Compose a coin face and write it to `output`.
///
/// Any unreadable fragment aborts the whole composition and nothing is
/// written.
pub fn compose_coin(output: &Path, spec: &CoinSpec) -> Result<(), EscudoError> {
    let document = coin_document(spec, &CoinLayout::default())?;
    writer::write_document(output, &document)
}

/// Build the coin document tree without writing it.
///
/// Assembly order is fixed: background, border circles, center content,
/// crown, laurels or inscriptions, debug overlay.
pub fn coin_document(spec: &CoinSpec, layout: &CoinLayout) -> Result<Element, EscudoError> {
    let view_box = format!("0 0 {} {}", layout.canvas, layout.canvas);
    let mut svg = builder::canvas(layout.canvas, layout.canvas, Some(&view_box));

    if spec.with_background {
        builder::white_background(&mut svg, layout.canvas, layout.canvas);
    }

    builder::circle(
        &mut svg,
        layout.outer_radius,
        layout.center,
        layout.outer_fill,
        "black",
        layout.ring_stroke_width,
    );
    builder::circle(
        &mut svg,
        layout.inner_radius,
        layout.center,
        layout.inner_fill,
        "black",
        layout.ring_stroke_width,
    );

    place_center(&mut svg, spec, layout)?;

    if let Some(crown_path) = &spec.crown {
        let mut crown = Fragment::load(crown_path)?;
        let scale = crown.scale_to_fit(layout.crown_target) * layout.crown_enlarge;
        let (x, y) = layout.crown_offset;
        svg.push(builder::group(
            &builder::place_transform(x, y, scale),
            crown.into_children(),
        ));
    }

    if let Some(laurel_path) = &spec.laurels {
        let laurels = Fragment::load(laurel_path)?;
        let (x, y) = layout.laurel_offset;
        svg.push(builder::group(
            &builder::place_transform(x, y, layout.laurel_scale),
            laurels.into_children(),
        ));
    } else {
        builder::circular_guide_path(&mut svg, layout.text_radius, layout.center, TEXT_GUIDE_ID);
        let style = TextStyle {
            size: layout.text_size,
            ..TextStyle::default()
        };
        let left = non_empty_or(&spec.left_text, layout.default_left_text);
        let right = non_empty_or(&spec.right_text, layout.default_right_text);
        builder::text_on_path(&mut svg, layout.left_text_offset, left, TEXT_GUIDE_ID, &style);
        builder::text_on_path(&mut svg, layout.right_text_offset, right, TEXT_GUIDE_ID, &style);
    }

    if spec.debug {
        builder::center_lines(&mut svg, layout.canvas, layout.canvas);
    }

    Ok(svg)
}

/// Place the central content. A normalized emblem is anchored as-is; a
/// raw icon gets its own fit scale first. Both anchors shift down when a
/// crown sits above.
fn place_center(
    svg: &mut Element,
    spec: &CoinSpec,
    layout: &CoinLayout,
) -> Result<(), EscudoError> {
    let mut center = Fragment::load(&spec.center)?;
    let crowned = spec.crown.is_some();

    let transform = if spec.center_normalized {
        let (x, y) = if crowned {
            layout.emblem_offset_crowned
        } else {
            layout.emblem_offset
        };
        format!("translate({x}, {y})")
    } else {
        let scale = center.scale_to_fit(layout.icon_target);
        let (x, y) = if crowned {
            layout.icon_offset_crowned
        } else {
            layout.icon_offset
        };
        builder::place_transform(x, y, scale)
    };

    svg.push(builder::group(&transform, center.into_children()));
    Ok(())
}

fn non_empty_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.trim().is_empty() { fallback } else { text }
}
