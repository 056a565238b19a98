//! # Coat-of-Arms Composer
//!
//! Assembles a square emblem: a shield background plus up to four icon
//! fragments at fixed quadrant anchors, each fit-scaled to its quadrant.

use std::path::{Path, PathBuf};

use crate::error::EscudoError;
use crate::fragment::Fragment;
use crate::geometry::Size;
use crate::layout::EmblemLayout;
use crate::svg::{Element, builder, writer};

/// Maximum number of quadrant icons an emblem can hold.
pub const MAX_ICONS: usize = 4;

/// Compose a coat-of-arms emblem and write it to `output`.
///
/// The shield is normalized to fill the canvas regardless of its source
/// authoring scale; icons fill the quadrants left-to-right then
/// top-to-bottom, and fewer than four icons leave the trailing quadrants
/// empty without shifting the rest. Any unreadable fragment aborts the
/// whole composition and nothing is written.
pub fn compose_emblem(
    output: &Path,
    shield: &Path,
    icons: &[PathBuf],
) -> Result<(), EscudoError> {
    let document = emblem_document(shield, icons, &EmblemLayout::default())?;
    writer::write_document(output, &document)
}

/// Build the emblem document tree without writing it.
pub fn emblem_document(
    shield: &Path,
    icons: &[PathBuf],
    layout: &EmblemLayout,
) -> Result<Element, EscudoError> {
    if icons.len() > MAX_ICONS {
        tracing::warn!(
            "{} icons supplied, only the first {MAX_ICONS} are placed",
            icons.len()
        );
    }

    let mut shield = Fragment::load(shield)?;
    let shield_scale = shield.scale_to_fit(Size::square(f64::from(layout.canvas)));

    let view_box = format!("0 0 {} {}", layout.canvas, layout.canvas);
    let mut svg = builder::canvas(layout.canvas, layout.canvas, Some(&view_box));

    // One scaled group normalizes the shield to the canvas grid.
    svg.push(builder::group(
        &format!("scale({shield_scale})"),
        shield.into_children(),
    ));

    for (quadrant, icon_path) in layout.quadrants.iter().zip(icons.iter()) {
        let mut icon = Fragment::load(icon_path)?;
        let scale = icon.scale_to_fit(layout.icon_target);
        let (x, y) = *quadrant;
        svg.push(builder::group(
            &builder::place_transform(x, y, scale),
            icon.into_children(),
        ));
    }

    Ok(svg)
}
