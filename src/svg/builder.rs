//! # Document Builder
//!
//! Stateless assembly primitives for the composed SVG document: root
//! canvas, transformed groups, border circles, the circular text guide,
//! text-on-path inscriptions, and the diagnostic overlays.
//!
//! Every operation takes explicit inputs and either returns a new element
//! or appends to a caller-owned parent; there is no hidden state.

use super::{Element, Node};

/// The SVG namespace, declared once on every canvas root.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Rendering hints carried by every canvas root so output matches
/// hand-authored fragments.
const CANVAS_STYLE: &str = "shape-rendering:geometricPrecision; \
     text-rendering:geometricPrecision; image-rendering:optimizeQuality; \
     fill-rule:evenodd; clip-rule:evenodd";

/// Font styling for circular inscriptions.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub family: String,
    pub size: u32,
    pub fill: String,
    pub weight: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 100,
            fill: "black".to_string(),
            weight: "bold".to_string(),
        }
    }
}

/// Create a root drawing canvas with explicit pixel dimensions.
///
/// When `view_box` is present, coordinates inside the canvas are
/// interpreted in viewBox units regardless of the declared pixel size;
/// callers keep the two consistent for 1:1 unit mapping.
pub fn canvas(width: u32, height: u32, view_box: Option<&str>) -> Element {
    let mut svg = Element::new("svg")
        .with_attr("xmlns", SVG_NS)
        .with_attr("width", width.to_string())
        .with_attr("height", height.to_string())
        .with_attr("style", CANVAS_STYLE);
    if let Some(view_box) = view_box {
        svg.set_attr("viewBox", view_box);
    }
    svg
}

/// Wrap an ordered sequence of nodes in a `<g>` carrying one transform.
pub fn group(transform: &str, children: Vec<Node>) -> Element {
    let mut g = Element::new("g").with_attr("transform", transform);
    g.append(children);
    g
}

/// The `translate(x, y) scale(s)` transform used by every fragment
/// placement.
///
/// Composition order is always translate-then-scale: scaling happens
/// around the post-translation origin, not the original origin.
pub fn place_transform(x: f64, y: f64, scale: f64) -> String {
    format!("translate({x}, {y}) scale({scale})")
}

/// Append a centered circle (`cx` = `cy` = `center`).
pub fn circle(
    parent: &mut Element,
    radius: f64,
    center: f64,
    fill: &str,
    stroke: &str,
    stroke_width: u32,
) {
    parent.push(
        Element::new("circle")
            .with_attr("cx", center.to_string())
            .with_attr("cy", center.to_string())
            .with_attr("r", radius.to_string())
            .with_attr("stroke", stroke)
            .with_attr("stroke-width", stroke_width.to_string())
            .with_attr("fill", fill),
    );
}

/// Append an invisible full circle for text to follow: two 180° arcs
/// starting at the top of the circle, tagged with `id`.
pub fn circular_guide_path(parent: &mut Element, radius: f64, center: f64, id: &str) {
    let top = center - radius;
    let bottom = center + radius;
    let path_data = format!(
        "M {center} {top} \
         A {radius} {radius} 0 1 1 {center} {bottom} \
         A {radius} {radius} 0 1 1 {center} {top}"
    );
    parent.push(
        Element::new("path")
            .with_attr("id", id)
            .with_attr("d", path_data)
            .with_attr("fill", "none"),
    );
}

/// Append a text run following the guide path `path_id`, starting at
/// `start_offset` percent around its circumference.
pub fn text_on_path(
    parent: &mut Element,
    start_offset: f64,
    text: &str,
    path_id: &str,
    style: &TextStyle,
) {
    let mut text_element = Element::new("text")
        .with_attr("font-family", style.family.as_str())
        .with_attr("font-size", style.size.to_string())
        .with_attr("fill", style.fill.as_str())
        .with_attr("font-weight", style.weight.as_str());

    let mut text_path = Element::new("textPath")
        .with_attr("href", format!("#{path_id}"))
        .with_attr("startOffset", format!("{start_offset}%"));
    text_path.push_text(text);

    text_element.push(text_path);
    parent.push(text_element);
}

/// Append an opaque white rectangle spanning the canvas.
///
/// Coin faces only - the emblem canvas stays transparent so it can tile
/// onto a coin background.
pub fn white_background(parent: &mut Element, width: u32, height: u32) {
    parent.push(
        Element::new("rect")
            .with_attr("x", "0")
            .with_attr("y", "0")
            .with_attr("width", width.to_string())
            .with_attr("height", height.to_string())
            .with_attr("fill", "white"),
    );
}

/// Append vertical and horizontal guide lines through canvas center.
/// Diagnostic only, never part of production output.
pub fn center_lines(parent: &mut Element, width: u32, height: u32) {
    let mid_x = f64::from(width) / 2.0;
    let mid_y = f64::from(height) / 2.0;
    parent.push(
        Element::new("line")
            .with_attr("x1", mid_x.to_string())
            .with_attr("y1", "0")
            .with_attr("x2", mid_x.to_string())
            .with_attr("y2", height.to_string())
            .with_attr("stroke", "red")
            .with_attr("stroke-width", "1"),
    );
    parent.push(
        Element::new("line")
            .with_attr("x1", "0")
            .with_attr("y1", mid_y.to_string())
            .with_attr("x2", width.to_string())
            .with_attr("y2", mid_y.to_string())
            .with_attr("stroke", "red")
            .with_attr("stroke-width", "1"),
    );
}
