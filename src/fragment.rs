//! # Fragment Loader
//!
//! Loads externally authored SVG files (shields, icons, crowns, laurels)
//! into owned element trees for re-embedding.
//!
//! Every fragment must resolve to a viewBox before it can be placed. A
//! declared `viewBox` attribute wins; otherwise one is synthesized from
//! the width/height attributes (unit suffixes tolerated). A fragment with
//! neither falls back to an assumed `0 0 100 100` box at placement time
//! rather than aborting the whole coin.

use std::path::{Path, PathBuf};

use crate::error::EscudoError;
use crate::geometry::{Size, ViewBox};
use crate::svg::{Element, Node};

/// An externally authored SVG file loaded for re-embedding.
#[derive(Debug, Clone)]
pub struct Fragment {
    path: PathBuf,
    root: Element,
}

impl Fragment {
    /// Load and parse an SVG fragment.
    ///
    /// Fails with [`EscudoError::FragmentLoad`] when the path is
    /// unreadable or the content is not well-formed XML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EscudoError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EscudoError::FragmentLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let document = roxmltree::Document::parse(&text).map_err(|e| EscudoError::FragmentLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            root: convert(document.root_element()),
        })
    }

    /// Source path, for error reporting.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The fragment's root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Resolve the fragment's viewBox.
    ///
    /// Returns the declared viewBox when present and parseable. When
    /// absent, synthesizes `0 0 width height` from the declared
    /// dimensions, writes it back onto the root (so repeated calls see
    /// the same box), and returns it. Returns `None` when the fragment
    /// carries no usable geometry at all.
    pub fn ensure_view_box(&mut self) -> Option<ViewBox> {
        if let Some(raw) = self.root.attr("viewBox") {
            return match ViewBox::parse(raw) {
                Ok(view_box) => Some(view_box),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), "unusable declared viewBox: {e}");
                    None
                }
            };
        }

        let width = parse_dimension(self.root.attr("width"))?;
        let height = parse_dimension(self.root.attr("height"))?;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }

        let view_box = ViewBox::synthesized(width, height);
        self.root.set_attr("viewBox", view_box.to_attr());
        Some(view_box)
    }

    /// Lenient placement policy: fall back to the assumed `0 0 100 100`
    /// box rather than aborting when a fragment has no usable geometry.
    pub fn view_box_or_default(&mut self) -> ViewBox {
        self.ensure_view_box().unwrap_or_else(|| {
            tracing::warn!(
                path = %self.path.display(),
                "fragment has no usable viewBox, assuming {}",
                ViewBox::DEFAULT.to_attr()
            );
            ViewBox::DEFAULT
        })
    }

    /// Fit this fragment into `target`: resolve the viewBox, compute the
    /// uniform fit scale, and rewrite the root's declared width/height to
    /// the scaled pixel size. Returns the scale.
    ///
    /// After this the declared size no longer matches the viewBox; only
    /// the transform-wrapped rendering is used downstream, so the stale
    /// attributes are never consulted again.
    pub fn scale_to_fit(&mut self, target: Size) -> f64 {
        let view_box = self.view_box_or_default();
        let scale = view_box.fit_scale(target);
        self.root.set_attr("width", (view_box.width * scale).to_string());
        self.root.set_attr("height", (view_box.height * scale).to_string());
        scale
    }

    /// Consume the fragment, moving its children out for re-embedding.
    /// The emptied root is discarded.
    pub fn into_children(mut self) -> Vec<Node> {
        self.root.take_children()
    }
}

/// Parse a width/height attribute value, tolerating unit suffixes
/// ("120px", "50mm") and percentage signs.
fn parse_dimension(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    let numeric = raw
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%')
        .trim();
    numeric.parse().ok()
}

/// Convert a parsed node into the owned tree, keeping local names only so
/// the composed document serializes free of namespace prefixes.
fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name());
    for attribute in node.attributes() {
        element.set_attr(attribute.name(), attribute.value());
    }
    for child in node.children() {
        if child.is_element() {
            element.push(convert(child));
        } else if child.is_text()
            && let Some(text) = child.text()
            && !text.trim().is_empty()
        {
            element.push_text(text);
        }
    }
    element
}
