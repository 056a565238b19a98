//! # ViewBox Geometry
//!
//! Fit-scale math for placing SVG fragments into fixed target boxes.
//!
//! Every fragment is scaled uniformly: the fit scale is the largest factor
//! that fits the fragment's viewBox into a target box without distortion
//! or overflow on either axis.
//!
//! ## Example
//!
//! ```
//! use escudo::geometry::{Size, ViewBox};
//!
//! let vb = ViewBox::parse("0 0 100 200").unwrap();
//! let scale = vb.fit_scale(Size::square(125.0));
//! // Height is the limiting axis: 125 / 200
//! assert!((scale - 0.625).abs() < 1e-9);
//! ```

use crate::error::EscudoError;

/// A target bounding box in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Size {
    /// Create a size from explicit dimensions.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square target box.
    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// The `viewBox` rectangle of an SVG fragment: the coordinate space its
/// contents are drawn in, independent of the declared pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Assumed box for fragments that declare neither a viewBox nor usable
    /// width/height attributes.
    pub const DEFAULT: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    /// Parse a `viewBox` attribute value.
    ///
    /// Accepts whitespace- or comma-separated numbers. Fails with
    /// [`EscudoError::InvalidGeometry`] unless the value contains exactly
    /// four numbers with positive width and height.
    pub fn parse(raw: &str) -> Result<Self, EscudoError> {
        let numbers: Vec<f64> = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| {
                EscudoError::InvalidGeometry(format!("viewBox {raw:?} is not numeric"))
            })?;

        if numbers.len() != 4 {
            return Err(EscudoError::InvalidGeometry(format!(
                "viewBox {raw:?} has {} numbers, expected 4",
                numbers.len()
            )));
        }

        let view_box = Self {
            min_x: numbers[0],
            min_y: numbers[1],
            width: numbers[2],
            height: numbers[3],
        };

        if view_box.width <= 0.0 || view_box.height <= 0.0 {
            return Err(EscudoError::InvalidGeometry(format!(
                "viewBox {raw:?} has non-positive dimensions"
            )));
        }

        Ok(view_box)
    }

    /// A viewBox synthesized from declared width/height, origin at 0,0.
    pub const fn synthesized(width: f64, height: f64) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width,
            height,
        }
    }

    /// Largest uniform scale that fits this box into `target` without
    /// overflowing either axis: `min(tw/w, th/h)`.
    pub fn fit_scale(&self, target: Size) -> f64 {
        (target.width / self.width).min(target.height / self.height)
    }

    /// Attribute form: `"min-x min-y width height"`.
    pub fn to_attr(&self) -> String {
        format!("{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}
