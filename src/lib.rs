//! # Tristimulus
//!
//! Deterministic conversions between sRGB, CIE XYZ, CIE L\*a\*b\* (CIELAB)
//! and Hunter Lab, anchored to a fixed 10° reference white.
//!
//! This library provides bit-reproducible color transforms by:
//! - Decoding/encoding sRGB with the standard piecewise companding function
//! - Applying the fixed sRGB↔XYZ linear matrices (XYZ on the 0-100 scale)
//! - Normalizing CIELAB and Hunter Lab against the shared reference white
//! - Routing every other conversion through XYZ as the hub
//!
//! ## Example
//!
//! ```rust
//! use tristimulus::{rgb_to_xyz, xyz_to_cielab};
//!
//! let xyz = rgb_to_xyz([46.0, 111.0, 180.0]);
//! let lab = xyz_to_cielab(xyz);
//! assert!(lab[0] > 0.0 && lab[0] < 100.0);
//! ```
//!
//! The core functions accept any `[f64; 3]` and never fail: out-of-gamut
//! values pass through unclamped and out-of-domain inputs produce NaN or
//! infinity. The [`checked`] module wraps every conversion with a
//! `Result`-returning variant for callers that want non-finite results
//! surfaced as errors.

use serde::{Deserialize, Serialize};

pub mod checked;
pub mod constants;
pub mod convert;
pub mod error;

pub use convert::{
    cielab_to_hunterlab, cielab_to_xyz, hex_to_rgb, hunterlab_to_cielab, hunterlab_to_rgb,
    hunterlab_to_xyz, rgb_to_hex, rgb_to_hunterlab, rgb_to_xyz, xyz_to_cielab, xyz_to_hunterlab,
    xyz_to_rgb,
};
pub use error::{ConversionError, Result};

/// One color expressed in every supported space
///
/// Aggregate built by converting a single input triplet across the whole
/// graph, useful for reports and serialization. All fields are derived from
/// the constructor input; the struct has no identity beyond its values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCoordinates {
    /// sRGB channels in the 0-255 domain (unclamped)
    pub rgb: [f64; 3],
    /// CIE XYZ tristimulus values on the 0-100 scale
    pub xyz: [f64; 3],
    /// CIE L*a*b* coordinates
    pub cielab: [f64; 3],
    /// Hunter Lab coordinates
    pub hunterlab: [f64; 3],
    /// Hexadecimal display form of the sRGB value
    pub hex: String,
}

impl ColorCoordinates {
    fn from_xyz_internal(rgb: [f64; 3], xyz: [f64; 3]) -> Self {
        Self {
            rgb,
            xyz,
            cielab: xyz_to_cielab(xyz),
            hunterlab: xyz_to_hunterlab(xyz),
            hex: rgb_to_hex(rgb),
        }
    }

    /// Build from an sRGB triplet (0-255 per channel)
    pub fn from_rgb(rgb: [f64; 3]) -> Self {
        Self::from_xyz_internal(rgb, rgb_to_xyz(rgb))
    }

    /// Build from a CIE XYZ triplet (0-100 scale)
    pub fn from_xyz(xyz: [f64; 3]) -> Self {
        Self::from_xyz_internal(xyz_to_rgb(xyz), xyz)
    }

    /// Build from a CIE L*a*b* triplet
    pub fn from_cielab(lab: [f64; 3]) -> Self {
        let xyz = cielab_to_xyz(lab);
        let rgb = xyz_to_rgb(xyz);
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            xyz,
            cielab: lab,
            hunterlab: xyz_to_hunterlab(xyz),
        }
    }

    /// Build from a Hunter Lab triplet
    pub fn from_hunterlab(hlab: [f64; 3]) -> Self {
        let xyz = hunterlab_to_xyz(hlab);
        let rgb = xyz_to_rgb(xyz);
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            xyz,
            cielab: xyz_to_cielab(xyz),
            hunterlab: hlab,
        }
    }

    /// Build from a hexadecimal color string (`#RRGGBB` or `RRGGBB`)
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidHex`] for malformed input.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Self::from_rgb(hex_to_rgb(hex)?))
    }
}
