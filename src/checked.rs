//! Opt-in validating wrappers around the core conversions
//!
//! The core functions in [`convert`](crate::convert) deliberately let
//! out-of-domain inputs propagate as NaN or infinity. Callers that would
//! rather see a distinguishable error can use this module: each wrapper
//! runs the corresponding core conversion and returns
//! [`ConversionError::NonFinite`](crate::ConversionError::NonFinite) if any
//! output component is NaN or infinite. The math itself is untouched, so
//! `Ok` results are bit-identical to the unchecked ones.

use crate::convert;
use crate::error::{ConversionError, Result};

fn ensure_finite(space: &'static str, value: [f64; 3]) -> Result<[f64; 3]> {
    if value.iter().all(|c| c.is_finite()) {
        Ok(value)
    } else {
        Err(ConversionError::non_finite(space, value))
    }
}

/// Checked [`convert::rgb_to_xyz`]
pub fn rgb_to_xyz(rgb: [f64; 3]) -> Result<[f64; 3]> {
    ensure_finite("XYZ", convert::rgb_to_xyz(rgb))
}

/// Checked [`convert::xyz_to_rgb`]
pub fn xyz_to_rgb(xyz: [f64; 3]) -> Result<[f64; 3]> {
    ensure_finite("RGB", convert::xyz_to_rgb(xyz))
}

/// Checked [`convert::xyz_to_cielab`]
pub fn xyz_to_cielab(xyz: [f64; 3]) -> Result<[f64; 3]> {
    ensure_finite("CIELAB", convert::xyz_to_cielab(xyz))
}

/// Checked [`convert::cielab_to_xyz`]
pub fn cielab_to_xyz(lab: [f64; 3]) -> Result<[f64; 3]> {
    ensure_finite("XYZ", convert::cielab_to_xyz(lab))
}

/// Checked [`convert::xyz_to_hunterlab`]
pub fn xyz_to_hunterlab(xyz: [f64; 3]) -> Result<[f64; 3]> {
    ensure_finite("Hunter Lab", convert::xyz_to_hunterlab(xyz))
}

/// Checked [`convert::hunterlab_to_xyz`]
pub fn hunterlab_to_xyz(hlab: [f64; 3]) -> Result<[f64; 3]> {
    ensure_finite("XYZ", convert::hunterlab_to_xyz(hlab))
}

/// Checked [`convert::cielab_to_hunterlab`]
pub fn cielab_to_hunterlab(lab: [f64; 3]) -> Result<[f64; 3]> {
    ensure_finite("Hunter Lab", convert::cielab_to_hunterlab(lab))
}

/// Checked [`convert::hunterlab_to_cielab`]
pub fn hunterlab_to_cielab(hlab: [f64; 3]) -> Result<[f64; 3]> {
    ensure_finite("CIELAB", convert::hunterlab_to_cielab(hlab))
}

/// Checked [`convert::rgb_to_hunterlab`]
pub fn rgb_to_hunterlab(rgb: [f64; 3]) -> Result<[f64; 3]> {
    ensure_finite("Hunter Lab", convert::rgb_to_hunterlab(rgb))
}

/// Checked [`convert::hunterlab_to_rgb`]
pub fn hunterlab_to_rgb(hlab: [f64; 3]) -> Result<[f64; 3]> {
    ensure_finite("RGB", convert::hunterlab_to_rgb(hlab))
}
