//! Color space conversion functions
//!
//! Pairwise and composed conversions between sRGB, CIE XYZ, CIE L*a*b*
//! and Hunter Lab. XYZ is the hub: every conversion not directly to or
//! from XYZ is defined as a composition through it.
//!
//! All functions are pure and total over `[f64; 3]`. Inputs are not
//! validated or clamped: out-of-gamut XYZ yields out-of-[0,255] RGB, and
//! inputs outside a formula's mathematical domain (negative or zero Y under
//! the Hunter Lab square root) propagate as NaN or infinity rather than
//! raising an error. Use the [`checked`](crate::checked) module
//! when non-finite results should surface as errors.

use crate::constants::{cielab, hunter, srgb, white_point};
use crate::error::{ConversionError, Result};

/// Fixed-size 3×3 matrix-vector multiply
#[inline]
fn mat_mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// sRGB decoding: gamma-encoded channel in [0,1] to linear light
#[inline]
fn srgb_decode(c: f64) -> f64 {
    if c > srgb::DECODE_THRESHOLD {
        ((c + srgb::GAMMA_OFFSET) / srgb::GAMMA_SCALE).powf(srgb::GAMMA)
    } else {
        c / srgb::LINEAR_SLOPE
    }
}

/// sRGB encoding: linear light to gamma-encoded channel in [0,1]
#[inline]
fn srgb_encode(c: f64) -> f64 {
    if c > srgb::ENCODE_THRESHOLD {
        srgb::GAMMA_SCALE * c.powf(1.0 / srgb::GAMMA) - srgb::GAMMA_OFFSET
    } else {
        srgb::LINEAR_SLOPE * c
    }
}

/// CIE 1976 forward nonlinearity f(t)
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > cielab::EPSILON {
        t.cbrt()
    } else {
        cielab::KAPPA * t + cielab::OFFSET
    }
}

/// CIE 1976 inverse nonlinearity f⁻¹(t)
///
/// The branch condition tests the *cube* of the intermediate value against
/// the CIE threshold rather than the raw value. This matches the behavior
/// existing callers depend on and is pinned by
/// `test_cielab_inverse_threshold_uses_cubed_value` in the integration tests.
/// Since cubing is monotonic the two tests select the same branch for the
/// outputs `lab_f` can produce, so round-trips are unaffected.
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    if t * t * t > cielab::EPSILON {
        t * t * t
    } else {
        (t - cielab::OFFSET) / cielab::KAPPA
    }
}

/// Convert sRGB (0-255 per channel) to CIE XYZ (0-100 scale)
///
/// Channels are normalized to [0,1], inverse-gamma-corrected with the sRGB
/// piecewise companding function, scaled by 100 and combined through the
/// fixed sRGB-to-XYZ matrix. Inputs outside [0,255] are accepted as-is.
pub fn rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let linear = [
        srgb_decode(rgb[0] / 255.0) * 100.0,
        srgb_decode(rgb[1] / 255.0) * 100.0,
        srgb_decode(rgb[2] / 255.0) * 100.0,
    ];
    mat_mul(&srgb::RGB_TO_XYZ, linear)
}

/// Convert CIE XYZ (0-100 scale) to sRGB (0-255 per channel)
///
/// Out-of-gamut XYZ produces channel values outside [0,255]; no clamping
/// is applied.
pub fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    let scaled = [xyz[0] / 100.0, xyz[1] / 100.0, xyz[2] / 100.0];
    let linear = mat_mul(&srgb::XYZ_TO_RGB, scaled);
    [
        srgb_encode(linear[0]) * 255.0,
        srgb_encode(linear[1]) * 255.0,
        srgb_encode(linear[2]) * 255.0,
    ]
}

/// Convert CIE XYZ to CIE L*a*b* relative to the fixed reference white
pub fn xyz_to_cielab(xyz: [f64; 3]) -> [f64; 3] {
    let fx = lab_f(xyz[0] / white_point::X);
    let fy = lab_f(xyz[1] / white_point::Y);
    let fz = lab_f(xyz[2] / white_point::Z);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIE L*a*b* to CIE XYZ relative to the fixed reference white
pub fn cielab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = lab[1] / 500.0 + fy;
    let fz = fy - lab[2] / 200.0;

    [
        lab_f_inv(fx) * white_point::X,
        lab_f_inv(fy) * white_point::Y,
        lab_f_inv(fz) * white_point::Z,
    ]
}

/// Convert CIE XYZ to Hunter Lab relative to the fixed reference white
///
/// Hunter Lab is singular at black: when Y = 0 the chromaticity terms
/// divide by `sqrt(0)`, so `a` and `b` come out non-finite. The formula is
/// applied literally; no special case is made.
pub fn xyz_to_hunterlab(xyz: [f64; 3]) -> [f64; 3] {
    let rx = xyz[0] / white_point::X;
    let ry = xyz[1] / white_point::Y;
    let rz = xyz[2] / white_point::Z;
    let root = ry.sqrt();

    [
        100.0 * root,
        hunter::KA * ((rx - ry) / root),
        hunter::KB * ((ry - rz) / root),
    ]
}

/// Convert Hunter Lab to CIE XYZ relative to the fixed reference white
pub fn hunterlab_to_xyz(hlab: [f64; 3]) -> [f64; 3] {
    let y = (hlab[0] / white_point::Y).powi(2) * 100.0;
    let ry = y / white_point::Y;
    let root = ry.sqrt();

    [
        (hlab[1] / hunter::KA * root + ry) * white_point::X,
        y,
        -(hlab[2] / hunter::KB * root - ry) * white_point::Z,
    ]
}

/// Convert CIE L*a*b* to Hunter Lab (through XYZ)
pub fn cielab_to_hunterlab(lab: [f64; 3]) -> [f64; 3] {
    xyz_to_hunterlab(cielab_to_xyz(lab))
}

/// Convert Hunter Lab to CIE L*a*b* (through XYZ)
pub fn hunterlab_to_cielab(hlab: [f64; 3]) -> [f64; 3] {
    xyz_to_cielab(hunterlab_to_xyz(hlab))
}

/// Convert sRGB to Hunter Lab (through XYZ)
pub fn rgb_to_hunterlab(rgb: [f64; 3]) -> [f64; 3] {
    xyz_to_hunterlab(rgb_to_xyz(rgb))
}

/// Convert Hunter Lab to sRGB (through XYZ)
pub fn hunterlab_to_rgb(hlab: [f64; 3]) -> [f64; 3] {
    xyz_to_rgb(hunterlab_to_xyz(hlab))
}

/// Convert sRGB (0-255 per channel) to a hexadecimal color string
///
/// Channels are rounded and clamped to [0,255] for display; the core
/// conversions themselves never clamp.
pub fn rgb_to_hex(rgb: [f64; 3]) -> String {
    let r = rgb[0].round().clamp(0.0, 255.0) as u8;
    let g = rgb[1].round().clamp(0.0, 255.0) as u8;
    let b = rgb[2].round().clamp(0.0, 255.0) as u8;
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Parse a hexadecimal color string into an sRGB triplet (0-255 per channel)
///
/// Accepts `#RRGGBB` or `RRGGBB`.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidHex`] if the string is not six hex
/// digits after the optional `#`.
pub fn hex_to_rgb(hex: &str) -> Result<[f64; 3]> {
    let hex = hex.trim_start_matches('#');
    // Length is in bytes; rejecting non-ASCII up front keeps the digit-pair
    // slices below on char boundaries.
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ConversionError::invalid_hex(format!(
            "expected 6 hex digits, got {:?}",
            hex
        )));
    }

    let r = u8::from_str_radix(&hex[0..2], 16)
        .map_err(|e| ConversionError::invalid_hex(format!("invalid red value: {e}")))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .map_err(|e| ConversionError::invalid_hex(format!("invalid green value: {e}")))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .map_err(|e| ConversionError::invalid_hex(format!("invalid blue value: {e}")))?;

    Ok([r as f64, g as f64, b as f64])
}
