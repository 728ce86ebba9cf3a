//! Reference values and fixed coefficients for color space conversion
//!
//! This module contains compile-time constants for the conversion graph:
//! the reference white point, the sRGB companding parameters and matrices,
//! and the CIELAB / Hunter Lab nonlinearity coefficients.

/// Reference white point (10° observer)
///
/// Tristimulus values of the illuminant/observer combination against which
/// CIELAB and Hunter Lab are normalized. Fixed for the whole process; there
/// is deliberately no configuration path to vary it.
pub mod white_point {
    /// X component of the reference white
    pub const X: f64 = 95.047;

    /// Y component of the reference white
    pub const Y: f64 = 100.000;

    /// Z component of the reference white
    ///
    /// Kept at 108.88 (not the four-decimal 108.883) for bit-compatibility
    /// with existing callers.
    pub const Z: f64 = 108.88;

    /// Reference white in array form, matching conversion outputs
    pub const XYZ: [f64; 3] = [X, Y, Z];
}

/// sRGB companding parameters and linear transform matrices
pub mod srgb {
    /// Encoded-domain threshold between the linear and power segments
    pub const DECODE_THRESHOLD: f64 = 0.04045;

    /// Linear-domain threshold between the linear and power segments
    pub const ENCODE_THRESHOLD: f64 = 0.0031308;

    /// Slope of the linear segment near black
    pub const LINEAR_SLOPE: f64 = 12.92;

    /// Scale of the power segment
    pub const GAMMA_SCALE: f64 = 1.055;

    /// Offset of the power segment
    pub const GAMMA_OFFSET: f64 = 0.055;

    /// Exponent of the power segment
    pub const GAMMA: f64 = 2.4;

    /// Linear sRGB to XYZ matrix (XYZ scaled 0-100)
    pub const RGB_TO_XYZ: [[f64; 3]; 3] = [
        [0.4124, 0.3576, 0.1805],
        [0.2126, 0.7152, 0.0722],
        [0.0193, 0.1192, 0.9505],
    ];

    /// XYZ to linear sRGB matrix (inverse of [`RGB_TO_XYZ`])
    pub const XYZ_TO_RGB: [[f64; 3]; 3] = [
        [3.2406, -1.5372, -0.4986],
        [-0.9689, 1.8758, 0.0415],
        [0.0557, -0.2040, 1.0570],
    ];
}

/// CIE 1976 L*a*b* nonlinearity coefficients
pub mod cielab {
    /// Ratio threshold between the cube-root and linear segments (~(6/29)³)
    pub const EPSILON: f64 = 0.008856;

    /// Slope of the linear segment
    pub const KAPPA: f64 = 7.787;

    /// Offset of the linear segment (16/116)
    pub const OFFSET: f64 = 16.0 / 116.0;
}

/// Hunter Lab spectral weighting constants
///
/// `KA`/`KB` are pure functions of the reference white; since the white
/// point never changes at runtime they are folded at compile time.
pub mod hunter {
    use super::white_point;

    /// Red/green chromaticity weight
    pub const KA: f64 = (175.0 / 198.04) * (white_point::Y + white_point::X);

    /// Yellow/blue chromaticity weight
    pub const KB: f64 = (70.0 / 218.11) * (white_point::Y + white_point::Z);
}
