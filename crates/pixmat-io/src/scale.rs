//! Intensity scaling between real-valued and integer matrices
//!
//! Prepares real-valued sample matrices for image writing and converts
//! decoded integer images back to real intensities. Both directions are
//! pure affine maps with no file I/O.

use pixmat_core::{DMat, IMat};

/// Convert a real-valued matrix to an integer matrix
///
/// Each element is clamped to `[double_min, double_max]`, then mapped
/// linearly so that `double_min` becomes 0 and `double_max` becomes
/// `max_val`, rounding to the nearest integer. The customary arguments
/// are `(255, 0.0, 1.0)`.
///
/// `double_min` must be strictly less than `double_max` and `max_val`
/// must be positive; this function does not validate either.
pub fn scale_to_int(m: &DMat, max_val: i32, double_min: f64, double_max: f64) -> IMat {
    let scale = max_val as f64 / (double_max - double_min);
    m.map(|val| {
        let val = val.clamp(double_min, double_max);
        ((val - double_min) * scale + 0.5) as i32
    })
}

/// Convert an integer matrix to a real-valued matrix
///
/// Exact inverse affine map of [`scale_to_int`]: 0 becomes `double_min`
/// and `max_val` becomes `double_max`. No clamping is applied since
/// integer inputs are already bounded by their own value range. The
/// customary arguments are `(255, 0.0, 1.0)`.
pub fn scale_to_real(m: &IMat, max_val: i32, double_min: f64, double_max: f64) -> DMat {
    let step = (double_max - double_min) / max_val as f64;
    m.map(|val| double_min + val as f64 * step)
}
