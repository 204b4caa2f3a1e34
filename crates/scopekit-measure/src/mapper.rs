//! Pixel-to-physical conversion.
//!
//! The mapper divides original-image pixel quantities by the active
//! calibration factor. It contains no display-scale term: any display
//! correction happens once, in [`crate::viewport`], before geometry is
//! stored. Feeding display-scaled distances in here is a caller bug.
//!
//! Without an active calibration, conversions fail closed and return the
//! pixel value unchanged; the caller must label such results as pixels.

use scopekit_core::ActiveCalibration;

/// Convert a pixel distance to physical units.
pub fn to_physical(pixel_distance: f64, calibration: Option<&ActiveCalibration>) -> f64 {
    match calibration {
        Some(cal) => pixel_distance / cal.pixels_per_unit(),
        None => pixel_distance,
    }
}

/// Convert a pixel area to physical square units.
pub fn to_physical_area(pixel_area: f64, calibration: Option<&ActiveCalibration>) -> f64 {
    match calibration {
        Some(cal) => pixel_area / (cal.pixels_per_unit() * cal.pixels_per_unit()),
        None => pixel_area,
    }
}
