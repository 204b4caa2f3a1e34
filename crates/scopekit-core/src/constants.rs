//! Engine-wide constants.
//!
//! Validation bounds for the calibration procedure and defaults for the
//! interactive tools. All pixel quantities are in original-image pixel space.

/// Minimum length of a calibration reference line, in original-image pixels.
/// Shorter references amplify operator pointing error too much to be usable.
pub const MIN_REFERENCE_PIXELS: f64 = 10.0;

/// Lower bound of a plausible derived calibration factor (pixels per unit).
pub const MIN_PIXELS_PER_UNIT: f64 = 0.01;

/// Upper bound of a plausible derived calibration factor (pixels per unit).
pub const MAX_PIXELS_PER_UNIT: f64 = 100.0;

/// Default eraser radius, in original-image pixels.
pub const DEFAULT_ERASER_RADIUS: f64 = 8.0;

/// Minimum number of points for an open curve commit.
pub const MIN_CURVE_POINTS: usize = 2;

/// Minimum number of points for a closed curve commit (before ring closure).
pub const MIN_CLOSED_CURVE_POINTS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_bounds_ordered() {
        assert!(MIN_PIXELS_PER_UNIT > 0.0);
        assert!(MIN_PIXELS_PER_UNIT < MAX_PIXELS_PER_UNIT);
    }
}
