//! Radial colour picker geometry.
//!
//! Maps pointer positions on a circular control to hues and back. Angle 0 is
//! at the top of the wheel and angles grow clockwise, which is a 90-degree
//! rotation away from the mathematical convention atan2 uses; both mappings
//! apply that rotation so they stay exact inverses.

use crate::convert::hsl_to_rgb;
use crate::types::Rgb;

/// The selection indicator sits at this fraction of the wheel radius.
pub const INDICATOR_RADIUS_RATIO: f64 = 0.85;

/// Angular half-width of each gradient wedge, in degrees.
pub const WEDGE_HALF_WIDTH: f64 = 2.0;

/// Wheel angle (degrees, [0, 360), zero at top, clockwise) for a pointer
/// position relative to the wheel centre.
pub fn angle_from_pointer(pointer_x: f64, pointer_y: f64, centre_x: f64, centre_y: f64) -> f64 {
    let dx = pointer_x - centre_x;
    let dy = pointer_y - centre_y;

    let angle = dy.atan2(dx).to_degrees();
    let angle = (angle + 360.0) % 360.0;
    (angle + 90.0) % 360.0
}

/// Position on the wheel for an angle, at the given radius from the centre.
/// Exact inverse of [`angle_from_pointer`]: the 90-degree rotation is
/// removed before taking cos/sin.
pub fn pointer_position_from_angle(
    angle: f64,
    radius: f64,
    centre_x: f64,
    centre_y: f64,
) -> (f64, f64) {
    let rad = (angle - 90.0).to_radians();
    (centre_x + radius * rad.cos(), centre_y + radius * rad.sin())
}

/// Where to place the selection indicator for an angle on a wheel of the
/// given radius.
pub fn indicator_position(
    angle: f64,
    wheel_radius: f64,
    centre_x: f64,
    centre_y: f64,
) -> (f64, f64) {
    pointer_position_from_angle(angle, wheel_radius * INDICATOR_RADIUS_RATIO, centre_x, centre_y)
}

/// One angular wedge of the wheel gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    /// Hue at the wedge centre, integer degrees.
    pub hue: u16,
    /// Wedge start angle in degrees (hue - 2).
    pub start_deg: f64,
    /// Wedge end angle in degrees (hue + 2).
    pub end_deg: f64,
    /// Fill colour at the wheel's saturation and lightness.
    pub rgb: Rgb,
}

/// The full wheel gradient: one wedge per integer hue degree, 0-359, each
/// spanning [`WEDGE_HALF_WIDTH`] degrees either side of its centre so
/// neighbouring wedges overlap into a continuous gradient.
pub fn wheel_wedges(saturation: u8, lightness: u8) -> Vec<Wedge> {
    (0u16..360)
        .map(|hue| Wedge {
            hue,
            start_deg: hue as f64 - WEDGE_HALF_WIDTH,
            end_deg: hue as f64 + WEDGE_HALF_WIDTH,
            rgb: hsl_to_rgb(hue as f64, saturation as f64, lightness as f64),
        })
        .collect()
}
