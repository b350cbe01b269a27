//! Orientation state for the relief camera.
//!
//! [`ViewState`] holds the two orbit angles (elevation and azimuth, in
//! degrees) and is the single place rotation deltas are applied. Elevation is
//! hard-clamped to straight-down/straight-up; azimuth accumulates without
//! bound because the orbit is 360-periodic and wrapping would be unobservable.

/// Lowest allowed elevation angle, looking straight up from below the surface.
pub const ELEVATION_MIN: f32 = -90.0;

/// Highest allowed elevation angle, looking straight down from above.
pub const ELEVATION_MAX: f32 = 90.0;

/// Camera orbit angles in degrees.
///
/// `elevation` is the angle above the ground plane, clamped to
/// `[ELEVATION_MIN, ELEVATION_MAX]`. `azimuth` is the rotation around the
/// vertical axis and is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    elevation: f32,
    azimuth: f32,
}

impl Default for ViewState {
    /// Three-quarter view: 45° above the surface, rotated 45° around it.
    fn default() -> Self {
        Self {
            elevation: 45.0,
            azimuth: 45.0,
        }
    }
}

impl ViewState {
    /// Creates a view state from explicit angles. Elevation is clamped.
    pub fn new(elevation: f32, azimuth: f32) -> Self {
        Self {
            elevation: elevation.clamp(ELEVATION_MIN, ELEVATION_MAX),
            azimuth,
        }
    }

    /// Current elevation angle in degrees.
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Current azimuth angle in degrees. May lie outside `[0, 360)`.
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Applies rotation deltas and returns the resulting `(elevation, azimuth)`.
    ///
    /// Elevation saturates at the poles; further deltas in the same direction
    /// are absorbed. Azimuth accumulates freely.
    pub fn apply(&mut self, delta_elevation: f32, delta_azimuth: f32) -> (f32, f32) {
        self.elevation = (self.elevation + delta_elevation).clamp(ELEVATION_MIN, ELEVATION_MAX);
        self.azimuth += delta_azimuth;
        (self.elevation, self.azimuth)
    }
}
