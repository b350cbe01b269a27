//! Orbit camera placement from view angles.
//!
//! The camera circles a fixed focus point at a fixed distance; only the two
//! [`ViewState`] angles change at runtime. [`sync_camera`] rewrites the camera
//! transform whenever the dispatcher resource changes, so idle frames leave
//! the transform untouched.

use bevy::prelude::*;

use crate::heightfield::HeightField;
use crate::input::InputDispatcher;
use crate::view::ViewState;

/// Margin applied to the footprint diagonal when framing a surface.
const FRAMING_DISTANCE_FACTOR: f32 = 1.4;

/// The point the camera orbits and its distance from it.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitRig {
    /// World point the camera looks at.
    pub focus: Vec3,
    /// Distance from focus to camera.
    pub distance: f32,
}

impl OrbitRig {
    /// Rig that frames a surface built from `field` at the given height scale.
    ///
    /// Focus sits at the center of the grid footprint, halfway up the actual
    /// intensity range; distance scales with the footprint diagonal so the
    /// whole surface stays in view at any orientation.
    pub fn framing(field: &HeightField, height_scale: f32) -> Self {
        let w = field.cols().saturating_sub(1) as f32;
        let d = field.rows().saturating_sub(1) as f32;
        let (lo, hi) = field.intensity_range();
        let mid = (lo as f32 + hi as f32) / (2.0 * 255.0) * height_scale;
        Self {
            focus: Vec3::new(w / 2.0, mid, d / 2.0),
            distance: (w * w + d * d).sqrt().max(1.0) * FRAMING_DISTANCE_FACTOR,
        }
    }
}

/// Converts orbit angles into a camera transform around the rig focus.
///
/// Spherical to cartesian: elevation lifts the camera out of the ground
/// plane, azimuth swings it around the vertical axis. At elevation ±90 the
/// look direction is parallel to the up vector; `looking_at` falls back to an
/// arbitrary orthonormal roll there, which is stable frame to frame.
pub fn orbit_transform(rig: &OrbitRig, view: &ViewState) -> Transform {
    let elevation = view.elevation().to_radians();
    let azimuth = view.azimuth().to_radians();
    let offset = Vec3::new(
        elevation.cos() * azimuth.cos(),
        elevation.sin(),
        elevation.cos() * azimuth.sin(),
    ) * rig.distance;
    Transform::from_translation(rig.focus + offset).looking_at(rig.focus, Vec3::Y)
}

/// Bevy system that re-places the camera when the view orientation changed.
pub fn sync_camera(
    dispatcher: Res<InputDispatcher>,
    rig: Res<OrbitRig>,
    mut camera: Query<&mut Transform, With<Camera3d>>,
) {
    if !dispatcher.is_changed() {
        return;
    }
    let Ok(mut transform) = camera.single_mut() else {
        return;
    };
    *transform = orbit_transform(&rig, &dispatcher.view());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> OrbitRig {
        OrbitRig {
            focus: Vec3::ZERO,
            distance: 10.0,
        }
    }

    #[test]
    fn zero_angles_place_camera_on_x_axis() {
        let t = orbit_transform(&rig(), &ViewState::new(0.0, 0.0));
        assert!((t.translation - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn pole_elevations_sit_on_the_vertical_axis() {
        let above = orbit_transform(&rig(), &ViewState::new(90.0, 0.0));
        assert!((above.translation - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-3);
        assert!(
            above.rotation.is_finite(),
            "pole orientation must not degenerate"
        );

        let below = orbit_transform(&rig(), &ViewState::new(-90.0, 0.0));
        assert!((below.translation - Vec3::new(0.0, -10.0, 0.0)).length() < 1e-3);
        assert!(below.rotation.is_finite());
    }

    #[test]
    fn camera_faces_focus_at_fixed_distance() {
        let rig = OrbitRig {
            focus: Vec3::new(3.0, 1.0, -2.0),
            distance: 25.0,
        };
        let view = ViewState::new(30.0, 120.0);
        let t = orbit_transform(&rig, &view);
        let toward_focus = (rig.focus - t.translation).normalize();
        assert!((*t.forward() - toward_focus).length() < 1e-3);
        assert!((t.translation.distance(rig.focus) - 25.0).abs() < 1e-3);
    }

    #[test]
    fn azimuth_is_periodic_in_camera_space() {
        let a = orbit_transform(&rig(), &ViewState::new(45.0, 30.0));
        let b = orbit_transform(&rig(), &ViewState::new(45.0, 390.0));
        assert!((a.translation - b.translation).length() < 1e-3);
    }

    #[test]
    fn framing_centers_on_footprint() {
        let field = HeightField::from_raw(vec![128; 16], 4, 4);
        let rig = OrbitRig::framing(&field, 1.2);
        assert!((rig.focus.x - 1.5).abs() < 1e-6);
        assert!((rig.focus.z - 1.5).abs() < 1e-6);
        // Flat field: focus height is the plane height itself.
        assert!((rig.focus.y - 128.0 / 255.0 * 1.2).abs() < 1e-5);
        assert!(rig.distance > 3.0, "distance must exceed the diagonal");
    }
}
