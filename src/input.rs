//! Keyboard dispatch for view rotation.
//!
//! [`InputDispatcher`] owns the [`ViewState`] and translates bound keys into
//! rotation deltas: `W`/`S` tilt (elevation up/down), `A`/`D` rotate (azimuth
//! left/right). Each press moves the view by a fixed number of degrees;
//! holding a key does not repeat.

use bevy::prelude::*;

use crate::view::ViewState;

/// Degrees of rotation per key press.
pub const DEFAULT_STEP_DEGREES: f32 = 5.0;

/// Keys the dispatcher responds to, in the order simultaneous presses are
/// applied within one frame.
pub const BOUND_KEYS: [KeyCode; 4] = [
    KeyCode::KeyW,
    KeyCode::KeyS,
    KeyCode::KeyA,
    KeyCode::KeyD,
];

/// Owns the view orientation and maps key presses onto it.
#[derive(Resource, Debug)]
pub struct InputDispatcher {
    view: ViewState,
    step_degrees: f32,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

impl InputDispatcher {
    /// Creates a dispatcher starting from the given orientation.
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            step_degrees: DEFAULT_STEP_DEGREES,
        }
    }

    /// Overrides the per-press rotation step.
    ///
    /// Clamped to be non-negative; a step of `0.0` leaves bound keys inert.
    pub fn with_step_degrees(mut self, step_degrees: f32) -> Self {
        self.step_degrees = step_degrees.max(0.0);
        self
    }

    /// The current view orientation.
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The per-press rotation step in degrees.
    pub fn step_degrees(&self) -> f32 {
        self.step_degrees
    }

    /// Applies one key press to the view.
    ///
    /// Returns the new `(elevation, azimuth)` for a bound key, `None` for any
    /// other key (the view is untouched).
    pub fn dispatch(&mut self, key: KeyCode) -> Option<(f32, f32)> {
        let step = self.step_degrees;
        let (delta_elevation, delta_azimuth) = match key {
            KeyCode::KeyW => (step, 0.0),
            KeyCode::KeyS => (-step, 0.0),
            KeyCode::KeyA => (0.0, -step),
            KeyCode::KeyD => (0.0, step),
            _ => return None,
        };
        Some(self.view.apply(delta_elevation, delta_azimuth))
    }
}

/// Bevy system that feeds just-pressed bound keys into the dispatcher.
///
/// Iterates [`BOUND_KEYS`] in declaration order so simultaneous presses in a
/// single frame resolve the same way every run. The dispatcher resource is
/// only touched when a bound key fired, which keeps change detection quiet on
/// idle frames.
pub fn handle_view_keys(keys: Res<ButtonInput<KeyCode>>, mut dispatcher: ResMut<InputDispatcher>) {
    for key in BOUND_KEYS {
        if keys.just_pressed(key) {
            dispatcher.dispatch(key);
        }
    }
}
