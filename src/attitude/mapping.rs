// src/attitude/mapping.rs

//! # Thrust to Attitude Mapping
//!
//! A multicopter can only produce thrust along its body Z axis, so a desired
//! thrust vector fixes two of the three rotational degrees of freedom. The
//! functions in this module build the full orientation from that direction
//! and a desired yaw.
//!
//! The body X axis is chosen perpendicular to the horizontal direction
//! `(-sin yaw, cos yaw, 0)`, which points 90 degrees to the right of the
//! desired heading. With the roll, then pitch, then yaw Euler decomposition
//! this means:
//!
//! - any thrust that is not horizontal reports exactly the requested yaw,
//!   including tilted and partially inverted thrust,
//! - thrust pointing exactly down reports a roll of π and the requested yaw
//!   mirrored (yaw π/2 reads as -π/2).

use crate::logging::trace;
use crate::{AttitudeSetpoint, Number};
use nalgebra::{Matrix3, Quaternion, Rotation3, UnitQuaternion, Vector3};

/// Below this vertical component the thrust counts as horizontal.
const HORIZONTAL_THRESHOLD: f64 = 1e-6;

/// Maps a desired thrust vector and yaw onto an attitude setpoint.
///
/// The resulting body Z axis points opposite to `thrust`, so an upward
/// thrust in NED (negative Z) yields a level vehicle. The body thrust is
/// `(0, 0, -|thrust|)`.
///
/// A zero thrust vector has no direction. The setpoint then falls back to a
/// level attitude at the requested yaw with zero thrust.
///
/// Example Usage
/// ```
/// use mc_control_math::thrust_to_attitude;
/// use nalgebra::Vector3;
///
/// // hover thrust, nose east
/// let setpoint = thrust_to_attitude(&Vector3::new(0.0, 0.0, -0.5), core::f32::consts::FRAC_PI_2);
///
/// assert!(setpoint.roll.abs() < 1e-6);
/// assert!(setpoint.pitch.abs() < 1e-6);
/// assert!((setpoint.yaw - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// assert!((setpoint.thrust_body.z + 0.5).abs() < 1e-6);
/// ```
pub fn thrust_to_attitude<T: Number>(thrust: &Vector3<T>, yaw: T) -> AttitudeSetpoint<T> {
    let mut setpoint = bodyz_to_attitude(&-thrust, yaw);
    setpoint.thrust_body.z = -thrust.norm();
    setpoint
}

/// Maps a desired body Z axis and yaw onto an attitude setpoint.
///
/// `body_z` does not need to be normalized. A vector with a squared norm
/// below machine epsilon is replaced by world Z, which gives a level
/// attitude. The body thrust of the returned setpoint is zero.
pub fn bodyz_to_attitude<T: Number>(body_z: &Vector3<T>, yaw: T) -> AttitudeSetpoint<T> {
    // zero vector, no direction, set safe level value
    let body_z = if body_z.norm_squared() < T::default_epsilon() {
        trace!("bodyz_to_attitude: zero body axis, using level attitude");
        Vector3::z()
    } else {
        body_z.normalize()
    };

    let attitude = if body_z.x == T::zero() && body_z.y == T::zero() && body_z.z < T::zero() {
        inverted_attitude(yaw)
    } else {
        // vector of desired yaw direction in XY plane, rotated by PI/2
        let y_c = Vector3::new(-yaw.sin(), yaw.cos(), T::zero());

        // desired body_x axis, orthogonal to body_z
        let mut body_x = y_c.cross(&body_z);

        // keep nose to front while inverted upside down
        if body_z.z < T::zero() {
            body_x = -body_x;
        }

        if body_z.z.abs() < T::constant(HORIZONTAL_THRESHOLD) {
            // thrust in the XY plane, yaw has no effect: point body_x down
            trace!("bodyz_to_attitude: horizontal body axis, yaw unused");
            body_x = Vector3::z();
        }

        let body_x = body_x.normalize();
        let body_y = body_z.cross(&body_x);

        let rotation = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[body_x, body_y, body_z]));
        UnitQuaternion::from_rotation_matrix(&rotation)
    };

    AttitudeSetpoint::from_attitude(attitude, Vector3::zeros())
}

/// Attitude for a body Z axis pointing exactly up: yaw about world Z, then
/// a half turn about X.
fn inverted_attitude<T: Number>(yaw: T) -> UnitQuaternion<T> {
    trace!("bodyz_to_attitude: inverted body axis, rolling about X");
    let half_turn = UnitQuaternion::new_unchecked(Quaternion::new(T::zero(), T::one(), T::zero(), T::zero()));
    half_turn * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), yaw)
}
