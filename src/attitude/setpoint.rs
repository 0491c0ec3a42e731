// src/attitude/setpoint.rs

//! Attitude setpoint consumed by the attitude and rate controllers.

use crate::Number;
use nalgebra::{UnitQuaternion, Vector3};

/// Desired vehicle orientation plus desired collective thrust.
///
/// Frames follow the NED convention: world Z points down and positive
/// thrust along the body points up, so a hovering vehicle commands a
/// negative body Z thrust.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeSetpoint<T: Number> {
    /// Desired orientation, body to world.
    pub attitude: UnitQuaternion<T>,
    /// Roll angle of `attitude`, in (-π, π].
    pub roll: T,
    /// Pitch angle of `attitude`, in [-π/2, π/2].
    pub pitch: T,
    /// Yaw angle of `attitude`, in (-π, π].
    pub yaw: T,
    /// Thrust in the body frame. X and Y are always zero.
    pub thrust_body: Vector3<T>,
}

impl<T: Number> AttitudeSetpoint<T> {
    /// Builds a setpoint from an orientation, deriving the Euler angles.
    ///
    /// The angles use the roll, then pitch, then yaw decomposition
    /// `R = Rz(yaw) * Ry(pitch) * Rx(roll)`. Roll and yaw are reported in
    /// (-π, π] so an inverted attitude always reads as a roll of +π.
    pub fn from_attitude(attitude: UnitQuaternion<T>, thrust_body: Vector3<T>) -> Self {
        let (roll, pitch, yaw) = attitude.euler_angles();
        Self {
            attitude,
            roll: roll.wrap_pi(),
            pitch,
            yaw: yaw.wrap_pi(),
            thrust_body,
        }
    }

    /// The body Z axis expressed in the world frame.
    ///
    /// This is the third column of the rotation matrix of `attitude`.
    pub fn body_z(&self) -> Vector3<T> {
        self.attitude * Vector3::z()
    }

    /// Magnitude of the commanded collective thrust.
    pub fn collective_thrust(&self) -> T {
        -self.thrust_body.z
    }
}

impl<T: Number> Default for AttitudeSetpoint<T> {
    /// Level attitude, zero thrust.
    fn default() -> Self {
        Self {
            attitude: UnitQuaternion::identity(),
            roll: T::zero(),
            pitch: T::zero(),
            yaw: T::zero(),
            thrust_body: Vector3::zeros(),
        }
    }
}
