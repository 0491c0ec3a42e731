// src/test_utils.rs

//! This module contains utilities for testing.

use crate::AttitudeSetpoint;
use nalgebra::{Vector2, Vector3};

/// A constant defining the tolerance within which floating-point values
/// are considered close enough to be equal.
pub const TEST_TOLERANCE: f32 = 1e-5;

/// Checks if two floating point numbers are close enough to be considered
/// equal.
///
/// # Arguments
/// * `target` - The target value.
/// * `value` - The value to compare against the target.
///
/// # Returns
/// `true` if the absolute difference between `target` and `value` is less than
/// `TEST_TOLERANCE`, otherwise `false`.
pub fn value_close(target: f32, value: f32) -> bool {
    (target - value).abs() < TEST_TOLERANCE
}

/// Checks if each of the components in a 2D vector is close enough to
/// be considered equal.
pub fn vector2_close(target: &Vector2<f32>, value: &Vector2<f32>) -> bool {
    value_close(target.x, value.x) && value_close(target.y, value.y)
}

/// Checks if each of the components in a 3D vector is close enough to
/// be considered equal.
///
/// # Arguments
/// * `target` - The target vector.
/// * `value` - The vector to compare against the target.
///
/// # Returns
/// `true` if each component of `target` and `value` is close as per `value_close`,
/// otherwise `false`.
pub fn vector3_close(target: &Vector3<f32>, value: &Vector3<f32>) -> bool {
    value_close(target.x, value.x) && value_close(target.y, value.y) && value_close(target.z, value.z)
}

/// Checks the roll, pitch and yaw of a setpoint against a target tuple.
pub fn euler_close(target: (f32, f32, f32), setpoint: &AttitudeSetpoint<f32>) -> bool {
    value_close(target.0, setpoint.roll)
        && value_close(target.1, setpoint.pitch)
        && value_close(target.2, setpoint.yaw)
}
