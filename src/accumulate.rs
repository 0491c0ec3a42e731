// src/accumulate.rs

//! # Setpoint Accumulation Module
//!
//! Setpoints are often assembled from several optional contributions, for
//! example a position feedback term and a velocity feedforward term. An unset
//! contribution is represented as NaN. The functions in this module sum such
//! contributions so that NaN means "no contribution" instead of poisoning the
//! result.
//!
//! [`add_if_some`] provides the same semantics with an explicit `Option`.
//!
//! The NaN helpers are bounded on `num_traits::Float` rather than [`Number`]
//! because `RealField` has no `is_nan`.
//!
//! [`Number`]: crate::Number

use core::ops::Add;
use nalgebra::{Scalar, Vector3};
use num_traits::Float;

/// Adds `addition` to `setpoint`, treating NaN as unset.
///
/// - `addition` NaN: `setpoint` is unchanged.
/// - `setpoint` NaN: `setpoint` is overwritten by `addition`.
/// - otherwise: ordinary addition.
///
/// Example Usage
/// ```
/// use mc_control_math::add_if_not_nan;
///
/// let mut thrust = f32::NAN;
/// add_if_not_nan(&mut thrust, f32::NAN);
/// assert!(thrust.is_nan());
///
/// add_if_not_nan(&mut thrust, 3.0);
/// add_if_not_nan(&mut thrust, 1.5);
/// assert_eq!(4.5, thrust);
/// ```
pub fn add_if_not_nan<T: Float>(setpoint: &mut T, addition: T) {
    if addition.is_nan() {
        return;
    }

    if setpoint.is_nan() {
        // regular value overwrites the unset one
        *setpoint = addition;
    } else {
        *setpoint = *setpoint + addition;
    }
}

/// Component-wise [`add_if_not_nan`] on 3D vectors.
pub fn add_if_not_nan_vector3<T: Float + Scalar>(setpoint: &mut Vector3<T>, addition: &Vector3<T>) {
    for (value, add) in setpoint.iter_mut().zip(addition.iter()) {
        add_if_not_nan(value, *add);
    }
}

/// Replaces NaN components with zero.
pub fn set_zero_if_nan_vector3<T: Float + Scalar>(vector: &mut Vector3<T>) {
    // adding a zero vector overwrites NaN elements with zero
    add_if_not_nan_vector3(vector, &Vector3::from_element(T::zero()));
}

/// Adds an optional contribution to an optional setpoint.
///
/// `None` plays the role NaN plays in [`add_if_not_nan`]: an absent
/// `addition` changes nothing and the first present value initializes an
/// absent `setpoint`.
pub fn add_if_some<T: Add<Output = T> + Copy>(setpoint: &mut Option<T>, addition: Option<T>) {
    if let Some(addition) = addition {
        *setpoint = Some(match *setpoint {
            Some(value) => value + addition,
            None => addition,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_add_if_not_nan_sequence() {
        let mut v = 1.0f32;
        // regular addition
        add_if_not_nan(&mut v, 2.0);
        assert_eq!(3.0, v);
        // addition is NaN and has no influence
        add_if_not_nan(&mut v, f32::NAN);
        assert_eq!(3.0, v);
        v = f32::NAN;
        // both summands are NaN
        add_if_not_nan(&mut v, f32::NAN);
        assert!(v.is_nan());
        // regular value gets added to NaN and overwrites it
        add_if_not_nan(&mut v, 3.0);
        assert_eq!(3.0, v);
    }

    #[test]
    fn test_add_if_not_nan_vector3() {
        let mut setpoint = Vector3::new(1.0f32, f32::NAN, f32::NAN);
        add_if_not_nan_vector3(&mut setpoint, &Vector3::new(f32::NAN, 2.0, f32::NAN));
        assert_eq!(1.0, setpoint.x);
        assert_eq!(2.0, setpoint.y);
        assert!(setpoint.z.is_nan());

        add_if_not_nan_vector3(&mut setpoint, &Vector3::new(0.5, 0.5, 0.5));
        assert!(vector3_close(&Vector3::new(1.5, 2.5, 0.5), &setpoint));
    }

    #[test]
    fn test_set_zero_if_nan_vector3() {
        let mut v = Vector3::new(f32::NAN, -1.0, f32::NAN);
        set_zero_if_nan_vector3(&mut v);
        assert_eq!(Vector3::new(0.0, -1.0, 0.0), v);
    }

    #[test]
    fn test_add_if_not_nan_f64() {
        let mut v = f64::NAN;
        add_if_not_nan(&mut v, 0.25);
        add_if_not_nan(&mut v, f64::NAN);
        add_if_not_nan(&mut v, 0.5);
        assert_eq!(0.75, v);

        let mut setpoint = Vector3::new(f64::NAN, 1.0, f64::NAN);
        set_zero_if_nan_vector3(&mut setpoint);
        assert_eq!(Vector3::new(0.0, 1.0, 0.0), setpoint);
    }

    #[test]
    fn test_add_if_some() {
        let mut v: Option<f32> = None;
        add_if_some(&mut v, None);
        assert_eq!(None, v);
        add_if_some(&mut v, Some(3.0));
        assert_eq!(Some(3.0), v);
        add_if_some(&mut v, None);
        assert_eq!(Some(3.0), v);
        add_if_some(&mut v, Some(1.0));
        assert_eq!(Some(4.0), v);
    }
}
