// src/attitude/tilt.rs

//! Tilt limiting of a desired body axis.

use crate::logging::{debug, trace};
use crate::Number;
use nalgebra::Vector3;

/// Limits the angle between two unit vectors.
///
/// Returns `body_unit` rotated toward `world_unit` within the plane spanned
/// by both, such that the angle between the result and `world_unit` is at
/// most `max_angle`. Typically `world_unit` is world Z and `body_unit` the
/// desired body Z axis, which bounds the tilt of the vehicle.
///
/// If the vectors are parallel the tilt direction is undefined and world X
/// is used instead.
pub fn limit_tilt<T: Number>(body_unit: &Vector3<T>, world_unit: &Vector3<T>, max_angle: T) -> Vector3<T> {
    // determine tilt
    let dot_product_unit = body_unit.dot(world_unit);
    let angle = dot_product_unit.clamp(-T::one(), T::one()).acos();

    let angle = if angle > max_angle {
        debug!("limit_tilt: tilt limited");
        max_angle
    } else {
        angle
    };

    let mut rejection = body_unit - world_unit * dot_product_unit;

    // corner case exactly parallel vectors
    if rejection.norm_squared() < T::default_epsilon() {
        trace!("limit_tilt: parallel vectors, tilting along X");
        rejection = Vector3::x();
    }

    world_unit * angle.cos() + rejection.normalize() * angle.sin()
}
