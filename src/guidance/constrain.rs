// src/guidance/constrain.rs

//! Priority based magnitude limiting of two horizontal contributions.

use crate::logging::trace;
use crate::Number;
use nalgebra::Vector2;

/// Constrains the sum of two vectors to a maximum magnitude, giving `v0`
/// priority over `v1`.
///
/// - If `v0` alone reaches `max`, the result is `v0` scaled to `max` and `v1`
///   is dropped.
/// - If `v0 + v1` is within `max`, the result is the sum.
/// - Otherwise `v0` is kept and `v1` is shortened along its own direction
///   until the sum has magnitude `max`.
///
/// A magnitude equal to `max` counts as within the limit. A negative `max`
/// is treated as zero.
///
/// Example Usage
/// ```
/// use mc_control_math::constrain_xy;
/// use nalgebra::Vector2;
///
/// let v: Vector2<f32> = constrain_xy(&Vector2::new(4.0, 0.0), &Vector2::new(0.0, -4.0), 5.0);
///
/// assert!((v.x - 4.0).abs() < 1e-6);
/// assert!((v.y + 3.0).abs() < 1e-6);
/// ```
pub fn constrain_xy<T: Number>(v0: &Vector2<T>, v1: &Vector2<T>, max: T) -> Vector2<T> {
    let max = max.max(T::zero());
    let v0_length = v0.norm();

    if v0_length >= max {
        // the magnitude along v0, which has priority, already exceeds maximum
        if v0_length > T::zero() {
            return v0 * (max / v0_length);
        }
        return Vector2::zeros();
    }

    let sum = v0 + v1;
    if sum.norm() <= max {
        return sum;
    }

    // |v1| > max - |v0| > 0 from here on
    let u1 = v1.normalize();

    if v0_length == T::zero() {
        trace!("constrain_xy: zero priority vector, clamping secondary");
        return u1 * max;
    }

    // Solve |v0 + s * u1| = max for the scale s along u1:
    //   s^2 + 2 * m * s + c = 0 with m = u1.v0, c = |v0|^2 - max^2
    //   s = -m + sqrt(m^2 - c)
    // c < 0 since |v0| < max, so the root is real and s > 0.
    let m = u1.dot(v0);
    let c = v0.norm_squared() - max * max;
    let s = -m + (m * m - c).sqrt();

    v0 + u1 * s
}
