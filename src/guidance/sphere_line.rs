// src/guidance/sphere_line.rs

//! Lookahead point on a waypoint segment.
//!
//! Path following steers toward the point where a sphere around the vehicle
//! crosses the line from the previous to the current waypoint. The sphere
//! radius is the acceptance radius.

use crate::logging::trace;
use crate::Number;
use nalgebra::Vector3;

/// Segments shorter than this have no usable direction.
const MIN_SEGMENT_LENGTH: f64 = 0.01;

/// Computes the forward crossing of a sphere with the line through a
/// waypoint segment.
///
/// `line_a` is the previous waypoint and `line_b` the current one. Of the two
/// crossings the one further along `line_a -> line_b` is reported, clamped at
/// `line_b` once the vehicle or the crossing has passed it.
///
/// Returns `(true, point)` when the sphere reaches the infinite line. When it
/// does not, returns `false` with a best effort point: `line_a` while the
/// sphere center is still before the segment, `line_b` once it is past the
/// segment, otherwise the closest point on the line.
///
/// A segment shorter than 1 cm has no direction; the result is then
/// `(true, line_b)`.
///
/// Example Usage
/// ```
/// use mc_control_math::cross_sphere_line;
/// use nalgebra::Vector3;
///
/// let prev: Vector3<f32> = Vector3::new(0.0, 0.0, 0.0);
/// let curr = Vector3::new(0.0, 0.0, 2.0);
///
/// let (found, target) = cross_sphere_line(&Vector3::new(0.0, 0.0, -0.5), 1.0, &prev, &curr);
/// assert!(found);
/// assert!((target.z - 0.5).abs() < 1e-6);
///
/// let (found, _) = cross_sphere_line(&Vector3::new(0.0, 2.0, 1.0), 1.0, &prev, &curr);
/// assert!(!found);
/// ```
pub fn cross_sphere_line<T: Number>(
    sphere_c: &Vector3<T>,
    sphere_r: T,
    line_a: &Vector3<T>,
    line_b: &Vector3<T>,
) -> (bool, Vector3<T>) {
    let ab = line_b - line_a;
    let ab_length = ab.norm();

    if ab_length < T::constant(MIN_SEGMENT_LENGTH) {
        trace!("cross_sphere_line: degenerate segment, holding at target");
        return (true, *line_b);
    }

    // project center of sphere on line, normalized AB
    let ab_norm = ab / ab_length;
    let a_to_d = (sphere_c - line_a).dot(&ab_norm);
    let d = line_a + ab_norm * a_to_d;
    let cd_length = (sphere_c - d).norm();

    let target_behind = (sphere_c - line_b).dot(&ab_norm) > T::zero();

    if cd_length <= sphere_r {
        // triangle CDX with known CD and CX = R, find DX
        let dx_length = (sphere_r * sphere_r - cd_length * cd_length).sqrt();

        if target_behind || a_to_d + dx_length > ab_length {
            // target waypoint is already behind us, or within reach
            return (true, *line_b);
        }

        return (true, d + ab_norm * dx_length);
    }

    // no roots, report the closest sensible point
    if target_behind {
        (false, *line_b)
    } else if (sphere_c - line_a).dot(&ab_norm) < T::zero() {
        // previous waypoint is still in front of us
        (false, *line_a)
    } else {
        (false, d)
    }
}
