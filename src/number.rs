// src/number.rs

//! Scalar requirements shared by the geometry routines.

use nalgebra::RealField;

/// Custom trait to encapsulate base number requirements.
///
/// Implemented for every `Copy` real field, which in practice means `f32`
/// on flight hardware and `f64` for host side analysis.
pub trait Number: RealField + Copy {
    /// Converts a literal constant into this scalar type.
    fn constant(value: f64) -> Self {
        nalgebra::convert(value)
    }

    /// Maps an angle produced by `atan2` from [-π, π] onto (-π, π].
    fn wrap_pi(self) -> Self {
        if self <= -Self::pi() {
            self + Self::two_pi()
        } else {
            self
        }
    }
}

impl<T: RealField + Copy> Number for T {}
