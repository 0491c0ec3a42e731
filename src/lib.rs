// src/lib.rs

//! # Multicopter Control Math
//!
//! This crate provides `no_std`, no-alloc geometric routines used by a
//! multicopter position control pipeline. They translate control loop outputs
//! into attitude setpoints and guidance geometry once per control cycle.
//!
//! Every function is pure. Degenerate inputs such as a zero thrust vector or
//! a waypoint segment of zero length are handled with well-defined fallback
//! values rather than errors.

#![no_std]
#![deny(missing_docs)]

pub mod accumulate;
pub mod attitude;
pub mod guidance;
mod logging;
pub mod number;

#[doc(inline)]
pub use accumulate::*;
#[doc(inline)]
pub use attitude::*;
#[doc(inline)]
pub use guidance::*;
#[doc(inline)]
pub use number::Number;

#[cfg(test)]
mod test_utils;
