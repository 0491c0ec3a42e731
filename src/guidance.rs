// src/guidance.rs

//! # Guidance Geometry Module
//!
//! This module provides the geometric helpers used by position and
//! trajectory control: priority based magnitude limiting of combined
//! setpoint contributions and the lookahead point on a waypoint segment.

pub mod constrain;
pub use constrain::*;
pub mod sphere_line;
pub use sphere_line::*;
