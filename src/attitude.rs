// src/attitude.rs

//! # Attitude Mapping Module
//!
//! This module provides the attitude setpoint data structure and the
//! functions that map a desired thrust vector or body axis onto a full
//! attitude setpoint.

pub mod mapping;
pub use mapping::*;
pub mod setpoint;
pub use setpoint::*;
pub mod tilt;
pub use tilt::*;
