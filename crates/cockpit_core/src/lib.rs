//! Cockpit Core
//!
//! Small helpers shared by the plugin's graphics code:
//! - Scalar math (interpolation, quadratic roots)
//! - ICAO airport code to country / language lookup

pub mod icao;
pub mod math;

pub use glam;

/// Plugin version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
