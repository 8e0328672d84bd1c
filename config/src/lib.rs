//! # Config Crate
//!
//! Centralized configuration constants for the parametric mesh generators.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_SEGMENTS, NORMAL_TOLERANCE, is_unit_length};
//!
//! // Angular resolution must form a closed polygon
//! let segments = 16;
//! assert!(segments >= MIN_SEGMENTS);
//!
//! // Normals are checked against NORMAL_TOLERANCE
//! assert!(is_unit_length(1.0 + NORMAL_TOLERANCE / 2.0, NORMAL_TOLERANCE));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **GPU-Ready**: Values are `f32` to match the vertex upload format
//! - **Demo Compatible**: Presets match the parameters of the demo scene

pub mod constants;

#[cfg(test)]
mod tests;
