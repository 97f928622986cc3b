#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

//! # Harmonograph
//!
//! Curves traced by a harmonograph: several decaying pendulums whose
//! motions are added together.
//!
//! Harmonograph provides:
//! - **Pendulum**: a damped sinusoid along two or three axes
//! - **Harmonograph**: the sum of several pendulums, with the widest envelope
//! - **Trace**: lazy sampling of a harmonograph along time
//! - **Presets**: harmonograph descriptions loaded from JSON, TOML or YAML
//!
//! ## Example
//!
//! ```rust
//! use harmonograph::{DualAxisConfig, PlanarHarmonograph};
//!
//! let harmonograph = PlanarHarmonograph::from_configs([
//!     DualAxisConfig {
//!         x_amplitude: 100.0,
//!         y_amplitude: 100.0,
//!         x_frequency: 180.0,
//!         y_frequency: 181.0,
//!         phase: 0.0,
//!         decay: 0.02,
//!     },
//!     DualAxisConfig {
//!         x_amplitude: 60.0,
//!         y_amplitude: 60.0,
//!         x_frequency: 361.0,
//!         y_frequency: 359.0,
//!         phase: 90.0,
//!         decay: 0.05,
//!     },
//! ]);
//!
//! // Sample one point per frame at 60 FPS
//! for frame in 0..600 {
//!     let t = f64::from(frame) / 60.0;
//!     let swing = harmonograph.calculate(t);
//!     assert!(swing.x().abs() <= swing.r * 2.0 + 1e-9);
//! }
//! ```
//!
//! ## Shapes
//!
//! - **Dual-axis**: independent x and y amplitude/frequency pairs
//! - **Shared-axis**: one amplitude/frequency pair on both axes, tracing
//!   circles and spirals
//! - **Spatial**: independent x, y and z pairs, for 3D curves
//!
//! Frequencies and phases are given in degrees and converted to radians once
//! when a pendulum is built.
//!
//! ## Features
//!
//! - `std` (default): use the standard library. Without it the crate is
//!   `no_std` + `alloc` and takes its math from `libm`.
//! - `config` (default): [`config::Preset`] documents in JSON and TOML.
//! - `yaml`: YAML presets.
//! - `serde`: (de)serialize pendulum configs and swings.
//! - `parallel`: `Harmonograph::par_sample` on the rayon thread pool.

extern crate alloc;

#[cfg(feature = "config")]
pub mod config;
mod harmonograph;
mod pendulum;
mod trace;
mod variant;

pub use harmonograph::{Harmonograph, PlanarHarmonograph, SpatialHarmonograph};
pub use pendulum::{Axis, Pendulum, PlanarPendulum, SpatialPendulum, Swing, Wave, radians};
pub use trace::{Trace, TraceError, TraceSettings};
pub use variant::{DualAxisConfig, SharedAxisConfig, SpatialConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::harmonograph::{Harmonograph, PlanarHarmonograph, SpatialHarmonograph};
    pub use crate::pendulum::{Pendulum, PlanarPendulum, SpatialPendulum, Swing};
    pub use crate::trace::TraceSettings;
    pub use crate::variant::{DualAxisConfig, SharedAxisConfig, SpatialConfig};
}
