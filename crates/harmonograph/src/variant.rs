//! Pendulum configurations for the three harmonograph shapes.
//!
//! | Config              | Builds            | Axes                          |
//! |---------------------|-------------------|-------------------------------|
//! | [`DualAxisConfig`]  | [`PlanarPendulum`]  | independent x and y           |
//! | [`SharedAxisConfig`]| [`PlanarPendulum`]  | one amplitude/frequency on both |
//! | [`SpatialConfig`]   | [`SpatialPendulum`] | independent x, y and z        |
//!
//! Frequencies are in degrees per unit time and phases in degrees. With the
//! `serde` feature the configs (de)serialize with snake_case field names;
//! the compact spellings `xamplitude`, `yfrequency` and so on are accepted as
//! aliases on input. `phase` and `decay` default to zero when missing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pendulum::{Pendulum, PlanarPendulum, SpatialPendulum, abs, propagating_max};

/// A planar pendulum with independent x and y motion.
///
/// # Example
///
/// ```rust
/// use harmonograph::{DualAxisConfig, PlanarPendulum};
///
/// let config = DualAxisConfig {
///     x_amplitude: 120.0,
///     y_amplitude: 90.0,
///     x_frequency: 180.0,
///     y_frequency: 181.0,
///     phase: 0.0,
///     decay: 0.02,
/// };
/// let pendulum = PlanarPendulum::from(config);
/// assert_eq!(pendulum.limit(), 120.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DualAxisConfig {
    #[cfg_attr(feature = "serde", serde(alias = "xamplitude"))]
    pub x_amplitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "yamplitude"))]
    pub y_amplitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "xfrequency"))]
    pub x_frequency: f64,
    #[cfg_attr(feature = "serde", serde(alias = "yfrequency"))]
    pub y_frequency: f64,
    /// Phase offset in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub phase: f64,
    /// Exponential decay coefficient.
    #[cfg_attr(feature = "serde", serde(default))]
    pub decay: f64,
}

impl DualAxisConfig {
    #[cfg_attr(not(feature = "config"), allow(dead_code))]
    pub(crate) const fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("x_amplitude", self.x_amplitude),
            ("y_amplitude", self.y_amplitude),
            ("x_frequency", self.x_frequency),
            ("y_frequency", self.y_frequency),
            ("phase", self.phase),
            ("decay", self.decay),
        ]
    }
}

impl From<DualAxisConfig> for PlanarPendulum {
    fn from(config: DualAxisConfig) -> Self {
        Pendulum::new(
            [config.x_amplitude, config.y_amplitude],
            [config.x_frequency, config.y_frequency],
            config.phase,
            config.decay,
        )
    }
}

/// A planar pendulum whose single amplitude and frequency drive both axes,
/// tracing `x = A cos θ`, `y = A sin θ`.
///
/// The limit is `|amplitude|`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SharedAxisConfig {
    pub amplitude: f64,
    pub frequency: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phase: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub decay: f64,
}

impl SharedAxisConfig {
    #[cfg_attr(not(feature = "config"), allow(dead_code))]
    pub(crate) const fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("phase", self.phase),
            ("decay", self.decay),
        ]
    }
}

impl From<SharedAxisConfig> for PlanarPendulum {
    fn from(config: SharedAxisConfig) -> Self {
        Pendulum::new(
            [config.amplitude, config.amplitude],
            [config.frequency, config.frequency],
            config.phase,
            config.decay,
        )
    }
}

/// A spatial pendulum with independent x, y and z motion.
///
/// The z axis follows cosine like x. The limit only covers the horizontal
/// plane: it is the larger of `|x_amplitude|` and `|y_amplitude|`, so the
/// envelope radius ignores depth.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpatialConfig {
    #[cfg_attr(feature = "serde", serde(alias = "xamplitude"))]
    pub x_amplitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "yamplitude"))]
    pub y_amplitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "zamplitude"))]
    pub z_amplitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "xfrequency"))]
    pub x_frequency: f64,
    #[cfg_attr(feature = "serde", serde(alias = "yfrequency"))]
    pub y_frequency: f64,
    #[cfg_attr(feature = "serde", serde(alias = "zfrequency"))]
    pub z_frequency: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phase: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub decay: f64,
}

impl SpatialConfig {
    #[cfg_attr(not(feature = "config"), allow(dead_code))]
    pub(crate) const fn fields(&self) -> [(&'static str, f64); 8] {
        [
            ("x_amplitude", self.x_amplitude),
            ("y_amplitude", self.y_amplitude),
            ("z_amplitude", self.z_amplitude),
            ("x_frequency", self.x_frequency),
            ("y_frequency", self.y_frequency),
            ("z_frequency", self.z_frequency),
            ("phase", self.phase),
            ("decay", self.decay),
        ]
    }
}

impl From<SpatialConfig> for SpatialPendulum {
    fn from(config: SpatialConfig) -> Self {
        let planar_limit = propagating_max(abs(config.x_amplitude), abs(config.y_amplitude));
        Pendulum::new(
            [config.x_amplitude, config.y_amplitude, config.z_amplitude],
            [config.x_frequency, config.y_frequency, config.z_frequency],
            config.phase,
            config.decay,
        )
        .with_limit(planar_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_dual_axis_builds_planar_pendulum() {
        let p = PlanarPendulum::from(DualAxisConfig {
            x_amplitude: -3.0,
            y_amplitude: 2.0,
            x_frequency: 0.0,
            y_frequency: 0.0,
            phase: 0.0,
            decay: 0.0,
        });

        assert_eq!(p.limit(), 3.0);
        let swing = p.calculate(4.0);
        assert!(approx_eq(swing.x(), -3.0));
        assert!(approx_eq(swing.y(), 0.0));
    }

    #[test]
    fn test_shared_axis_constant_angle() {
        let p = PlanarPendulum::from(SharedAxisConfig {
            amplitude: 10.0,
            frequency: 0.0,
            phase: 0.0,
            decay: 0.0,
        });

        for t in [0.0, 1.0, 25.0, -3.0] {
            let swing = p.calculate(t);
            assert!(approx_eq(swing.x(), 10.0));
            assert!(approx_eq(swing.y(), 0.0));
            assert!(approx_eq(swing.r, 10.0));
        }
    }

    #[test]
    fn test_shared_axis_traces_circle() {
        let p = PlanarPendulum::from(SharedAxisConfig {
            amplitude: 4.0,
            frequency: 30.0,
            phase: 10.0,
            decay: 0.0,
        });

        for t in [0.3, 1.7, 8.0] {
            let swing = p.calculate(t);
            let radius = (swing.x() * swing.x() + swing.y() * swing.y()).sqrt();
            assert!(approx_eq(radius, 4.0));
        }
    }

    #[test]
    fn test_shared_axis_limit_uses_abs_amplitude() {
        let p = PlanarPendulum::from(SharedAxisConfig {
            amplitude: -6.5,
            frequency: 1.0,
            ..Default::default()
        });
        assert_eq!(p.limit(), 6.5);
    }

    #[test]
    fn test_spatial_limit_ignores_z() {
        let p = SpatialPendulum::from(SpatialConfig {
            x_amplitude: 1.0,
            y_amplitude: -2.0,
            z_amplitude: 9.0,
            ..Default::default()
        });
        assert_eq!(p.limit(), 2.0);
        assert_eq!(p.calculate(0.0).r, 2.0);
        assert!(approx_eq(p.calculate(0.0).z(), 9.0));
    }

    #[test]
    fn test_spatial_limit_propagates_nan() {
        let p = SpatialPendulum::from(SpatialConfig {
            x_amplitude: f64::NAN,
            y_amplitude: 2.0,
            ..Default::default()
        });
        assert!(p.limit().is_nan());
    }

    #[test]
    fn test_spatial_axes() {
        let p = SpatialPendulum::from(SpatialConfig {
            x_amplitude: 1.0,
            y_amplitude: 2.0,
            z_amplitude: 3.0,
            x_frequency: 90.0,
            y_frequency: 90.0,
            z_frequency: 180.0,
            phase: 0.0,
            decay: 0.0,
        });
        let swing = p.calculate(1.0);

        assert!(approx_eq(swing.x(), 0.0));
        assert!(approx_eq(swing.y(), 2.0));
        assert!(approx_eq(swing.z(), -3.0));
    }

    #[test]
    fn test_fields_cover_every_value() {
        let dual = DualAxisConfig {
            x_amplitude: 1.0,
            y_amplitude: 2.0,
            x_frequency: 3.0,
            y_frequency: 4.0,
            phase: 5.0,
            decay: 6.0,
        };
        let sum: f64 = dual.fields().iter().map(|(_, v)| v).sum();
        assert!(approx_eq(sum, 21.0));

        let spatial = SpatialConfig::default();
        assert_eq!(spatial.fields().len(), 8);
        assert_eq!(SharedAxisConfig::default().fields()[0].0, "amplitude");
    }
}
