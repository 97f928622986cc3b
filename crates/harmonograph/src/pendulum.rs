//! Damped sinusoidal pendulum.
//!
//! A [`Pendulum`] swings along `N` axes at once. Every axis has its own
//! amplitude and frequency while all axes share one phase and one decay
//! coefficient. The displacement along axis `i` at time `t` is
//!
//! ```text
//! amplitude_i * wave_i(frequency_i * t + phase) * exp(-decay * t)
//! ```
//!
//! where `wave_i` is cosine on even axes (x, z) and sine on odd axes (y).
//! The quarter-turn offset between neighbouring axes is what closes the
//! figure into a Lissajous-like loop instead of a line.
//!
//! # Example
//!
//! ```rust
//! use harmonograph::Pendulum;
//!
//! // 2D pendulum: amplitudes (x, y), frequencies in degrees per unit time
//! let pendulum = Pendulum::new([100.0, 80.0], [90.0, 91.0], 0.0, 0.01);
//!
//! let swing = pendulum.calculate(0.0);
//! assert_eq!(swing.x(), 100.0);
//! assert_eq!(swing.y(), 0.0);
//! assert_eq!(swing.r, pendulum.limit());
//! ```

use core::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

/// Converts an angle in degrees to radians.
///
/// Frequencies and phases are specified in degrees and converted exactly
/// once, when the pendulum is built.
#[inline]
pub fn radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// The trigonometric function driving one axis of a pendulum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Wave {
    /// `cos(angle)`, used on the x and z axes.
    Cosine,
    /// `sin(angle)`, used on the y axis.
    Sine,
}

impl Wave {
    /// Returns the wave used for the axis at `index`: cosine on even axes,
    /// sine on odd ones.
    ///
    /// ```rust
    /// use harmonograph::Wave;
    ///
    /// assert_eq!(Wave::for_axis(0), Wave::Cosine); // x
    /// assert_eq!(Wave::for_axis(1), Wave::Sine); // y
    /// assert_eq!(Wave::for_axis(2), Wave::Cosine); // z
    /// ```
    #[inline]
    pub const fn for_axis(index: usize) -> Self {
        if index % 2 == 0 { Wave::Cosine } else { Wave::Sine }
    }

    /// Evaluates the wave at `angle` radians.
    #[inline]
    pub fn eval(self, angle: f64) -> f64 {
        match self {
            Wave::Cosine => cos(angle),
            Wave::Sine => sin(angle),
        }
    }
}

/// One axis of a pendulum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    amplitude: f64,
    frequency: f64,
    wave: Wave,
}

impl Axis {
    /// Amplitude, unchanged from the configuration.
    #[inline]
    pub const fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Angular frequency in radians per unit time.
    #[inline]
    pub const fn frequency(&self) -> f64 {
        self.frequency
    }

    /// The wave driving this axis.
    #[inline]
    pub const fn wave(&self) -> Wave {
        self.wave
    }
}

/// The output of a `calculate` call: a displacement along each axis plus the
/// bounding radius of the decay envelope at that instant.
///
/// Planar swings (`Swing<2>`) expose [`x`](Swing::x) and [`y`](Swing::y);
/// spatial swings (`Swing<3>`) add [`z`](Swing::z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swing<const N: usize> {
    /// Displacement per axis, in amplitude units.
    pub position: [f64; N],
    /// Envelope radius: `exp(-decay * t) * limit`.
    pub r: f64,
}

impl<const N: usize> Swing<N> {
    /// The swing of an empty harmonograph: zero on every axis, zero radius.
    #[inline]
    pub const fn rest() -> Self {
        Self {
            position: [0.0; N],
            r: 0.0,
        }
    }

    /// Returns the displacement along axis `index`, or `None` when the swing
    /// has fewer axes.
    #[inline]
    pub fn axis(&self, index: usize) -> Option<f64> {
        self.position.get(index).copied()
    }

    /// Returns the envelope radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.r
    }
}

impl<const N: usize> Default for Swing<N> {
    fn default() -> Self {
        Self::rest()
    }
}

impl Swing<2> {
    /// Horizontal displacement.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.position[0]
    }

    /// Vertical displacement.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.position[1]
    }
}

impl Swing<3> {
    /// Horizontal displacement.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.position[0]
    }

    /// Vertical displacement.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.position[1]
    }

    /// Depth displacement.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.position[2]
    }
}

// Arrays of arbitrary length have no serde impl, so the position goes out
// as a slice.
#[cfg(feature = "serde")]
impl<const N: usize> Serialize for Swing<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Swing", 2)?;
        state.serialize_field("position", &self.position[..])?;
        state.serialize_field("r", &self.r)?;
        state.end()
    }
}

/// A damped pendulum swinging along `N` axes.
///
/// Built once from degrees-based parameters, then evaluated with
/// [`calculate`](Pendulum::calculate) as often as needed. A pendulum holds no
/// mutable state, so it can be shared freely between threads.
///
/// Nothing is validated: negative amplitudes, zero frequencies and negative
/// decay (a growing envelope) are all accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum<const N: usize> {
    axes: [Axis; N],
    phase: f64,
    decay: f64,
    limit: f64,
}

/// A pendulum drawing in the plane.
pub type PlanarPendulum = Pendulum<2>;

/// A pendulum drawing in space.
pub type SpatialPendulum = Pendulum<3>;

impl<const N: usize> Pendulum<N> {
    /// Creates a pendulum from per-axis amplitudes and frequencies.
    ///
    /// # Arguments
    ///
    /// * `amplitudes` - Peak displacement per axis, in any distance unit.
    /// * `frequencies` - Angular frequency per axis, in degrees per unit time.
    /// * `phase` - Phase offset shared by all axes, in degrees.
    /// * `decay` - Exponential decay coefficient shared by all axes.
    ///
    /// The limit is the largest absolute amplitude.
    ///
    /// # Example
    ///
    /// ```rust
    /// use harmonograph::Pendulum;
    ///
    /// let pendulum = Pendulum::new([3.0, -7.0, 5.0], [10.0, 20.0, 30.0], 45.0, 0.1);
    /// assert_eq!(pendulum.limit(), 7.0);
    /// ```
    pub fn new(amplitudes: [f64; N], frequencies: [f64; N], phase: f64, decay: f64) -> Self {
        let axes = core::array::from_fn(|index| Axis {
            amplitude: amplitudes[index],
            frequency: radians(frequencies[index]),
            wave: Wave::for_axis(index),
        });
        let limit = amplitudes
            .iter()
            .fold(0.0, |acc, amplitude| propagating_max(acc, abs(*amplitude)));

        Self {
            axes,
            phase: radians(phase),
            decay,
            limit,
        }
    }

    /// Replaces the limit, for shapes whose envelope radius is not taken
    /// over every axis.
    #[inline]
    pub(crate) const fn with_limit(mut self, limit: f64) -> Self {
        self.limit = limit;
        self
    }

    /// Computes the displacement and envelope radius at time `t`.
    ///
    /// `t` may be negative; the formula is closed-form so running time
    /// backwards is well defined. NaN and infinities propagate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use harmonograph::Pendulum;
    ///
    /// let pendulum = Pendulum::new([10.0, 10.0], [0.0, 0.0], 0.0, 1.0);
    /// let swing = pendulum.calculate(1.0);
    ///
    /// let envelope = (-1.0f64).exp();
    /// assert!((swing.x() - 10.0 * envelope).abs() < 1e-12);
    /// assert!((swing.r - 10.0 * envelope).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn calculate(&self, t: f64) -> Swing<N> {
        let envelope = self.envelope(t);
        let mut position = [0.0; N];
        for (value, axis) in position.iter_mut().zip(&self.axes) {
            *value = axis.amplitude * axis.wave.eval(axis.frequency * t + self.phase) * envelope;
        }

        Swing {
            position,
            r: envelope * self.limit,
        }
    }

    /// Returns the decay envelope `exp(-decay * t)`.
    #[inline]
    pub fn envelope(&self, t: f64) -> f64 {
        exp(-self.decay * t)
    }

    /// The largest displacement any axis can reach before decay.
    #[inline]
    pub const fn limit(&self) -> f64 {
        self.limit
    }

    /// The shared phase, in radians.
    #[inline]
    pub const fn phase(&self) -> f64 {
        self.phase
    }

    /// The shared decay coefficient.
    #[inline]
    pub const fn decay(&self) -> f64 {
        self.decay
    }

    /// The per-axis parameters, x first.
    #[inline]
    pub const fn axes(&self) -> &[Axis; N] {
        &self.axes
    }
}

/// `max` that lets NaN through instead of discarding it.
#[inline]
pub(crate) fn propagating_max(acc: f64, value: f64) -> f64 {
    if value.is_nan() || value > acc { value } else { acc }
}

// Math helper functions that work in both std and no_std environments

#[cfg(feature = "std")]
#[inline]
fn exp(x: f64) -> f64 {
    x.exp()
}

#[cfg(not(feature = "std"))]
#[inline]
fn exp(x: f64) -> f64 {
    libm::exp(x)
}

#[cfg(feature = "std")]
#[inline]
fn sin(x: f64) -> f64 {
    x.sin()
}

#[cfg(not(feature = "std"))]
#[inline]
fn sin(x: f64) -> f64 {
    libm::sin(x)
}

#[cfg(feature = "std")]
#[inline]
fn cos(x: f64) -> f64 {
    x.cos()
}

#[cfg(not(feature = "std"))]
#[inline]
fn cos(x: f64) -> f64 {
    libm::cos(x)
}

#[cfg(feature = "std")]
#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    libm::fabs(x)
}
