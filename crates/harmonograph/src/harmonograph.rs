//! Composite of several pendulums.
//!
//! A [`Harmonograph`] adds up the displacements of its pendulums and reports
//! the widest envelope among them. All pendulums share the same number of
//! axes, which the const parameter `N` enforces.

use alloc::vec::Vec;
use core::slice;

use tracing::debug;

use crate::pendulum::{Pendulum, Swing, propagating_max};

/// An ordered collection of pendulums evaluated as one curve.
///
/// Pendulums are summed in insertion order, so the floating point result of
/// [`calculate`](Harmonograph::calculate) is reproducible.
///
/// # Example
///
/// ```rust
/// use harmonograph::{Harmonograph, Pendulum};
///
/// let harmonograph = Harmonograph::new(vec![
///     Pendulum::new([5.0, 5.0], [0.0, 0.0], 0.0, 1.0),
///     Pendulum::new([5.0, 5.0], [0.0, 0.0], 0.0, 1.0),
/// ]);
///
/// let swing = harmonograph.calculate(0.0);
/// assert_eq!(swing.x(), 10.0);
/// assert_eq!(swing.r, 5.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Harmonograph<const N: usize> {
    pendulums: Vec<Pendulum<N>>,
}

/// A harmonograph drawing in the plane.
pub type PlanarHarmonograph = Harmonograph<2>;

/// A harmonograph drawing in space.
pub type SpatialHarmonograph = Harmonograph<3>;

impl<const N: usize> Harmonograph<N> {
    /// Creates a harmonograph from pendulums, keeping their order.
    pub fn new(pendulums: Vec<Pendulum<N>>) -> Self {
        let harmonograph = Self { pendulums };
        debug!(
            harmonograph.axes = N,
            harmonograph.pendulums = harmonograph.len(),
            harmonograph.limit = harmonograph.limit(),
            "Harmonograph assembled"
        );
        harmonograph
    }

    /// Creates a harmonograph straight from pendulum configs.
    ///
    /// ```rust
    /// use harmonograph::{PlanarHarmonograph, SharedAxisConfig};
    ///
    /// let harmonograph = PlanarHarmonograph::from_configs([
    ///     SharedAxisConfig { amplitude: 10.0, frequency: 2.0, phase: 0.0, decay: 0.01 },
    ///     SharedAxisConfig { amplitude: 4.0, frequency: 3.0, phase: 90.0, decay: 0.02 },
    /// ]);
    /// assert_eq!(harmonograph.len(), 2);
    /// ```
    pub fn from_configs<C>(configs: impl IntoIterator<Item = C>) -> Self
    where
        C: Into<Pendulum<N>>,
    {
        Self::new(configs.into_iter().map(Into::into).collect())
    }

    /// Computes the summed displacement and the largest envelope radius at
    /// time `t`.
    ///
    /// An empty harmonograph returns [`Swing::rest`].
    pub fn calculate(&self, t: f64) -> Swing<N> {
        let mut sum = Swing::rest();
        for pendulum in &self.pendulums {
            let swing = pendulum.calculate(t);
            for (total, value) in sum.position.iter_mut().zip(swing.position) {
                *total += value;
            }
            sum.r = propagating_max(sum.r, swing.r);
        }
        sum
    }

    /// Evaluates the harmonograph at each instant in `times`, in order.
    pub fn sample(&self, times: &[f64]) -> Vec<Swing<N>> {
        times.iter().map(|&t| self.calculate(t)).collect()
    }

    /// Evaluates the harmonograph at each instant in `times` on the rayon
    /// thread pool. The result matches [`sample`](Harmonograph::sample).
    #[cfg(feature = "parallel")]
    pub fn par_sample(&self, times: &[f64]) -> Vec<Swing<N>> {
        use rayon::prelude::*;

        times.par_iter().map(|&t| self.calculate(t)).collect()
    }

    /// The largest limit among the pendulums, or zero when empty.
    pub fn limit(&self) -> f64 {
        self.pendulums
            .iter()
            .fold(0.0, |acc, pendulum| propagating_max(acc, pendulum.limit()))
    }

    /// Number of pendulums.
    #[inline]
    pub fn len(&self) -> usize {
        self.pendulums.len()
    }

    /// Returns `true` when there are no pendulums.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pendulums.is_empty()
    }

    /// The pendulums, in insertion order.
    #[inline]
    pub fn pendulums(&self) -> &[Pendulum<N>] {
        &self.pendulums
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Pendulum<N>> {
        self.pendulums.iter()
    }
}

impl<const N: usize> From<Vec<Pendulum<N>>> for Harmonograph<N> {
    fn from(pendulums: Vec<Pendulum<N>>) -> Self {
        Self::new(pendulums)
    }
}

impl<const N: usize> FromIterator<Pendulum<N>> for Harmonograph<N> {
    fn from_iter<I: IntoIterator<Item = Pendulum<N>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, const N: usize> IntoIterator for &'a Harmonograph<N> {
    type Item = &'a Pendulum<N>;
    type IntoIter = slice::Iter<'a, Pendulum<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
