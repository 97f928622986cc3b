//! Lazy sampling of a harmonograph along time.
//!
//! A renderer normally walks `t` forward in fixed steps and stops once the
//! figure has faded below what it can display. [`Harmonograph::trace`] wraps
//! that loop in an iterator.
//!
//! # Example
//!
//! ```rust
//! use harmonograph::{Harmonograph, Pendulum, TraceSettings};
//!
//! let harmonograph = Harmonograph::new(vec![
//!     Pendulum::new([100.0, 100.0], [3.0, 2.0], 0.0, 0.5),
//! ]);
//!
//! // Sample every 0.1 until the envelope drops under one unit
//! let settings = TraceSettings::new().with_step(0.1).with_threshold(1.0);
//! let points: Vec<_> = harmonograph.trace(settings)?.collect();
//!
//! assert!(points.iter().all(|(_, swing)| swing.r >= 1.0));
//! # Ok::<(), harmonograph::TraceError>(())
//! ```

use core::iter::FusedIterator;

use thiserror::Error;
use tracing::trace;

use crate::harmonograph::Harmonograph;
use crate::pendulum::Swing;

/// Error creating a [`Trace`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TraceError {
    #[error("Trace step must not be zero")]
    ZeroStep,
    #[error("Trace step must be finite, got {0}")]
    NonFiniteStep(f64),
    #[error("Trace start must be finite, got {0}")]
    NonFiniteStart(f64),
    #[error("Trace end must be finite, got {0}")]
    NonFiniteEnd(f64),
    #[error("Trace threshold must not be NaN")]
    NanThreshold,
}

/// Where a trace starts, how far it moves per sample and when it stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSettings {
    /// Time of the first sample.
    pub start: f64,
    /// Time between samples. Negative steps run backwards.
    pub step: f64,
    /// Last time to sample (inclusive). `None` means no time bound.
    pub end: Option<f64>,
    /// Stop before the first sample whose envelope radius falls below this.
    pub threshold: Option<f64>,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            start: 0.0,
            step: 1.0,
            end: None,
            threshold: None,
        }
    }
}

impl TraceSettings {
    /// Settings starting at zero with unit steps and no stopping condition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time of the first sample.
    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Sets the time between samples.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Stops the trace after `end`.
    pub fn with_end(mut self, end: f64) -> Self {
        self.end = Some(end);
        self
    }

    /// Stops the trace once the envelope radius drops below `threshold`.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    fn validate(&self) -> Result<(), TraceError> {
        if !self.start.is_finite() {
            return Err(TraceError::NonFiniteStart(self.start));
        }
        if !self.step.is_finite() {
            return Err(TraceError::NonFiniteStep(self.step));
        }
        if self.step == 0.0 {
            return Err(TraceError::ZeroStep);
        }
        // A NaN bound never compares true, so the trace would never stop
        if let Some(end) = self.end.filter(|end| !end.is_finite()) {
            return Err(TraceError::NonFiniteEnd(end));
        }
        if self.threshold.is_some_and(f64::is_nan) {
            return Err(TraceError::NanThreshold);
        }
        Ok(())
    }

    fn is_past_end(&self, t: f64) -> bool {
        match self.end {
            Some(end) if self.step > 0.0 => t > end,
            Some(end) => t < end,
            None => false,
        }
    }
}

/// Iterator over `(t, swing)` pairs produced by [`Harmonograph::trace`].
///
/// Sample `i` is taken at `start + i * step`, so rounding error does not
/// accumulate across long traces.
#[derive(Debug, Clone)]
pub struct Trace<'a, const N: usize> {
    harmonograph: &'a Harmonograph<N>,
    settings: TraceSettings,
    index: u64,
    done: bool,
}

impl<const N: usize> Trace<'_, N> {
    /// The settings this trace was created with.
    pub const fn settings(&self) -> &TraceSettings {
        &self.settings
    }
}

impl<const N: usize> Iterator for Trace<'_, N> {
    type Item = (f64, Swing<N>);

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let t = self.settings.start + self.index as f64 * self.settings.step;
        if self.settings.is_past_end(t) {
            self.done = true;
            trace!(trace.t = t, trace.samples = self.index, "Trace reached end time");
            return None;
        }

        let swing = self.harmonograph.calculate(t);
        if let Some(threshold) = self.settings.threshold {
            if swing.r < threshold {
                self.done = true;
                trace!(
                    trace.t = t,
                    trace.r = swing.r,
                    trace.threshold = threshold,
                    trace.samples = self.index,
                    "Trace faded below threshold"
                );
                return None;
            }
        }

        self.index += 1;
        Some((t, swing))
    }
}

impl<const N: usize> FusedIterator for Trace<'_, N> {}

impl<const N: usize> Harmonograph<N> {
    /// Returns an iterator sampling this harmonograph along `t`.
    ///
    /// The trace runs until it passes `settings.end`, until the envelope
    /// radius falls below `settings.threshold`, or forever when neither is
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError`] if the step is zero or non-finite, the start or
    /// end is non-finite, or the threshold is NaN.
    pub fn trace(&self, settings: TraceSettings) -> Result<Trace<'_, N>, TraceError> {
        settings.validate()?;
        Ok(Trace {
            harmonograph: self,
            settings,
            index: 0,
            done: false,
        })
    }
}
