//! Harmonograph presets loaded from JSON, TOML or YAML.
//!
//! A preset names a figure and lists its pendulums. The `kind` key selects
//! the pendulum shape:
//!
//! ```toml
//! name = "Spiral"
//! kind = "dual-axis"
//!
//! [[pendulums]]
//! x_amplitude = 120.0
//! y_amplitude = 120.0
//! x_frequency = 180.0
//! y_frequency = 182.0
//! decay = 0.01
//! ```
//!
//! `kind` is one of `dual-axis`, `shared-axis` or `spatial`, matching
//! [`DualAxisConfig`], [`SharedAxisConfig`] and [`SpatialConfig`].
//!
//! # Example
//!
//! ```rust
//! use harmonograph::config::Preset;
//!
//! let preset = Preset::from_json(r#"{
//!     "kind": "shared-axis",
//!     "pendulums": [{ "amplitude": 10.0, "frequency": 0.0 }]
//! }"#)?;
//!
//! let figure = preset.build();
//! assert_eq!(figure.dimensions(), 2);
//! # Ok::<(), harmonograph::config::ConfigLoadError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::harmonograph::{PlanarHarmonograph, SpatialHarmonograph};
use crate::pendulum::Swing;
use crate::variant::{DualAxisConfig, SharedAxisConfig, SpatialConfig};

/// Error validating preset values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("Pendulum {pendulum}: field '{field}' must be finite, got {value}")]
    NonFinite {
        pendulum: usize,
        field: &'static str,
        value: f64,
    },
}

/// Error reading a preset document.
///
/// Syntax errors and unknown `kind` values surface as the parser's error;
/// documents that parse but carry non-finite numbers are `Validation`.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Invalid JSON preset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid TOML preset: {0}")]
    Toml(#[from] toml::de::Error),
    #[cfg(feature = "yaml")]
    #[error("Invalid YAML preset: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Cannot read preset file: {0}")]
    Io(#[from] std::io::Error),
    /// The file extension (or `yaml` when built without the `yaml` feature).
    #[error("Unsupported preset format '{0}' (expected json, toml, yaml or yml)")]
    UnsupportedFormat(String),
    #[error("Preset rejected: {0}")]
    Validation(#[from] ConfigValidationError),
}

/// Document formats a preset file may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PresetFormat {
    Json,
    Toml,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl PresetFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigLoadError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Ok(Self::Yaml),
            #[cfg(not(feature = "yaml"))]
            Some("yaml" | "yml") => Err(ConfigLoadError::UnsupportedFormat("yaml".to_owned())),
            Some(ext) => Err(ConfigLoadError::UnsupportedFormat(ext.to_owned())),
            None => Err(ConfigLoadError::UnsupportedFormat(String::new())),
        }
    }
}

/// The pendulums of a preset, tagged by shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PresetFigure {
    DualAxis { pendulums: Vec<DualAxisConfig> },
    SharedAxis { pendulums: Vec<SharedAxisConfig> },
    Spatial { pendulums: Vec<SpatialConfig> },
}

impl PresetFigure {
    /// Number of pendulums listed.
    pub fn len(&self) -> usize {
        match self {
            Self::DualAxis { pendulums } => pendulums.len(),
            Self::SharedAxis { pendulums } => pendulums.len(),
            Self::Spatial { pendulums } => pendulums.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named harmonograph description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preset {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub figure: PresetFigure,
}

impl Preset {
    /// Creates an unnamed preset.
    pub fn new(figure: PresetFigure) -> Self {
        Self { name: None, figure }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validate that every pendulum value is finite.
    ///
    /// The model itself accepts any number; this check only guards preset
    /// documents, where NaN or infinity is almost always a typo.
    ///
    /// # Errors
    /// Returns `ConfigValidationError` naming the first offending pendulum
    /// and field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let result = match &self.figure {
            PresetFigure::DualAxis { pendulums } => {
                check_finite(pendulums.iter().map(DualAxisConfig::fields))
            }
            PresetFigure::SharedAxis { pendulums } => {
                check_finite(pendulums.iter().map(SharedAxisConfig::fields))
            }
            PresetFigure::Spatial { pendulums } => {
                check_finite(pendulums.iter().map(SpatialConfig::fields))
            }
        };
        if let Err(err) = &result {
            warn!(preset.name = ?self.name, error = %err, "Preset rejected");
        }
        result
    }

    /// Parses a JSON preset document and checks its pendulum values.
    ///
    /// # Errors
    /// `Json` for malformed documents or an unknown `kind`, `Validation`
    /// for non-finite numbers.
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        Self::accept(serde_json::from_str(json)?)
    }

    /// Parses a TOML preset document; `[[pendulums]]` tables list the
    /// pendulums.
    ///
    /// # Errors
    /// `Toml` for malformed documents or an unknown `kind`, `Validation`
    /// for non-finite numbers.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigLoadError> {
        Self::accept(toml::from_str(toml)?)
    }

    /// Parses a YAML preset document.
    ///
    /// # Errors
    /// `Yaml` for malformed documents or an unknown `kind`, `Validation`
    /// for non-finite numbers.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        Self::accept(serde_yaml::from_str(yaml)?)
    }

    /// Reads a preset file, choosing the parser from its extension:
    /// `.json`, `.toml`, `.yaml` or `.yml`.
    ///
    /// The extension is checked before the file is opened.
    ///
    /// # Errors
    /// `UnsupportedFormat` for any other extension (and for YAML files when
    /// the `yaml` feature is off), `Io` if the file cannot be read, otherwise
    /// whatever the matching `from_*` parser returns.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let format = PresetFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        debug!(preset.path = %path.display(), preset.format = ?format, "Reading preset file");
        match format {
            PresetFormat::Json => Self::from_json(&content),
            PresetFormat::Toml => Self::from_toml(&content),
            #[cfg(feature = "yaml")]
            PresetFormat::Yaml => Self::from_yaml(&content),
        }
    }

    fn accept(preset: Self) -> Result<Self, ConfigLoadError> {
        preset.validate()?;
        Ok(preset)
    }

    /// Builds the harmonograph this preset describes.
    pub fn build(&self) -> Figure {
        debug!(
            preset.name = ?self.name,
            preset.pendulums = self.figure.len(),
            "Building preset"
        );
        match &self.figure {
            PresetFigure::DualAxis { pendulums } => {
                Figure::Planar(PlanarHarmonograph::from_configs(pendulums.iter().copied()))
            }
            PresetFigure::SharedAxis { pendulums } => {
                Figure::Planar(PlanarHarmonograph::from_configs(pendulums.iter().copied()))
            }
            PresetFigure::Spatial { pendulums } => {
                Figure::Spatial(SpatialHarmonograph::from_configs(pendulums.iter().copied()))
            }
        }
    }
}

fn check_finite<const K: usize>(
    pendulums: impl Iterator<Item = [(&'static str, f64); K]>,
) -> Result<(), ConfigValidationError> {
    for (index, fields) in pendulums.enumerate() {
        if let Some((field, value)) = fields.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigValidationError::NonFinite {
                pendulum: index,
                field,
                value,
            });
        }
    }
    Ok(())
}

/// A harmonograph built from a [`Preset`], planar or spatial.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Planar(PlanarHarmonograph),
    Spatial(SpatialHarmonograph),
}

/// A point computed by [`Figure::calculate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FigurePoint {
    Planar(Swing<2>),
    Spatial(Swing<3>),
}

impl FigurePoint {
    /// Envelope radius of the point.
    pub const fn radius(&self) -> f64 {
        match self {
            Self::Planar(swing) => swing.r,
            Self::Spatial(swing) => swing.r,
        }
    }
}

impl Figure {
    /// Computes the figure's position at time `t`.
    pub fn calculate(&self, t: f64) -> FigurePoint {
        match self {
            Self::Planar(harmonograph) => FigurePoint::Planar(harmonograph.calculate(t)),
            Self::Spatial(harmonograph) => FigurePoint::Spatial(harmonograph.calculate(t)),
        }
    }

    /// 2 for planar figures, 3 for spatial ones.
    pub const fn dimensions(&self) -> usize {
        match self {
            Self::Planar(_) => 2,
            Self::Spatial(_) => 3,
        }
    }

    /// Number of pendulums.
    pub fn len(&self) -> usize {
        match self {
            Self::Planar(harmonograph) => harmonograph.len(),
            Self::Spatial(harmonograph) => harmonograph.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
