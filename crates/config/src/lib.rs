//! Configuration models and loaders for the Kepler orrery.

use std::fs::File;
use std::path::{Path, PathBuf};

use orrery_core::angle::deg_to_rad;
use orrery_orbits::{ElementsError, OrbitalElements};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Orbiting body parsed from catalog files.
///
/// Distances and times are in whatever consistent pair the catalog uses
/// (the shipped catalog uses AU and days). Angles are in degrees.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub period: f64,
    #[serde(default)]
    pub argument_of_periapsis_deg: f64,
    #[serde(default)]
    pub periapsis_time: f64,
    /// Name of the body this one orbits; `None` for bodies orbiting the origin.
    #[serde(default)]
    pub parent: Option<String>,
}

impl BodyConfig {
    /// Validate and convert into propagator elements.
    pub fn elements(&self) -> Result<OrbitalElements, ConfigError> {
        OrbitalElements::new(
            self.semi_major_axis,
            self.eccentricity,
            self.period,
            deg_to_rad(self.argument_of_periapsis_deg),
        )
        .and_then(|el| el.with_periapsis_time(self.periapsis_time))
        .map_err(|source| ConfigError::InvalidElements {
            body: self.name.clone(),
            source,
        })
    }
}

/// Frame and viewer settings for a simulation run.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Simulation time advanced per frame.
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    #[serde(default)]
    pub start_time: f64,
    /// Maximum number of points kept per body trail.
    #[serde(default = "default_trail_length")]
    pub trail_length: usize,
    /// Pixels per distance unit at zoom 1.
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default = "default_viewport_edge")]
    pub width: u32,
    #[serde(default = "default_viewport_edge")]
    pub height: u32,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: default_time_step(),
            start_time: 0.0,
            trail_length: default_trail_length(),
            scale: default_scale(),
            width: default_viewport_edge(),
            height: default_viewport_edge(),
            zoom: default_zoom(),
        }
    }
}

fn default_time_step() -> f64 {
    0.1
}

fn default_trail_length() -> usize {
    1_000
}

fn default_scale() -> f64 {
    400.0
}

fn default_viewport_edge() -> u32 {
    800
}

fn default_zoom() -> f64 {
    1.0
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("body `{body}` has invalid orbital elements: {source}")]
    InvalidElements {
        body: String,
        #[source]
        source: ElementsError,
    },
}

/// Load body configurations from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let bodies: Vec<BodyConfig> = load_records(path.as_ref())?;
    for body in &bodies {
        body.elements()?;
    }
    debug!(count = bodies.len(), path = %path.as_ref().display(), "loaded body catalog");
    Ok(bodies)
}

/// Load simulation settings from a single YAML or TOML file.
pub fn load_simulation<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, ConfigError> {
    let path = path.as_ref();
    let config = if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    debug!(path = %path.display(), "loaded simulation settings");
    Ok(config)
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
