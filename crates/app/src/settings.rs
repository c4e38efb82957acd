use std::sync::Mutex;

use log::warn;
use serde::{Deserialize, Serialize};
use training_club_domain::{
    DistanceUnit, MeasurementSystem, PlateCount, Weight, WeightError, compute_plates,
};

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, SettingsError>;
    fn write_settings(&self, settings: Settings) -> Result<(), SettingsError>;
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("{0}")]
    Storage(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "MeasurementSystemDef")]
    pub measurement_system: MeasurementSystem,
    #[serde(with = "DistanceUnitDef")]
    pub distance_unit: DistanceUnit,
    pub show_plate_calculator: bool,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Switches the measurement system along with the distance unit that belongs to it.
    pub fn set_measurement_system(&mut self, measurement_system: MeasurementSystem) {
        self.measurement_system = measurement_system;
        self.distance_unit = measurement_system.distance_unit();
    }

    pub fn weight(&self, value: f64) -> Result<Weight, WeightError> {
        Weight::new(value, self.measurement_system)
    }

    #[must_use]
    pub fn plate_count(&self, total_weight: f64) -> PlateCount {
        compute_plates(total_weight, self.measurement_system)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::Imperial,
            distance_unit: DistanceUnit::Mile,
            show_plate_calculator: true,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "MeasurementSystem", rename_all = "lowercase")]
pub enum MeasurementSystemDef {
    Imperial,
    Metric,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "DistanceUnit", rename_all = "lowercase")]
pub enum DistanceUnitDef {
    Meter,
    Kilometer,
    Mile,
    Foot,
}

/// Falls back to the default settings if the stored ones cannot be read.
pub fn load_settings(repository: &impl SettingsRepository) -> Settings {
    repository.read_settings().unwrap_or_else(|err| {
        warn!("failed to read settings: {err}");
        Settings::default()
    })
}

/// Stores settings serialized as JSON in memory.
#[derive(Default)]
pub struct MemorySettings {
    json: Mutex<Option<String>>,
}

impl MemorySettings {
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        Self {
            json: Mutex::new(Some(json.to_string())),
        }
    }
}

impl SettingsRepository for MemorySettings {
    fn read_settings(&self) -> Result<Settings, SettingsError> {
        let json = self
            .json
            .lock()
            .map_err(|err| SettingsError::Storage(err.to_string()))?;
        match *json {
            Some(ref json) => Settings::from_json(json),
            None => Ok(Settings::default()),
        }
    }

    fn write_settings(&self, settings: Settings) -> Result<(), SettingsError> {
        let serialized = settings.to_json()?;
        let mut json = self
            .json
            .lock()
            .map_err(|err| SettingsError::Storage(err.to_string()))?;
        *json = Some(serialized);
        Ok(())
    }
}
