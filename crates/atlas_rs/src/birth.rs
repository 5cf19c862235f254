//! Birth record as supplied by the storage layer.

use atlas_chart::GeoLocation;
use atlas_time::{CivilTime, JulianMoment, TimeReference};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// One person's birth moment and place. The engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// 24-hour clock, `HH:MM` or `HH:MM:SS`.
    pub time: String,
    pub latitude_deg: f64,
    /// East positive.
    pub longitude_deg: f64,
    #[serde(default)]
    pub place: String,
    /// Frame `date`/`time` are expressed in.
    #[serde(default)]
    pub time_reference: TimeReference,
}

impl BirthData {
    /// Minimal record with an empty id, name and place label.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            date: date.into(),
            time: time.into(),
            latitude_deg,
            longitude_deg,
            place: String::new(),
            time_reference: TimeReference::Universal,
        }
    }

    pub fn with_time_reference(mut self, time_reference: TimeReference) -> Self {
        self.time_reference = time_reference;
        self
    }

    pub fn civil_time(&self) -> Result<CivilTime, InputError> {
        Ok(CivilTime::from_iso(&self.date, &self.time)?)
    }

    pub fn location(&self) -> Result<GeoLocation, InputError> {
        Ok(GeoLocation::new(self.latitude_deg, self.longitude_deg)?)
    }

    /// Universal-time anchor of the birth moment.
    pub fn moment(&self) -> Result<JulianMoment, InputError> {
        let civil = self.civil_time()?;
        Ok(JulianMoment::from_civil(&civil, self.time_reference)?)
    }
}
