use crate::schema::{device_data, settings};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One stored telemetry sample, as returned to clients.
#[derive(Queryable, Serialize, Debug, Clone, PartialEq)]
pub struct Reading {
    pub id: i32,
    pub tds: f64,
    pub ph: f64,
    pub main_liquid: String,
    pub components: String,
    pub ph_level: String,
    pub water_level: String,
    pub timestamp: NaiveDateTime,
}

/// Incoming sample from the device. `timestamp` may be omitted, in which
/// case the server stamps it with the current UTC time.
#[derive(Insertable, Deserialize, Debug)]
#[table_name = "device_data"]
pub struct NewReading {
    pub tds: f64,
    pub ph: f64,
    pub main_liquid: String,
    pub components: String,
    pub ph_level: String,
    pub water_level: String,
    pub timestamp: Option<NaiveDateTime>,
}

/// The single active set of alarm thresholds.
#[derive(Queryable, Serialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub id: i32,
    pub max_tds: f64,
    pub min_tds: f64,
    pub max_ph: f64,
    pub min_ph: f64,
}

#[derive(Insertable, AsChangeset, Deserialize, Debug, Clone, Copy)]
#[table_name = "settings"]
pub struct SettingsInput {
    pub max_tds: f64,
    pub min_tds: f64,
    pub max_ph: f64,
    pub min_ph: f64,
}
