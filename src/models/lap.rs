use serde::{Deserialize, Serialize};

use super::{Resource, Timestamp};
use crate::api::query::filter_set;

filter_set! {
    /// Filters accepted by `/laps`.
    LapFilters {
        meeting_key: u32,
        session_key: u32,
        driver_number: u32,
        lap_number: u32,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lap {
    pub date_start: Option<Timestamp>,
    pub driver_number: Option<u32>,
    pub duration_sector_1: Option<f64>,
    pub duration_sector_2: Option<f64>,
    pub duration_sector_3: Option<f64>,
    pub i1_speed: Option<u32>,
    pub i2_speed: Option<u32>,
    pub is_pit_out_lap: Option<bool>,
    pub lap_duration: Option<f64>,
    pub lap_number: Option<u32>,
    pub meeting_key: Option<u32>,
    // Mini-sector codes; individual entries can be null
    pub segments_sector_1: Option<Vec<Option<u32>>>,
    pub segments_sector_2: Option<Vec<Option<u32>>>,
    pub segments_sector_3: Option<Vec<Option<u32>>>,
    pub session_key: Option<u32>,
    pub st_speed: Option<u32>,
}

impl Resource for Lap {
    const PATH: &'static str = "laps";
    type Filters = LapFilters;
}
