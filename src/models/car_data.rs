use serde::{Deserialize, Serialize};

use super::{Resource, Timestamp};
use crate::api::query::filter_set;

filter_set! {
    /// Filters accepted by `/car_data`.
    CarDataFilters {
        driver_number: u32,
        meeting_key: u32,
        session_key: u32,
    }
}

/// One telemetry sample, roughly 3.7 Hz per car.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarData {
    /// 0 or 100
    pub brake: Option<u32>,
    pub date: Option<Timestamp>,
    pub driver_number: Option<u32>,
    pub drs: Option<u32>,
    pub meeting_key: Option<u32>,
    pub n_gear: Option<u32>,
    pub rpm: Option<u32>,
    pub session_key: Option<u32>,
    /// km/h
    pub speed: Option<u32>,
    /// Percentage of full throttle
    pub throttle: Option<u32>,
}

impl Resource for CarData {
    const PATH: &'static str = "car_data";
    type Filters = CarDataFilters;
}
