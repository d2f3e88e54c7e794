use serde::{Deserialize, Serialize};

use super::{Resource, Timestamp};
use crate::api::query::filter_set;

filter_set! {
    /// Filters accepted by `/pit`.
    PitFilters {
        meeting_key: u32,
        session_key: u32,
        driver_number: u32,
        lap_number: u32,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pit {
    pub date: Option<Timestamp>,
    pub driver_number: Option<u32>,
    pub lap_number: Option<u32>,
    pub meeting_key: Option<u32>,
    /// Seconds from pit lane entry to exit
    pub pit_duration: Option<f64>,
    pub session_key: Option<u32>,
}

impl Resource for Pit {
    const PATH: &'static str = "pit";
    type Filters = PitFilters;
}
