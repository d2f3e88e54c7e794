use serde::{Deserialize, Serialize};

use super::{Resource, Timestamp};
use crate::api::query::filter_set;

filter_set! {
    /// Filters accepted by `/race_control`.
    RaceControlFilters {
        meeting_key: u32,
        session_key: u32,
        lap_number: u32,
        driver_number: u32,
    }
}

/// Flags, safety car deployments, incidents and other steward messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceControl {
    pub category: Option<String>,
    pub date: Option<Timestamp>,
    pub driver_number: Option<u32>,
    pub flag: Option<String>,
    pub lap_number: Option<u32>,
    pub meeting_key: Option<u32>,
    pub message: Option<String>,
    /// "Track", "Driver" or "Sector"
    pub scope: Option<String>,
    pub sector: Option<u32>,
    pub session_key: Option<u32>,
}

impl Resource for RaceControl {
    const PATH: &'static str = "race_control";
    type Filters = RaceControlFilters;
}
