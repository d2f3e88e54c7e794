use serde::{Deserialize, Serialize};

use super::{Resource, Timestamp};
use crate::api::query::filter_set;

filter_set! {
    /// Filters accepted by `/location`.
    LocationFilters {
        session_key: u32,
        meeting_key: u32,
        driver_number: u32,
    }
}

/// Car position on track in circuit coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub date: Option<Timestamp>,
    pub driver_number: Option<u32>,
    pub meeting_key: Option<u32>,
    pub session_key: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub z: Option<i32>,
}

impl Resource for Location {
    const PATH: &'static str = "location";
    type Filters = LocationFilters;
}
