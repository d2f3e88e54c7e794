use serde::{Deserialize, Serialize};

use super::{Resource, Timestamp};
use crate::api::query::filter_set;

filter_set! {
    /// Filters accepted by `/meetings`.
    MeetingFilters {
        year: i32,
        country_code: String,
        country_name: String,
        circuit_key: u32,
        circuit_short_name: String,
        meeting_key: u32,
    }
}

/// A Grand Prix or testing weekend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meeting {
    pub circuit_key: Option<u32>,
    pub circuit_short_name: Option<String>,
    pub country_code: Option<String>,
    pub country_key: Option<u32>,
    pub country_name: Option<String>,
    pub date_start: Option<Timestamp>,
    /// Local offset from UTC, e.g. `"08:00:00"`
    pub gmt_offset: Option<String>,
    pub location: Option<String>,
    pub meeting_key: Option<u32>,
    pub meeting_name: Option<String>,
    pub meeting_official_name: Option<String>,
    pub year: Option<i32>,
}

impl Resource for Meeting {
    const PATH: &'static str = "meetings";
    type Filters = MeetingFilters;
}
