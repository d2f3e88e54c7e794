use serde::{Deserialize, Serialize};

use super::Resource;
use crate::api::query::filter_set;

filter_set! {
    /// Filters accepted by `/drivers`.
    DriverFilters {
        country_code: String,
        driver_number: u32,
        first_name: String,
        full_name: String,
        last_name: String,
        meeting_key: u32,
        session_key: u32,
        team_name: String,
    }
}

/// A driver's entry for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Driver {
    pub broadcast_name: Option<String>,
    pub country_code: Option<String>,
    pub driver_number: Option<u32>,
    pub first_name: Option<String>,
    pub full_name: Option<String>,
    pub headshot_url: Option<String>,
    pub last_name: Option<String>,
    pub meeting_key: Option<u32>,
    pub name_acronym: Option<String>,
    pub session_key: Option<u32>,
    /// Hex colour without the leading `#`
    pub team_colour: Option<String>,
    pub team_name: Option<String>,
}

impl Resource for Driver {
    const PATH: &'static str = "drivers";
    type Filters = DriverFilters;
}
