use serde::{Deserialize, Serialize};

use super::{Resource, Timestamp};
use crate::api::query::filter_set;

filter_set! {
    /// Filters accepted by `/position`.
    PositionFilters {
        session_key: u32,
        meeting_key: u32,
        driver_number: u32,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub date: Option<Timestamp>,
    pub driver_number: Option<u32>,
    pub meeting_key: Option<u32>,
    pub position: Option<u32>,
    pub session_key: Option<u32>,
}

impl Resource for Position {
    const PATH: &'static str = "position";
    type Filters = PositionFilters;
}
