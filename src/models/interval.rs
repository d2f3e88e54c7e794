use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Resource, Timestamp};
use crate::api::query::filter_set;

filter_set! {
    /// Filters accepted by `/intervals`.
    ///
    /// The service returns nothing when `driver_number` is combined with
    /// `session_key`. Both are sent regardless.
    IntervalFilters {
        meeting_key: u32,
        session_key: u32,
        driver_number: u32,
    }
}

/// A time gap: seconds, or a marker such as `"+1 LAP"` once a car is lapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gap {
    Seconds(f64),
    Laps(String),
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gap::Seconds(seconds) => write!(f, "{:.3}", seconds),
            Gap::Laps(marker) => f.write_str(marker),
        }
    }
}

/// Gap to the car ahead and to the leader, race sessions only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interval {
    pub date: Option<Timestamp>,
    pub driver_number: Option<u32>,
    pub gap_to_leader: Option<Gap>,
    pub interval: Option<Gap>,
    pub meeting_key: Option<u32>,
    pub session_key: Option<u32>,
}

impl Resource for Interval {
    const PATH: &'static str = "intervals";
    type Filters = IntervalFilters;
}
