//! Resource records returned by the API
//!
//! Every record is a flat value object. All fields are optional: a key that is
//! missing or `null` decodes to `None` and keys the record does not know about
//! are ignored. A key present with a value of the wrong type fails decoding.

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use std::fmt;
use std::str::FromStr;

use crate::api::query::QueryFilters;

pub mod car_data;
pub mod driver;
pub mod interval;
pub mod lap;
pub mod location;
pub mod meeting;
pub mod pit;
pub mod position;
pub mod race_control;

pub use car_data::{CarData, CarDataFilters};
pub use driver::{Driver, DriverFilters};
pub use interval::{Gap, Interval, IntervalFilters};
pub use lap::{Lap, LapFilters};
pub use location::{Location, LocationFilters};
pub use meeting::{Meeting, MeetingFilters};
pub use pit::{Pit, PitFilters};
pub use position::{Position, PositionFilters};
pub use race_control::{RaceControl, RaceControlFilters};

/// Timestamps are sent as RFC 3339 with fractional seconds and an offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Ties a record type to its endpoint path and filter set.
pub trait Resource: DeserializeOwned {
    /// Path below the API root, without a leading slash.
    const PATH: &'static str;

    type Filters: QueryFilters;
}

/// The nine resources, addressable by their path name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    CarData,
    Drivers,
    Intervals,
    Laps,
    Location,
    Meetings,
    Pit,
    Position,
    RaceControl,
}

impl ResourceKind {
    pub fn all() -> &'static [ResourceKind] {
        &[
            ResourceKind::CarData,
            ResourceKind::Drivers,
            ResourceKind::Intervals,
            ResourceKind::Laps,
            ResourceKind::Location,
            ResourceKind::Meetings,
            ResourceKind::Pit,
            ResourceKind::Position,
            ResourceKind::RaceControl,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::CarData => CarData::PATH,
            ResourceKind::Drivers => Driver::PATH,
            ResourceKind::Intervals => Interval::PATH,
            ResourceKind::Laps => Lap::PATH,
            ResourceKind::Location => Location::PATH,
            ResourceKind::Meetings => Meeting::PATH,
            ResourceKind::Pit => Pit::PATH,
            ResourceKind::Position => Position::PATH,
            ResourceKind::RaceControl => RaceControl::PATH,
        }
    }

    pub fn filter_names(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::CarData => CarDataFilters::names(),
            ResourceKind::Drivers => DriverFilters::names(),
            ResourceKind::Intervals => IntervalFilters::names(),
            ResourceKind::Laps => LapFilters::names(),
            ResourceKind::Location => LocationFilters::names(),
            ResourceKind::Meetings => MeetingFilters::names(),
            ResourceKind::Pit => PitFilters::names(),
            ResourceKind::Position => PositionFilters::names(),
            ResourceKind::RaceControl => RaceControlFilters::names(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('/').to_lowercase();
        ResourceKind::all()
            .iter()
            .copied()
            .find(|kind| kind.path() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = ResourceKind::all().iter().map(|k| k.path()).collect();
                format!("unknown resource '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}
