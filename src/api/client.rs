use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::ClientError;
use super::query::build_url;
use super::transport::{HttpTransport, Transport};
use crate::models::{
    CarData, CarDataFilters, Driver, DriverFilters, Interval, IntervalFilters, Lap, LapFilters,
    Location, LocationFilters, Meeting, MeetingFilters, Pit, PitFilters, Position,
    PositionFilters, RaceControl, RaceControlFilters, Resource,
};

/// Production root of the OpenF1 REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.openf1.org/v1";

/// Blocking client for the OpenF1 API.
///
/// Each `get_*` call builds one URL from the given filters, performs a single
/// GET and decodes the JSON array body into records, preserving the order the
/// server returned them in. The only state is the base root fixed at
/// construction, so a client can be shared freely between threads as long as
/// its transport can.
#[derive(Clone)]
pub struct OpenF1Client<T: Transport = HttpTransport> {
    base_url: String,
    transport: T,
}

impl OpenF1Client<HttpTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }
}

impl Default for OpenF1Client<HttpTransport> {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl<T: Transport> OpenF1Client<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch every record of resource `R` matching `filters`.
    ///
    /// A non-2xx status is logged but not treated specially: the body is still
    /// decoded, so an error page fails as a decode error. Any failure aborts
    /// the call without records.
    pub fn fetch<R: Resource>(&self, filters: &R::Filters) -> Result<Vec<R>, ClientError> {
        let url = build_url(&self.base_url, R::PATH, filters)?;
        debug!(target: "api_client", "GET {}", url);

        let response = self.transport.get(&url)?;
        if !response.is_success() {
            warn!(
                target: "api_client",
                "{} returned HTTP {}, decoding body anyway",
                url,
                response.status
            );
        }

        let records: Vec<R> = decode_records(response.status, &response.body)?;
        debug!(target: "api_client", "Decoded {} {} records", records.len(), R::PATH);
        Ok(records)
    }

    pub fn get_car_data(&self, filters: &CarDataFilters) -> Result<Vec<CarData>, ClientError> {
        self.fetch(filters)
    }

    pub fn get_drivers(&self, filters: &DriverFilters) -> Result<Vec<Driver>, ClientError> {
        self.fetch(filters)
    }

    /// Interval gaps. Note that the upstream service answers an empty list
    /// when `driver_number` and `session_key` are combined; both are still
    /// sent as given.
    pub fn get_intervals(&self, filters: &IntervalFilters) -> Result<Vec<Interval>, ClientError> {
        self.fetch(filters)
    }

    pub fn get_laps(&self, filters: &LapFilters) -> Result<Vec<Lap>, ClientError> {
        self.fetch(filters)
    }

    pub fn get_locations(&self, filters: &LocationFilters) -> Result<Vec<Location>, ClientError> {
        self.fetch(filters)
    }

    pub fn get_meetings(&self, filters: &MeetingFilters) -> Result<Vec<Meeting>, ClientError> {
        self.fetch(filters)
    }

    pub fn get_pits(&self, filters: &PitFilters) -> Result<Vec<Pit>, ClientError> {
        self.fetch(filters)
    }

    pub fn get_positions(&self, filters: &PositionFilters) -> Result<Vec<Position>, ClientError> {
        self.fetch(filters)
    }

    pub fn get_race_control(
        &self,
        filters: &RaceControlFilters,
    ) -> Result<Vec<RaceControl>, ClientError> {
        self.fetch(filters)
    }
}

fn decode_records<R: DeserializeOwned>(status: u16, body: &str) -> Result<Vec<R>, ClientError> {
    serde_json::from_str(body).map_err(|source| ClientError::Decode { status, source })
}
