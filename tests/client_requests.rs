#[cfg(test)]
mod client_request_tests {
    use openf1::api::{ClientError, HttpResponse, OpenF1Client, Transport, DEFAULT_BASE_URL};
    use openf1::models::*;
    use std::cell::RefCell;
    use url::Url;

    /// Records every requested URL and answers with a fixed body
    struct RecordingTransport {
        status: u16,
        body: String,
        requested: RefCell<Vec<String>>,
    }

    impl RecordingTransport {
        fn new(body: &str) -> Self {
            Self {
                status: 200,
                body: body.to_string(),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn urls(&self) -> Vec<String> {
            self.requested.borrow().clone()
        }
    }

    impl Transport for RecordingTransport {
        fn get(&self, url: &Url) -> Result<HttpResponse, ClientError> {
            self.requested.borrow_mut().push(url.to_string());
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    fn client(body: &str) -> OpenF1Client<RecordingTransport> {
        OpenF1Client::with_transport(DEFAULT_BASE_URL, RecordingTransport::new(body))
    }

    #[test]
    fn test_every_resource_without_filters() {
        let client = client("[]");

        assert!(client.get_car_data(&CarDataFilters::new()).unwrap().is_empty());
        assert!(client.get_drivers(&DriverFilters::new()).unwrap().is_empty());
        assert!(client.get_intervals(&IntervalFilters::new()).unwrap().is_empty());
        assert!(client.get_laps(&LapFilters::new()).unwrap().is_empty());
        assert!(client.get_locations(&LocationFilters::new()).unwrap().is_empty());
        assert!(client.get_meetings(&MeetingFilters::new()).unwrap().is_empty());
        assert!(client.get_pits(&PitFilters::new()).unwrap().is_empty());
        assert!(client.get_positions(&PositionFilters::new()).unwrap().is_empty());
        assert!(client.get_race_control(&RaceControlFilters::new()).unwrap().is_empty());

        let urls = client.transport().urls();
        assert_eq!(
            urls,
            vec![
                "https://api.openf1.org/v1/car_data",
                "https://api.openf1.org/v1/drivers",
                "https://api.openf1.org/v1/intervals",
                "https://api.openf1.org/v1/laps",
                "https://api.openf1.org/v1/location",
                "https://api.openf1.org/v1/meetings",
                "https://api.openf1.org/v1/pit",
                "https://api.openf1.org/v1/position",
                "https://api.openf1.org/v1/race_control",
            ]
        );
        assert!(urls.iter().all(|url| !url.contains('?')));
    }

    #[test]
    fn test_laps_query_string() {
        let client = client("[]");
        let filters = LapFilters::new()
            .meeting_key(1141u32)
            .session_key(9161u32)
            .driver_number(1u32);

        client.get_laps(&filters).unwrap();

        assert_eq!(
            client.transport().urls(),
            vec!["https://api.openf1.org/v1/laps?meeting_key=1141&session_key=9161&driver_number=1"]
        );
    }

    #[test]
    fn test_absent_filters_are_skipped() {
        let client = client("[]");
        let filters = RaceControlFilters {
            session_key: Some(9102),
            driver_number: Some(16),
            ..Default::default()
        };

        client.get_race_control(&filters).unwrap();

        assert_eq!(
            client.transport().urls(),
            vec!["https://api.openf1.org/v1/race_control?session_key=9102&driver_number=16"]
        );
    }

    #[test]
    fn test_intervals_keep_driver_and_session() {
        // Upstream answers [] for this combination; the client still sends both
        let client = client("[]");
        let filters = IntervalFilters::new().session_key(9161u32).driver_number(1u32);

        let intervals = client.get_intervals(&filters).unwrap();

        assert!(intervals.is_empty());
        assert_eq!(
            client.transport().urls(),
            vec!["https://api.openf1.org/v1/intervals?session_key=9161&driver_number=1"]
        );
    }

    #[test]
    fn test_text_filters_are_encoded() {
        let client = client("[]");
        let filters = DriverFilters::new()
            .full_name("Max VERSTAPPEN")
            .team_name("Red Bull Racing");

        client.get_drivers(&filters).unwrap();

        assert_eq!(
            client.transport().urls(),
            vec!["https://api.openf1.org/v1/drivers?full_name=Max+VERSTAPPEN&team_name=Red+Bull+Racing"]
        );
    }

    #[test]
    fn test_custom_base_url() {
        let client = OpenF1Client::with_transport(
            "http://localhost:8000/v1/",
            RecordingTransport::new("[]"),
        );
        client
            .get_meetings(&MeetingFilters::new().year(2023).country_name("Singapore"))
            .unwrap();

        assert_eq!(
            client.transport().urls(),
            vec!["http://localhost:8000/v1/meetings?year=2023&country_name=Singapore"]
        );
    }

    #[test]
    fn test_records_keep_server_order() {
        let body = r#"[
            {"date": "2023-09-16T13:03:35.292000+00:00", "driver_number": 55, "position": 1, "session_key": 9161, "meeting_key": 1219},
            {"date": "2023-09-16T13:03:35.378000+00:00", "driver_number": 63, "position": 2, "session_key": 9161, "meeting_key": 1219},
            {"date": "2023-09-16T13:03:35.465000+00:00", "driver_number": 4, "position": 3, "session_key": 9161, "meeting_key": 1219}
        ]"#;
        let client = client(body);

        let positions = client
            .get_positions(&PositionFilters::new().session_key(9161u32))
            .unwrap();

        assert_eq!(positions.len(), 3);
        let drivers: Vec<Option<u32>> = positions.iter().map(|p| p.driver_number).collect();
        assert_eq!(drivers, vec![Some(55), Some(63), Some(4)]);
        let places: Vec<Option<u32>> = positions.iter().map(|p| p.position).collect();
        assert_eq!(places, vec![Some(1), Some(2), Some(3)]);
        assert!(positions.iter().all(|p| p.session_key == Some(9161)));
    }

    #[test]
    fn test_malformed_body_fails_whole_call() {
        let client = client("{\"detail\": \"Internal Server Error\"");
        match client.get_laps(&LapFilters::new()) {
            Err(ClientError::Decode { status, .. }) => assert_eq!(status, 200),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_object_instead_of_array_fails() {
        let client = client(r#"{"detail": "No results found."}"#);
        assert!(matches!(
            client.get_pits(&PitFilters::new()),
            Err(ClientError::Decode { .. })
        ));
    }

    #[test]
    fn test_one_bad_record_fails_whole_call() {
        let client = client(r#"[{"lap_number": 3}, {"lap_number": "three"}]"#);
        assert!(client.get_pits(&PitFilters::new()).is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        let client = OpenF1Client::with_transport("api.openf1.org", RecordingTransport::new("[]"));
        assert!(matches!(
            client.get_laps(&LapFilters::new()),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(client.transport().urls().is_empty());
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        let client = OpenF1Client::new("http://127.0.0.1:1/v1");
        assert!(matches!(
            client.get_laps(&LapFilters::new()),
            Err(ClientError::Transport { .. })
        ));
    }
}
