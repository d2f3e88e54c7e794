//! Filter sets and request URL construction
//!
//! Every resource exposes a struct of optional filters. Present filters are
//! rendered as `name=value` pairs in declaration order; absent filters are
//! left out entirely.

use url::Url;

use super::error::{ClientError, FilterError};

/// A set of optional, named query filters for one resource.
pub trait QueryFilters: Default {
    /// Declared filter names, in the order they are emitted.
    fn names() -> &'static [&'static str];

    /// Present filters only, rendered to strings, in declaration order.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Set a filter from raw text, e.g. a command line argument.
    fn set(&mut self, name: &str, raw: &str) -> Result<(), FilterError>;

    fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Declare a filter struct: every field becomes `Option<T>`, a chained setter
/// and an entry in the emitted query, in the order written here.
macro_rules! filter_set {
    (
        $(#[$meta:meta])*
        $name:ident { $($field:ident : $ty:ty),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $field: Option<$ty>,)*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl $crate::api::query::QueryFilters for $name {
            fn names() -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }

            fn query_pairs(&self) -> Vec<(&'static str, String)> {
                let mut pairs = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        pairs.push((stringify!($field), value.to_string()));
                    }
                )*
                pairs
            }

            fn set(
                &mut self,
                name: &str,
                raw: &str,
            ) -> Result<(), $crate::api::error::FilterError> {
                match name {
                    $(
                        stringify!($field) => {
                            let value = raw.trim().parse::<$ty>().map_err(|_| {
                                $crate::api::error::FilterError::InvalidValue {
                                    name: name.to_string(),
                                    value: raw.to_string(),
                                }
                            })?;
                            self.$field = Some(value);
                            Ok(())
                        }
                    )*
                    _ => Err($crate::api::error::FilterError::Unknown {
                        name: name.to_string(),
                        expected: <Self as $crate::api::query::QueryFilters>::names().join(", "),
                    }),
                }
            }
        }
    };
}

pub(crate) use filter_set;

/// Join `base_url` and a resource path, then append the present filters as a
/// form-encoded query. No `?` is emitted when every filter is absent.
pub fn build_url<F: QueryFilters>(
    base_url: &str,
    path: &str,
    filters: &F,
) -> Result<Url, ClientError> {
    let raw = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let mut url = Url::parse(&raw).map_err(|source| ClientError::InvalidUrl {
        url: raw.clone(),
        source,
    })?;

    let pairs = filters.query_pairs();
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(&pairs);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::{build_url, ClientError, FilterError, QueryFilters};

    filter_set! {
        SampleFilters {
            session_key: u32,
            team_name: String,
            driver_number: u32,
        }
    }

    const BASE: &str = "https://api.openf1.org/v1";

    #[test]
    fn test_no_filters_emits_no_query() {
        let url = build_url(BASE, "laps", &SampleFilters::new()).unwrap();
        assert_eq!(url.as_str(), "https://api.openf1.org/v1/laps");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_pairs_follow_declaration_order() {
        // Setter call order must not matter
        let filters = SampleFilters::new().driver_number(44u32).session_key(9161u32);
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("session_key", "9161".to_string()),
                ("driver_number", "44".to_string())
            ]
        );

        let url = build_url(BASE, "/laps", &filters).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.openf1.org/v1/laps?session_key=9161&driver_number=44"
        );
    }

    #[test]
    fn test_values_are_encoded() {
        let filters = SampleFilters::new().team_name("Red Bull & Co");
        let url = build_url(BASE, "drivers", &filters).unwrap();
        assert_eq!(url.query(), Some("team_name=Red+Bull+%26+Co"));

        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            decoded,
            vec![("team_name".to_string(), "Red Bull & Co".to_string())]
        );
    }

    #[test]
    fn test_trailing_slash_on_base() {
        let url = build_url("https://example.test/v1/", "pit", &SampleFilters::new()).unwrap();
        assert_eq!(url.as_str(), "https://example.test/v1/pit");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = build_url("not a url", "pit", &SampleFilters::new()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn test_set_from_raw_text() {
        let mut filters = SampleFilters::new();
        filters.set("session_key", " 9161 ").unwrap();
        filters.set("team_name", "Ferrari").unwrap();
        assert_eq!(filters.session_key, Some(9161));
        assert_eq!(filters.team_name.as_deref(), Some("Ferrari"));
        assert!(!filters.is_empty());

        assert_eq!(
            filters.set("driver_number", "one"),
            Err(FilterError::InvalidValue {
                name: "driver_number".to_string(),
                value: "one".to_string(),
            })
        );

        match filters.set("lap_number", "3") {
            Err(FilterError::Unknown { name, expected }) => {
                assert_eq!(name, "lap_number");
                assert_eq!(expected, "session_key, team_name, driver_number");
            }
            other => panic!("expected unknown filter error, got {:?}", other),
        }
    }
}
