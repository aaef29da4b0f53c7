use tracing::{info, warn};

use crate::{
    model::{LookupOutcome, Query, QueryError},
    provider::{FetchError, WeatherProvider},
};

/// Turns a city name into one of the three lookup outcomes.
///
/// Each call is independent: there is no cache and no in-flight tracking.
#[derive(Debug)]
pub struct WeatherLookup {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherLookup {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Never fails; every provider error is folded into the outcome.
    pub async fn lookup(&self, query: &Query) -> LookupOutcome {
        match self.provider.current(query).await {
            Ok(reading) => LookupOutcome::Found(reading),
            Err(FetchError::NotFound) => {
                info!(city = %query, "location not found");
                LookupOutcome::NotFound
            }
            Err(err) => {
                warn!(city = %query, error = %err, "weather lookup failed");
                LookupOutcome::NetworkError(err.to_string())
            }
        }
    }

    /// Validates raw input first. Blank input is rejected without a request.
    pub async fn search(&self, raw: &str) -> Result<LookupOutcome, QueryError> {
        let query = Query::parse(raw)?;
        Ok(self.lookup(&query).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::Condition,
        provider::{
            http::ReqwestTransport,
            openweather::{DEFAULT_ENDPOINT, OpenWeatherProvider},
        },
        testing::{FakeTransport, RAIN_BODY},
    };
    use std::sync::Arc;

    fn lookup_with(transport: &Arc<FakeTransport>) -> WeatherLookup {
        let provider = OpenWeatherProvider::with_transport("KEY", DEFAULT_ENDPOINT, transport.clone());
        WeatherLookup::new(Box::new(provider))
    }

    #[tokio::test]
    async fn blank_input_issues_no_request() {
        let transport = Arc::new(FakeTransport::replying(200, RAIN_BODY));
        let lookup = lookup_with(&transport);

        for raw in ["", "   ", "\t\n"] {
            assert_eq!(lookup.search(raw).await, Err(QueryError::Empty));
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn trimmed_city_is_sent_exactly_once() {
        let transport = Arc::new(FakeTransport::replying(200, RAIN_BODY));
        let lookup = lookup_with(&transport);

        lookup.search("  New York  ").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].param("q"), Some("New York"));
    }

    #[tokio::test]
    async fn found_outcome_carries_reading() {
        let transport = Arc::new(FakeTransport::replying(200, RAIN_BODY));
        let outcome = lookup_with(&transport).search("Bergen").await.unwrap();

        match outcome {
            LookupOutcome::Found(reading) => {
                assert_eq!(reading.temperature_celsius, 22);
                assert_eq!(reading.condition_main, Condition::Rain);
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn not_found_status_maps_to_not_found() {
        let transport = Arc::new(FakeTransport::replying(404, "{}"));
        let outcome = lookup_with(&transport).search("Nowhere").await.unwrap();
        assert_eq!(outcome, LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn server_error_and_transport_failure_map_to_network_error() {
        let transport = Arc::new(FakeTransport::replying(500, "oops"));
        let outcome = lookup_with(&transport).search("Paris").await.unwrap();
        assert!(matches!(outcome, LookupOutcome::NetworkError(_)));

        let transport = Arc::new(FakeTransport::failing("dns error"));
        let outcome = lookup_with(&transport).search("Paris").await.unwrap();
        assert!(matches!(outcome, LookupOutcome::NetworkError(reason) if reason.contains("dns error")));
    }

    #[tokio::test]
    async fn network_error_reason_omits_api_key() {
        let provider = OpenWeatherProvider::with_transport(
            "TOPSECRETKEY",
            "http://127.0.0.1:9/weather",
            Arc::new(ReqwestTransport::default()),
        );
        let lookup = WeatherLookup::new(Box::new(provider));

        match lookup.search("Oslo").await.unwrap() {
            LookupOutcome::NetworkError(reason) => {
                assert!(!reason.contains("TOPSECRETKEY"), "{reason}");
            }
            other => panic!("expected NetworkError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn repeated_lookup_yields_same_outcome() {
        let transport = Arc::new(FakeTransport::replying(200, RAIN_BODY));
        let lookup = lookup_with(&transport);
        let query = Query::parse("Bergen").unwrap();

        let first = lookup.lookup(&query).await;
        let second = lookup.lookup(&query).await;

        assert_eq!(first, second);
        assert_eq!(transport.requests().len(), 2);
    }
}
