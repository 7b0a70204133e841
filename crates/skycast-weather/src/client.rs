//! HTTP client for the provider's daily-forecast endpoint.

use std::time::Duration;

use tracing::instrument;

use crate::error::NetworkError;
use crate::types::ForecastQuery;

const FORECAST_API_BASE: &str = "https://api.openweathermap.org/data/2.5/forecast/daily";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Number of daily entries requested per fetch.
pub const FORECAST_DAYS: u32 = 14;

/// The provider is always asked for metric values; conversion to the
/// preferred unit system happens at display time.
const WIRE_UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new() -> Result<Self, NetworkError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: FORECAST_API_BASE.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn new_with_base_url(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("failed to build test client"),
            base_url: base_url.to_string(),
        }
    }

    /// Fetch the raw daily-forecast JSON for a query.
    ///
    /// Fails with `NetworkError` on connection failure, timeout, or a
    /// non-success HTTP status.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch(&self, query: &ForecastQuery) -> Result<String, NetworkError> {
        let url = format!(
            "{}?q={}&mode=json&units={}&cnt={}",
            self.base_url,
            urlencoding::encode(&query.location),
            WIRE_UNITS,
            FORECAST_DAYS,
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NetworkError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnitSystem;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> WeatherClient {
        WeatherClient::new_with_base_url(&server.uri(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("q", "94043"))
            .and(query_param("units", "metric"))
            .and(query_param("cnt", "14"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"list":[]}"#))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let query = ForecastQuery::new("94043", UnitSystem::Metric);
        let body = client.fetch(&query).await.unwrap();

        assert_eq!(body, r#"{"list":[]}"#);
    }

    #[tokio::test]
    async fn test_fetch_encodes_location() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("q", "Mountain View, CA"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let query = ForecastQuery::new("Mountain View, CA", UnitSystem::Metric);
        assert!(client.fetch(&query).await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("city not found"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let query = ForecastQuery::new("nowhere", UnitSystem::Metric);
        let err = client.fetch(&query).await.unwrap_err();

        match err {
            NetworkError::ServerError { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "city not found");
            }
            other => panic!("expected ServerError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client =
            WeatherClient::new_with_base_url(&mock_server.uri(), Duration::from_millis(50));
        let query = ForecastQuery::new("94043", UnitSystem::Metric);
        let err = client.fetch(&query).await.unwrap_err();

        assert!(matches!(err, NetworkError::Timeout));
    }
}
