// src/services/holidays.rs
//! Public-holiday lookup backed by the Nager.Date API

use chrono::{Datelike, Local, NaiveDate};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::env;
use thiserror::Error;
use tracing::{debug, error};

pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v2";

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Holiday API returned {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Invalid holiday response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the `PublicHolidays` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HolidayRecord {
    /// `yyyy-mm-dd`
    pub date: String,
    #[serde(rename = "localName")]
    pub local_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "countryCode", default)]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayConfig {
    pub base_url: String,
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl HolidayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Reads `HOLIDAY_API_BASE_URL`, falling back to the public endpoint
    pub fn from_env() -> Self {
        env::var("HOLIDAY_API_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn public_holidays_url(&self, year: i32, country_code: &str) -> String {
        format!(
            "{}/PublicHolidays/{}/{}",
            self.base_url,
            year,
            urlencoding::encode(country_code)
        )
    }
}

#[derive(Debug, Clone)]
pub struct HolidayClient {
    client: Client,
    config: HolidayConfig,
}

impl Default for HolidayClient {
    fn default() -> Self {
        Self::new(HolidayConfig::default())
    }
}

impl HolidayClient {
    pub fn new(config: HolidayConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: HolidayConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &HolidayConfig {
        &self.config
    }

    /// Fetches every public holiday of `year` for the country
    pub async fn fetch_public_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<Vec<HolidayRecord>, HolidayError> {
        let url = self.config.public_holidays_url(year, country_code);
        debug!("Fetching public holidays from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    error!("Failed to read holiday API error body: {}", e);
                    String::new()
                }
            };
            error!("Holiday API error ({}): {}", status, body);
            return Err(HolidayError::UnexpectedStatus { status, body });
        }

        let body = response.text().await?;
        let records: Vec<HolidayRecord> = serde_json::from_str(&body)?;

        debug!(
            "Received {} holidays for {} in {}",
            records.len(),
            country_code,
            year
        );
        Ok(records)
    }

    /// Local names of the holidays falling on `date` (today when `None`).
    ///
    /// Empty when the date is not a holiday. A non-2xx response is reported
    /// as [`HolidayError::UnexpectedStatus`] without decoding its body.
    pub async fn holidays_on(
        &self,
        country_code: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<String>, HolidayError> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let records = self.fetch_public_holidays(date.year(), country_code).await?;

        let names = filter_local_names(records, date);
        debug!("{} holidays on {} for {}", names.len(), date, country_code);
        Ok(names)
    }
}

/// Looks up the holidays on `date` (today when `None`) with a default client
pub async fn holiday(
    country_code: &str,
    date: Option<NaiveDate>,
) -> Result<Vec<String>, HolidayError> {
    HolidayClient::default().holidays_on(country_code, date).await
}

/// Formats a date as `yyyy-mm-dd`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Keeps the local names of records dated exactly `date`, in response order
pub fn filter_local_names(records: Vec<HolidayRecord>, date: NaiveDate) -> Vec<String> {
    let date_string = format_date(date);
    records
        .into_iter()
        .filter(|record| record.date == date_string)
        .map(|record| record.local_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn us_2024() -> serde_json::Value {
        json!([
            {
                "date": "2024-01-01",
                "localName": "New Year's Day",
                "name": "New Year's Day",
                "countryCode": "US",
                "fixed": false,
                "global": true,
                "counties": null,
                "launchYear": null,
                "types": ["Public"]
            },
            { "date": "2024-07-04", "localName": "Independence Day", "name": "Independence Day", "countryCode": "US" },
            { "date": "2024-10-14", "localName": "Columbus Day", "name": "Columbus Day", "countryCode": "US" },
            { "date": "2024-10-14", "localName": "Indigenous Peoples' Day", "name": "Indigenous Peoples' Day", "countryCode": "US" }
        ])
    }

    async fn mock_holidays(server: &MockServer, route: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(response)
            .expect(1)
            .mount(server)
            .await;
    }

    #[test]
    fn test_format_date_zero_pads() {
        assert_eq!(format_date(ymd(2024, 1, 5)), "2024-01-05");
        assert_eq!(format_date(ymd(2024, 12, 25)), "2024-12-25");
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = HolidayConfig::new("http://localhost:8080/api/v2/");
        assert_eq!(
            config.public_holidays_url(2024, "US"),
            "http://localhost:8080/api/v2/PublicHolidays/2024/US"
        );
    }

    #[test]
    fn test_default_config_targets_nager() {
        assert_eq!(
            HolidayConfig::default().public_holidays_url(2021, "DE"),
            "https://date.nager.at/api/v2/PublicHolidays/2021/DE"
        );
    }

    #[test]
    fn test_config_from_env() {
        // Save original env var
        let original = env::var("HOLIDAY_API_BASE_URL").ok();

        env::set_var("HOLIDAY_API_BASE_URL", "http://holidays.internal/api/");
        assert_eq!(
            HolidayConfig::from_env().base_url,
            "http://holidays.internal/api"
        );

        env::set_var("HOLIDAY_API_BASE_URL", "   ");
        assert_eq!(HolidayConfig::from_env().base_url, DEFAULT_BASE_URL);

        env::remove_var("HOLIDAY_API_BASE_URL");
        assert_eq!(HolidayConfig::from_env(), HolidayConfig::default());

        // Restore
        if let Some(val) = original {
            env::set_var("HOLIDAY_API_BASE_URL", val);
        }
    }

    #[test]
    fn test_filter_keeps_response_order() {
        let records: Vec<HolidayRecord> = serde_json::from_value(us_2024()).unwrap();
        assert_eq!(
            filter_local_names(records.clone(), ymd(2024, 10, 14)),
            vec!["Columbus Day", "Indigenous Peoples' Day"]
        );
        assert!(filter_local_names(records, ymd(2024, 3, 3)).is_empty());
    }

    #[tokio::test]
    async fn test_holidays_on_matching_date() {
        let server = MockServer::start().await;
        mock_holidays(
            &server,
            "/PublicHolidays/2024/US",
            ResponseTemplate::new(200).set_body_json(us_2024()),
        )
        .await;

        let client = HolidayClient::new(HolidayConfig::new(server.uri()));
        let names = client
            .holidays_on("US", Some(ymd(2024, 7, 4)))
            .await
            .unwrap();

        assert_eq!(names, vec!["Independence Day"]);
    }

    #[tokio::test]
    async fn test_holidays_on_date_without_holiday_is_empty() {
        let server = MockServer::start().await;
        mock_holidays(
            &server,
            "/PublicHolidays/2024/US",
            ResponseTemplate::new(200).set_body_json(us_2024()),
        )
        .await;

        let client = HolidayClient::new(HolidayConfig::new(server.uri()));
        let names = client
            .holidays_on("US", Some(ymd(2024, 2, 29)))
            .await
            .unwrap();

        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_holidays_on_empty_response() {
        let server = MockServer::start().await;
        mock_holidays(
            &server,
            "/PublicHolidays/2023/NL",
            ResponseTemplate::new(200).set_body_json(json!([])),
        )
        .await;

        let client = HolidayClient::new(HolidayConfig::new(server.uri()));
        let names = client
            .holidays_on("NL", Some(ymd(2023, 4, 27)))
            .await
            .unwrap();

        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_holidays_on_defaults_to_today() {
        let today = Local::now().date_naive();
        let server = MockServer::start().await;
        mock_holidays(
            &server,
            &format!("/PublicHolidays/{}/GB", today.year()),
            ResponseTemplate::new(200).set_body_json(json!([
                { "date": format_date(today), "localName": "Test Day" }
            ])),
        )
        .await;

        let client = HolidayClient::new(HolidayConfig::new(server.uri()));
        let names = client.holidays_on("GB", None).await.unwrap();

        assert_eq!(names, vec!["Test Day"]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        mock_holidays(
            &server,
            "/PublicHolidays/2024/US",
            ResponseTemplate::new(200).set_body_string("{\"not\": \"a list\"}"),
        )
        .await;

        let client = HolidayClient::new(HolidayConfig::new(server.uri()));
        let result = client.holidays_on("US", Some(ymd(2024, 1, 1))).await;

        assert!(matches!(result, Err(HolidayError::Parse(_))));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        mock_holidays(
            &server,
            "/PublicHolidays/2024/XX",
            ResponseTemplate::new(404).set_body_string("unknown country"),
        )
        .await;

        let client = HolidayClient::new(HolidayConfig::new(server.uri()));
        let result = client.holidays_on("XX", Some(ymd(2024, 1, 1))).await;

        match result {
            Err(HolidayError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "unknown country");
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Nothing listens on the discard port
        let client = HolidayClient::new(HolidayConfig::new("http://127.0.0.1:9"));
        let result = client.holidays_on("US", Some(ymd(2024, 1, 1))).await;

        assert!(matches!(result, Err(HolidayError::Transport(_))));
    }
}
