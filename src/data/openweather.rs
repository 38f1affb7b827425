use chrono::{Local, NaiveDate, Timelike};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::weather::{
    ForecastDay, TrendSeries, WeatherRecord, icon_url, parse_sample_time, round_temp, trend_label,
};

const API_URL: &str = "https://api.openweathermap.org/data/2.5";
const OUTLOOK_DAYS: usize = 3;
const NOON_HOUR: u32 = 12;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no match for city '{0}'")]
    CityNotFound(String),
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("weather service rejected the request: {0}")]
    Upstream(String),
    #[error("malformed weather payload: {0}")]
    Malformed(&'static str),
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(API_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches current conditions and the 5-day/3-hour forecast concurrently
    /// and reduces them into one [`WeatherRecord`]. Any failure in either
    /// request yields an error and no partial record.
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        let (current, forecast) = tokio::try_join!(self.current(city), self.forecast(city))?;

        let CurrentResponse {
            name,
            sys,
            main,
            wind,
            weather,
        } = current;
        let conditions = weather
            .into_iter()
            .next()
            .ok_or(FetchError::Malformed("current response has no weather block"))?;

        let today = Local::now().date_naive();
        let outlook = select_daily_outlook(&forecast.list, today);
        let trend = self.fetch_trend(city).await;

        Ok(WeatherRecord {
            city_name: name,
            country_code: sys.country,
            humidity_pct: main.humidity,
            current_temp_c: round_temp(main.temp),
            wind_speed: wind.speed,
            min_temp_c: round_temp(main.temp_min),
            max_temp_c: round_temp(main.temp_max),
            icon_url: icon_url(&conditions.icon),
            description: conditions.description,
            forecast: outlook,
            trend,
        })
    }

    /// Independent forecast pass backing the trend chart. Failures degrade to
    /// an empty series instead of failing the whole record.
    pub async fn fetch_trend(&self, city: &str) -> TrendSeries {
        match self.forecast(city).await {
            Ok(payload) => collect_trend_series(&payload.list),
            Err(err) => {
                tracing::error!(city, error = %err, "trend fetch failed");
                TrendSeries::default()
            }
        }
    }

    async fn current(&self, city: &str) -> Result<CurrentResponse, FetchError> {
        self.get_json(city, "weather").await
    }

    async fn forecast(&self, city: &str) -> Result<ForecastResponse, FetchError> {
        self.get_json(city, "forecast").await
    }

    async fn get_json<T>(&self, city: &str, endpoint: &str) -> Result<T, FetchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(format!("{}/{endpoint}", self.base_url))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::CityNotFound(city.to_string()));
        }
        if !response.status().is_success() {
            return Err(FetchError::Upstream(upstream_message(response).await));
        }

        Ok(response.json::<T>().await?)
    }
}

/// Pulls the `message` OpenWeatherMap attaches to error bodies, falling back
/// to the bare status.
async fn upstream_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => format!("{status}: {}", parsed.message),
            Err(_) => status.to_string(),
        },
        Err(_) => status.to_string(),
    }
}

/// 3-day outlook selection: scan samples in API order and keep the noon
/// sample of each calendar day after `today`, stopping at three days. Today
/// is skipped since current conditions already cover it; samples with an
/// unparseable timestamp are skipped.
pub fn select_daily_outlook(samples: &[ForecastSample], today: NaiveDate) -> Vec<ForecastDay> {
    let mut selected = Vec::new();
    let mut seen_dates = HashSet::new();

    for sample in samples {
        let Some(time) = parse_sample_time(&sample.dt_txt) else {
            continue;
        };
        let date = time.date();
        if seen_dates.contains(&date) || date == today || time.hour() != NOON_HOUR {
            continue;
        }
        let Some(condition) = sample.weather.first() else {
            continue;
        };

        selected.push(ForecastDay {
            date: sample.dt_txt.clone(),
            temp_c: round_temp(sample.main.temp),
            icon_code: condition.icon.clone(),
        });
        seen_dates.insert(date);

        if selected.len() == OUTLOOK_DAYS {
            break;
        }
    }

    selected
}

/// Trend reduction: one `(label, raw temperature)` pair per distinct
/// formatted date, in API order. The first sample of a day wins regardless
/// of its time-of-day.
pub fn collect_trend_series(samples: &[ForecastSample]) -> TrendSeries {
    let mut series = TrendSeries::default();

    for sample in samples {
        let Some(time) = parse_sample_time(&sample.dt_txt) else {
            continue;
        };
        let label = trend_label(time);
        if series.dates.contains(&label) {
            continue;
        }
        series.dates.push(label);
        series.temperatures.push(sample.main.temp);
    }

    series
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSample {
    pub dt_txt: String,
    pub main: SampleMain,
    #[serde(default)]
    pub weather: Vec<SampleCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleMain {
    pub temp: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleCondition {
    pub icon: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastSample>,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    sys: SysBlock,
    main: MainBlock,
    wind: WindBlock,
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    country: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f32,
    humidity: f32,
    temp_min: f32,
    temp_max: f32,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f32,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
