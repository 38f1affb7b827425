use skycast::data::openweather::{FetchError, WeatherClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Stockholm",
        "sys": {"country": "SE"},
        "main": {"temp": 7.4, "humidity": 72, "temp_min": 1.2, "temp_max": 8.6},
        "wind": {"speed": 3.6},
        "weather": [{"icon": "04d", "description": "overcast clouds"}]
    })
}

fn forecast_payload() -> serde_json::Value {
    serde_json::json!({
        "list": [
            forecast_entry("2024-05-01 09:00:00", 20.0, "04d"),
            forecast_entry("2024-05-01 12:00:00", 21.4, "10d"),
            forecast_entry("2024-05-01 15:00:00", 23.0, "10d"),
            forecast_entry("2024-05-02 12:00:00", 18.6, "01d"),
            forecast_entry("2024-05-03 12:00:00", 17.2, "13d"),
            forecast_entry("2024-05-04 12:00:00", 16.0, "04d"),
        ]
    })
}

fn forecast_entry(dt_txt: &str, temp: f64, icon: &str) -> serde_json::Value {
    serde_json::json!({
        "dt_txt": dt_txt,
        "main": {"temp": temp},
        "weather": [{"icon": icon}]
    })
}

async fn mock_endpoint(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .and(query_param("q", "Stockholm"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_weather_builds_a_complete_record() {
    let server = MockServer::start().await;
    mock_endpoint(&server, "weather", current_payload()).await;
    mock_endpoint(&server, "forecast", forecast_payload()).await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let record = client.fetch_weather("Stockholm").await.unwrap();

    assert_eq!(record.city_name, "Stockholm");
    assert_eq!(record.country_code, "SE");
    assert_eq!(record.current_temp_c, 7);
    assert_eq!(record.min_temp_c, 1);
    assert_eq!(record.max_temp_c, 9);
    assert_eq!(record.humidity_pct, 72.0);
    assert_eq!(record.wind_speed, 3.6);
    assert_eq!(record.description, "overcast clouds");
    assert_eq!(
        record.icon_url,
        "https://openweathermap.org/img/wn/04d@2x.png"
    );
}

#[tokio::test]
async fn fetch_weather_selects_three_noon_days() {
    let server = MockServer::start().await;
    mock_endpoint(&server, "weather", current_payload()).await;
    mock_endpoint(&server, "forecast", forecast_payload()).await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let record = client.fetch_weather("Stockholm").await.unwrap();

    let dates: Vec<&str> = record.forecast.iter().map(|day| day.date.as_str()).collect();
    assert_eq!(
        dates,
        [
            "2024-05-01 12:00:00",
            "2024-05-02 12:00:00",
            "2024-05-03 12:00:00"
        ]
    );
    let temps: Vec<i32> = record.forecast.iter().map(|day| day.temp_c).collect();
    assert_eq!(temps, [21, 19, 17]);
}

#[tokio::test]
async fn fetch_weather_attaches_first_sample_per_day_trend() {
    let server = MockServer::start().await;
    mock_endpoint(&server, "weather", current_payload()).await;
    mock_endpoint(&server, "forecast", forecast_payload()).await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let record = client.fetch_weather("Stockholm").await.unwrap();

    assert_eq!(record.trend.dates, ["1 May", "2 May", "3 May", "4 May"]);
    assert_eq!(record.trend.temperatures, [20.0, 18.6, 17.2, 16.0]);
}

#[tokio::test]
async fn unknown_city_maps_to_city_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let err = client.fetch_weather("Stockholm").await.unwrap_err();

    assert!(matches!(err, FetchError::CityNotFound(_)));
    assert!(err.to_string().contains("Stockholm"));
}

#[tokio::test]
async fn upstream_rejection_carries_the_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"cod": 401, "message": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url(server.uri(), "bad-key");
    let err = client.fetch_weather("Stockholm").await.unwrap_err();

    assert!(matches!(err, FetchError::Upstream(_)));
    assert!(err.to_string().contains("Invalid API key"));
}

#[tokio::test]
async fn missing_weather_block_is_a_malformed_payload() {
    let server = MockServer::start().await;
    let mut current = current_payload();
    current["weather"] = serde_json::json!([]);
    mock_endpoint(&server, "weather", current).await;
    mock_endpoint(&server, "forecast", forecast_payload()).await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let err = client.fetch_weather("Stockholm").await.unwrap_err();

    assert!(matches!(err, FetchError::Malformed(_)));
}

#[tokio::test]
async fn trend_failure_degrades_to_an_empty_series() {
    let server = MockServer::start().await;
    mock_endpoint(&server, "weather", current_payload()).await;
    // First forecast call (the record's outlook) succeeds; the trend's
    // second call hits the 500 fallback below.
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let record = client.fetch_weather("Stockholm").await.unwrap();

    assert!(record.trend.is_empty());
    assert_eq!(record.trend.dates.len(), record.trend.temperatures.len());
    assert_eq!(record.forecast.len(), 3);
}

#[tokio::test]
async fn fetch_trend_never_propagates_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = WeatherClient::with_base_url(server.uri(), "test-key");
    let series = client.fetch_trend("Stockholm").await;

    assert!(series.is_empty());
}
