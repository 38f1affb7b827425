#![allow(dead_code)]

use clap::Parser;
use skycast::{
    app::state::{AppMode, AppState},
    cli::Cli,
    domain::weather::{ForecastDay, TrendSeries, WeatherRecord},
};

pub fn test_cli() -> Cli {
    // Point fetches at a closed local port so no test ever leaves the machine.
    Cli::parse_from([
        "skycast",
        "--api-key",
        "test-key",
        "--api-url",
        "http://127.0.0.1:9",
    ])
}

pub fn record(city: &str) -> WeatherRecord {
    WeatherRecord {
        city_name: city.to_string(),
        country_code: "SE".to_string(),
        humidity_pct: 72.0,
        current_temp_c: 7,
        wind_speed: 3.6,
        min_temp_c: 1,
        max_temp_c: 9,
        icon_url: "https://openweathermap.org/img/wn/04d@2x.png".to_string(),
        description: "overcast clouds".to_string(),
        forecast: vec![ForecastDay {
            date: "2026-02-13 12:00:00".to_string(),
            temp_c: 8,
            icon_code: "04d".to_string(),
        }],
        trend: TrendSeries {
            dates: vec!["12 Feb".to_string(), "13 Feb".to_string()],
            temperatures: vec![7.2, 8.4],
        },
    }
}

pub fn ready_state_with_cities(cli: &Cli, cities: &[&str]) -> AppState {
    let mut state = AppState::new(cli);
    state.mode = AppMode::Ready;
    state.cities = cities.iter().map(ToString::to_string).collect();
    state.records = cities.iter().map(|city| record(city)).collect();
    state
}
