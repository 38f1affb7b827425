use clap::Parser;

use crate::{
    cli::Cli,
    domain::weather::{ForecastDay, TrendSeries, WeatherRecord},
};

pub(crate) fn test_cli() -> Cli {
    Cli::parse_from(["skycast", "--api-key", "test-key"])
}

pub(crate) fn sample_record(city: &str) -> WeatherRecord {
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
        forecast: vec![
            ForecastDay {
                date: "2026-02-13 12:00:00".to_string(),
                temp_c: 8,
                icon_code: "04d".to_string(),
            },
            ForecastDay {
                date: "2026-02-14 12:00:00".to_string(),
                temp_c: 6,
                icon_code: "10d".to_string(),
            },
            ForecastDay {
                date: "2026-02-15 12:00:00".to_string(),
                temp_c: 5,
                icon_code: "13d".to_string(),
            },
        ],
        trend: TrendSeries {
            dates: vec![
                "12 Feb".to_string(),
                "13 Feb".to_string(),
                "14 Feb".to_string(),
            ],
            temperatures: vec![7.2, 8.4, 5.9],
        },
    }
}
