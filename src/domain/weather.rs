use chrono::NaiveDateTime;

/// Normalized weather for one tracked city, produced fresh on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub city_name: String,
    pub country_code: String,
    pub humidity_pct: f32,
    pub current_temp_c: i32,
    pub wind_speed: f32,
    pub min_temp_c: i32,
    pub max_temp_c: i32,
    pub icon_url: String,
    pub description: String,
    pub forecast: Vec<ForecastDay>,
    pub trend: TrendSeries,
}

/// One future calendar day, represented by its noon forecast sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    /// Source timestamp string (`dt_txt`) of the chosen sample.
    pub date: String,
    pub temp_c: i32,
    pub icon_code: String,
}

/// Per-day temperature samples backing the trend chart. `dates` and
/// `temperatures` are equal-length and index-aligned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    pub dates: Vec<String>,
    pub temperatures: Vec<f32>,
}

impl TrendSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }
}

pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

pub fn icon_url(code: &str) -> String {
    format!("https://openweathermap.org/img/wn/{code}@2x.png")
}

/// Parses an OpenWeatherMap forecast timestamp (`2024-05-01 12:00:00`).
pub fn parse_sample_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok()
}

/// `day month` label used for trend axis entries, e.g. `1 May`.
pub fn trend_label(time: NaiveDateTime) -> String {
    time.format("%-d %b").to_string()
}

/// Terminal stand-in for the OpenWeatherMap icon bitmaps. Codes share a
/// numeric prefix per condition family (`01d`/`01n` clear, `10d` rain, ...).
pub fn icon_glyph(code: &str) -> &'static str {
    match code.get(..2) {
        Some("01") => "☀",
        Some("02" | "03" | "04") => "☁",
        Some("09" | "10") => "☂",
        Some("11") => "⚡",
        Some("13") => "❄",
        Some("50") => "░",
        _ => "☁",
    }
}
