use clap::Parser;

pub const DEFAULT_CITIES: [&str; 6] = [
    "Gandhinagar",
    "Moscow",
    "New York",
    "Tokyo",
    "London",
    "Sydney",
];

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Multi-city terminal weather dashboard"
)]
pub struct Cli {
    /// Cities to load on startup (defaults to a fixed world tour)
    pub cities: Vec<String>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Override the weather API base URL
    #[arg(long)]
    pub api_url: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn startup_cities(&self) -> Vec<String> {
        if self.cities.is_empty() {
            DEFAULT_CITIES
                .iter()
                .map(|city| (*city).to_string())
                .collect()
        } else {
            self.cities.clone()
        }
    }
}
