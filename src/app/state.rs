use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, spawn_initial_load, spawn_search},
    cli::Cli,
    data::openweather::WeatherClient,
    domain::weather::WeatherRecord,
};

/// Most cities the dashboard tracks at once; adding beyond this drops the
/// oldest entry.
pub const CITY_CAP: usize = 5;

const SEARCH_FAILED_ALERT: &str = "City not found or unable to fetch data";
const BLANK_SEARCH_ALERT: &str = "Please enter a city name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub loading: bool,
    pub loading_message: String,
    pub alert: Option<String>,
    /// Tracked city list, most-recently-added first.
    pub cities: Vec<String>,
    /// Display list, index-aligned with `cities` after every transition.
    pub records: Vec<WeatherRecord>,
    pub selected_card: usize,
    pub selected_trend: Option<usize>,
    pub query: String,
    client: WeatherClient,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let client = match &cli.api_url {
            Some(url) => WeatherClient::with_base_url(url.clone(), cli.api_key.clone()),
            None => WeatherClient::new(cli.api_key.clone()),
        };

        Self {
            mode: AppMode::Loading,
            running: true,
            loading: false,
            loading_message: "Initializing...".to_string(),
            alert: None,
            cities: Vec::new(),
            records: Vec::new(),
            selected_card: 0,
            selected_trend: None,
            query: String::new(),
            client,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                tx.send(AppEvent::FetchStarted).await?;
                spawn_initial_load(tx.clone(), self.client.clone(), cli.startup_cities());
            }
            AppEvent::FetchStarted => {
                self.loading = true;
                self.loading_message = "Fetching weather...".to_string();
            }
            AppEvent::InitialLoaded(loaded) => {
                self.loading = false;
                self.mode = AppMode::Ready;
                let (cities, records): (Vec<_>, Vec<_>) = loaded.into_iter().unzip();
                self.cities = cities;
                self.records = records;
            }
            AppEvent::SearchSucceeded { city, record } => {
                self.loading = false;
                self.alert = None;
                self.cities = prepend_capped(&self.cities, city, CITY_CAP);
                self.records = prepend_capped(&self.records, *record, CITY_CAP);
                self.selected_card = 0;
                self.selected_trend = self
                    .selected_trend
                    .map(|idx| idx + 1)
                    .filter(|idx| *idx < self.records.len());
                self.query.clear();
            }
            AppEvent::SearchFailed { .. } => {
                self.loading = false;
                self.alert = Some(SEARCH_FAILED_ALERT.to_string());
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                tx.send(AppEvent::Quit).await?;
            }
            KeyCode::Enter => self.submit_search(tx).await?,
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Left => {
                self.selected_card = self.selected_card.saturating_sub(1);
            }
            KeyCode::Right => {
                if !self.records.is_empty() {
                    self.selected_card = (self.selected_card + 1).min(self.records.len() - 1);
                }
            }
            KeyCode::Tab => self.toggle_trend(),
            KeyCode::Delete => self.remove_city(self.selected_card),
            KeyCode::Char(ch) if is_city_char(ch) => self.query.push(ch),
            _ => {}
        }

        Ok(())
    }

    async fn submit_search(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let city = self.query.trim().to_string();
        if city.is_empty() {
            self.alert = Some(BLANK_SEARCH_ALERT.to_string());
            return Ok(());
        }
        if self.loading {
            return Ok(());
        }

        tx.send(AppEvent::FetchStarted).await?;
        spawn_search(tx.clone(), self.client.clone(), city);
        Ok(())
    }

    /// Removes the card at `index` from the tracked-city list and display
    /// list in lock-step; out-of-range indexes are a no-op.
    pub fn remove_city(&mut self, index: usize) {
        if index >= self.records.len() {
            return;
        }

        self.cities = remove_at(&self.cities, index);
        self.records = remove_at(&self.records, index);

        self.selected_trend = match self.selected_trend {
            Some(open) if open == index => None,
            Some(open) if open > index => Some(open - 1),
            other => other,
        };
        if self.selected_card >= self.records.len() {
            self.selected_card = self.records.len().saturating_sub(1);
        }
    }

    pub fn toggle_trend(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected_trend = if self.selected_trend == Some(self.selected_card) {
            None
        } else {
            Some(self.selected_card)
        };
    }
}

/// Most-recent-first insert: the new entry lands at index 0 and anything past
/// `cap` entries falls off the end.
pub fn prepend_capped<T: Clone>(list: &[T], item: T, cap: usize) -> Vec<T> {
    let mut next = Vec::with_capacity(cap);
    next.push(item);
    next.extend(list.iter().take(cap.saturating_sub(1)).cloned());
    next
}

/// Copy of `list` without the entry at `index`; unchanged when out of range.
pub fn remove_at<T: Clone>(list: &[T], index: usize) -> Vec<T> {
    list.iter()
        .enumerate()
        .filter(|(idx, _)| *idx != index)
        .map(|(_, item)| item.clone())
        .collect()
}

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | ',' | '.')
}
