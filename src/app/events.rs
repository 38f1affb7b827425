use crossterm::event::{Event, EventStream};
use futures::{StreamExt, future};

use crate::{data::openweather::WeatherClient, domain::weather::WeatherRecord};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    FetchStarted,
    SearchSucceeded {
        city: String,
        record: Box<WeatherRecord>,
    },
    SearchFailed {
        city: String,
        error: String,
    },
    InitialLoaded(Vec<(String, WeatherRecord)>),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Resolves one user-searched city on a background task. The task logs the
/// failure itself and reports the outcome back as an event; it is never
/// cancelled, so a result may arrive for a city removed in the meantime.
pub fn spawn_search(tx: tokio::sync::mpsc::Sender<AppEvent>, client: WeatherClient, city: String) {
    tokio::spawn(async move {
        match client.fetch_weather(&city).await {
            Ok(record) => {
                let _ = tx
                    .send(AppEvent::SearchSucceeded {
                        city,
                        record: Box::new(record),
                    })
                    .await;
            }
            Err(err) => {
                tracing::error!(%city, error = %err, "weather fetch failed");
                let _ = tx
                    .send(AppEvent::SearchFailed {
                        city,
                        error: err.to_string(),
                    })
                    .await;
            }
        }
    });
}

/// Startup batch: fetch every default city concurrently, join as one batch,
/// and silently drop the failures.
pub fn spawn_initial_load(
    tx: tokio::sync::mpsc::Sender<AppEvent>,
    client: WeatherClient,
    cities: Vec<String>,
) {
    tokio::spawn(async move {
        let fetches = cities.iter().map(|city| client.fetch_weather(city));
        let results = future::join_all(fetches).await;

        let loaded = cities
            .into_iter()
            .zip(results)
            .filter_map(|(city, result)| match result {
                Ok(record) => Some((city, record)),
                Err(err) => {
                    tracing::warn!(%city, error = %err, "dropping city after failed startup fetch");
                    None
                }
            })
            .collect();

        let _ = tx.send(AppEvent::InitialLoaded(loaded)).await;
    });
}
