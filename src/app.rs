//! Interactive lookup session
//!
//! Reads place names from stdin and runs the geocode -> forecast -> season
//! -> render pipeline for each. The two network calls run in strict
//! sequence, and the next prompt only appears once the previous cycle has
//! finished, so a new submission can never overlap an in-flight one. Errors
//! surface as one-line statuses and the session continues.

use crate::api::WeatherApiClient;
use crate::error::SeasonCastError;
use crate::presenter::{self, Console, DisplayModel, Status};
use crate::season;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// The interactive application: one client, one console, no other state
pub struct App {
    client: WeatherApiClient,
    console: Console,
    default_place: String,
}

impl App {
    /// Create an app around a configured API client
    #[must_use]
    pub fn new(client: WeatherApiClient, default_place: String) -> Self {
        Self {
            client,
            console: Console,
            default_place,
        }
    }

    /// Run one full lookup cycle for a query.
    ///
    /// Checks for blank input before any network call, then resolves the
    /// place, fetches its current conditions, derives the season, and
    /// builds the display strings.
    pub async fn lookup(&self, query: &str) -> crate::Result<DisplayModel> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SeasonCastError::EmptyQuery);
        }

        self.console
            .status(Status::Progress, "Looking up location...");
        let place = self.client.locate(query).await?;

        self.console
            .status(Status::Progress, "Fetching current weather...");
        let conditions = self
            .client
            .fetch_current(place.latitude, place.longitude, &place.timezone)
            .await?;

        let key = season::resolve(conditions.month0(), place.latitude);
        debug!("Resolved season {:?} for {}", key, place.name);

        Ok(presenter::render(&place, &conditions, key))
    }

    /// Run a cycle and report the outcome on the console
    async fn submit(&self, query: &str) {
        match self.lookup(query).await {
            Ok(model) => {
                self.console.show_card(&model);
                self.console
                    .status(Status::Success, &format!("Updated {}", model.updated));
            }
            Err(e) => {
                debug!("Lookup failed: {}", e);
                self.console.status(Status::Error, e.user_message());
            }
        }
    }

    /// Run the interactive session until EOF or `quit`.
    pub async fn run(&self) -> anyhow::Result<()> {
        // Friendly prefill, the equivalent of a fresh page load. Its
        // failure degrades to a neutral prompt, never an error banner.
        match self.lookup(&self.default_place).await {
            Ok(model) => {
                self.console.show_card(&model);
                self.console
                    .status(Status::Success, &format!("Updated {}", model.updated));
            }
            Err(_) => {
                self.console
                    .status(Status::Progress, "Enter a place to see its weather.");
            }
        }

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("place> ");
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            let query = line.trim();
            if query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") {
                break;
            }

            self.submit(query).await;
        }

        Ok(())
    }
}
