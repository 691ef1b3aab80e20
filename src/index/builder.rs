use std::collections::HashMap;
use crate::client::{FetchError, PageCursor, PageSource};
use crate::config::AirwaysConfig;
use crate::index::ShipIndex;
use crate::models::{PassengerCapacity, Pilot, Starship};
use crate::{v_debug, v_info};

/// Pilot resource URL -> display name
pub type PilotTable = HashMap<String, String>;

/// Builds a `ShipIndex` from the people and starships collections.
///
/// Pilots are loaded first so every starship can resolve its pilot URLs.
/// Any fetch failure aborts the whole build.
pub struct ShipIndexBuilder<'a, S: ?Sized> {
    source: &'a S,
    people_url: String,
    starships_url: String,
}

impl<'a, S> ShipIndexBuilder<'a, S>
where
    S: PageSource + ?Sized,
{
    pub fn new(source: &'a S, people_url: impl Into<String>, starships_url: impl Into<String>) -> Self {
        Self {
            source,
            people_url: people_url.into(),
            starships_url: starships_url.into(),
        }
    }

    pub fn from_config(source: &'a S, config: &AirwaysConfig) -> Self {
        Self::new(source, config.people_url(), config.starships_url())
    }

    pub async fn build(&self) -> Result<ShipIndex, FetchError> {
        let pilots = self.load_pilots().await?;

        v_info!("🚀 Loading starships from {}", self.starships_url);
        let mut index = ShipIndex::default();
        index.report.pilots = pilots.len();

        let mut starships = PageCursor::<S, Starship>::new(self.source, self.starships_url.as_str());
        while let Some(starship) = starships.next_item().await? {
            add_starship(&mut index, &starship, &pilots);
        }

        index.report.entries = index.len();
        v_info!("✅ Ship index ready: {}", index.report);
        Ok(index)
    }

    pub async fn load_pilots(&self) -> Result<PilotTable, FetchError> {
        v_info!("👤 Loading pilots from {}", self.people_url);
        let mut pilots = PilotTable::new();
        PageCursor::<S, Pilot>::new(self.source, self.people_url.as_str())
            .for_each(|pilot| {
                pilots.insert(pilot.url, pilot.name);
            })
            .await?;
        Ok(pilots)
    }
}

fn add_starship(index: &mut ShipIndex, starship: &Starship, pilots: &PilotTable) {
    index.report.starships += 1;

    if !starship.has_pilots() {
        v_debug!("⏭️ {}: no pilots", starship.name);
        index.report.skipped_no_pilots += 1;
        return;
    }

    let capacity = match starship.passenger_capacity() {
        PassengerCapacity::Known(capacity) => capacity,
        PassengerCapacity::Unknown(raw) => {
            v_debug!("⏭️ {}: passenger count {:?} is not a number", starship.name, raw);
            index.report.skipped_unknown_capacity += 1;
            return;
        }
    };

    for pilot_url in &starship.pilots {
        let Some(pilot_name) = pilots.get(pilot_url) else {
            v_debug!("⏭️ {}: unknown pilot {}", starship.name, pilot_url);
            index.report.skipped_unknown_pilots += 1;
            continue;
        };

        let label = ShipIndex::composite_label(&starship.name, pilot_name);
        if index.insert(label, capacity) {
            v_debug!("⚠️ Label collision for {} - {}, keeping the latest capacity", starship.name, pilot_name);
            index.report.collisions += 1;
        }
    }
}
