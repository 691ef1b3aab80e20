// Intergalactic Airways
// Joins SWAPI pilots and starships into a passenger-capacity index

pub mod verbosity;
pub mod config;
pub mod models;
pub mod client;
pub mod index;
pub mod shell;

// Re-export commonly used types
pub use models::{
    pilot::Pilot,
    starship::{Starship, PassengerCapacity},
    responses::Page,
};

pub use client::{FetchError, PageCursor, PageSource, SwapiClient};
pub use config::{AirwaysConfig, Cli, ConfigError};
pub use index::{IndexEntry, IndexReport, ShipIndex, ShipIndexBuilder};
pub use shell::Shell;

// Constants
pub const API_BASE_URL: &str = "https://swapi.dev/api/";
