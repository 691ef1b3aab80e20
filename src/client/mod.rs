// Client module - SWAPI HTTP client and pagination
pub mod api;
pub mod pagination;

pub use api::{PageSource, SwapiClient};
pub use pagination::{FetchError, PageCursor};
