// Models module - SWAPI resource shapes

pub mod pilot;
pub mod starship;
pub mod responses;

// Re-export all models for easier imports
pub use pilot::*;
pub use starship::*;
pub use responses::*;
