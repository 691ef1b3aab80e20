use serde::Deserialize;

/// A person from the `people` collection. Only the fields the index needs.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Pilot {
    pub name: String,
    /// Resource URL, referenced from `Starship::pilots`
    pub url: String,
}
