use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Starship {
    pub name: String,
    /// Raw passenger count; SWAPI uses strings such as "6", "n/a" or "unknown".
    /// A bare JSON number is kept as its text.
    #[serde(default, deserialize_with = "text_or_number")]
    pub passengers: Option<String>,
    /// Pilot resource URLs
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pilots: Vec<String>,
}

/// Passenger capacity as declared by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassengerCapacity {
    Known(u32),
    /// Missing, a placeholder, or anything that is not a non-negative integer
    Unknown(Option<String>),
}

impl PassengerCapacity {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(count) => PassengerCapacity::Known(count),
                Err(_) => PassengerCapacity::Unknown(Some(value.to_string())),
            },
            None => PassengerCapacity::Unknown(None),
        }
    }

    pub fn known(&self) -> Option<u32> {
        match self {
            PassengerCapacity::Known(count) => Some(*count),
            PassengerCapacity::Unknown(_) => None,
        }
    }
}

impl Starship {
    pub fn passenger_capacity(&self) -> PassengerCapacity {
        PassengerCapacity::parse(self.passengers.as_deref())
    }

    pub fn has_pilots(&self) -> bool {
        !self.pilots.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
