// Ship/pilot passenger index
pub mod builder;

use std::collections::HashMap;
use std::fmt;

pub use builder::{PilotTable, ShipIndexBuilder};

/// One ship/pilot pairing and the ship's passenger capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub label: String,
    pub capacity: u32,
}

/// Counters collected while the index was built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexReport {
    pub pilots: usize,
    pub starships: usize,
    pub entries: usize,
    pub skipped_no_pilots: usize,
    pub skipped_unknown_capacity: usize,
    /// Pairings dropped because the pilot URL was not in the pilot table
    pub skipped_unknown_pilots: usize,
    /// Inserts that replaced an existing label
    pub collisions: usize,
}

impl fmt::Display for IndexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries from {} starships and {} pilots (skipped: {} without pilots, {} without capacity, {} unknown pilots; {} label collisions)",
            self.entries,
            self.starships,
            self.pilots,
            self.skipped_no_pilots,
            self.skipped_unknown_capacity,
            self.skipped_unknown_pilots,
            self.collisions
        )
    }
}

/// Immutable lookup from composite label ("ship - pilot") to passenger capacity.
///
/// Entries keep insertion order. Re-inserting an existing label replaces its
/// capacity in place.
#[derive(Debug, Clone, Default)]
pub struct ShipIndex {
    entries: Vec<IndexEntry>,
    positions: HashMap<String, usize>,
    report: IndexReport,
}

impl ShipIndex {
    pub fn composite_label(ship_name: &str, pilot_name: &str) -> String {
        format!("{} - {}", ship_name, pilot_name)
    }

    /// Labels of every pairing that can carry at least `min_passengers`, in insertion order.
    pub fn query(&self, min_passengers: u32) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.capacity >= min_passengers)
            .map(|entry| entry.label.as_str())
            .collect()
    }

    pub fn capacity_of(&self, label: &str) -> Option<u32> {
        self.positions.get(label).map(|&i| self.entries[i].capacity)
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn report(&self) -> &IndexReport {
        &self.report
    }

    /// Returns true when the label already existed and was overwritten.
    fn insert(&mut self, label: String, capacity: u32) -> bool {
        match self.positions.get(&label) {
            Some(&i) => {
                self.entries[i].capacity = capacity;
                true
            }
            None => {
                self.positions.insert(label.clone(), self.entries.len());
                self.entries.push(IndexEntry { label, capacity });
                false
            }
        }
    }
}

impl FromIterator<(String, u32)> for ShipIndex {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut index = ShipIndex::default();
        for (label, capacity) in iter {
            if index.insert(label, capacity) {
                index.report.collisions += 1;
            }
        }
        index.report.entries = index.len();
        index
    }
}
