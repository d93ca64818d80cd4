use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::config::Limits;
use crate::input::{FurnitureItem, RoomSpec};

/// Key of the generic walkway record present in every result.
pub const WALKWAY_KEY: &str = "walkway_estimate";

pub fn doorway_key(name: &str) -> String {
    format!("{name}_doorway")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClearanceRecord {
    Doorway {
        passes: bool,
        note: String,
    },
    Walkway {
        minimum_inches: u32,
        preferred_inches: u32,
        note: String,
    },
}

impl ClearanceRecord {
    /// `None` for the walkway record, which carries no pass/fail verdict.
    pub fn passes(&self) -> Option<bool> {
        match self {
            ClearanceRecord::Doorway { passes, .. } => Some(*passes),
            ClearanceRecord::Walkway { .. } => None,
        }
    }

    pub fn note(&self) -> &str {
        match self {
            ClearanceRecord::Doorway { note, .. } | ClearanceRecord::Walkway { note, .. } => note,
        }
    }
}

/// Insertion-ordered clearance records, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clearances {
    entries: Vec<(String, ClearanceRecord)>,
}

impl Clearances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced record keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, record: ClearanceRecord) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = record,
            None => self.entries.push((key, record)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ClearanceRecord> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClearanceRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Clearances {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}

/// Outcome of the clearance stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearanceCheck {
    pub clearances: Clearances,
    pub issues: Vec<String>,
}

impl ClearanceCheck {
    pub fn run(room: &RoomSpec, furniture: &[FurnitureItem], limits: &Limits) -> Self {
        let mut clearances = Clearances::new();
        let mut issues = Vec::new();
        let room_length_in = room.length_in();
        let room_width_in = room.width_in();

        for item in furniture {
            let larger = item.larger_dim();
            if larger > limits.doorway_in {
                clearances.insert(
                    doorway_key(&item.name),
                    ClearanceRecord::Doorway {
                        passes: false,
                        note: format!(
                            "May not fit through standard {}\" doorway ({larger}\")",
                            limits.doorway_in
                        ),
                    },
                );
            }

            // One edge against a wall, the other against the fixed depth allowance.
            let shallow = item.depth_in <= limits.depth_allowance_in;
            let fits_length = item.width_in <= room_length_in && shallow;
            let fits_width = item.width_in <= room_width_in && shallow;
            if !(fits_length || fits_width) {
                issues.push(format!(
                    "{} ({}\"x{}\") too large for room",
                    item.name, item.width_in, item.depth_in
                ));
            }
        }

        clearances.insert(
            WALKWAY_KEY,
            ClearanceRecord::Walkway {
                minimum_inches: limits.walkway_min_in,
                preferred_inches: limits.walkway_preferred_in,
                note: format!(
                    "Ensure {}-{}\" clearance for main walkways",
                    limits.walkway_min_in, limits.walkway_preferred_in
                ),
            },
        );

        Self { clearances, issues }
    }

    /// Doorway failures alone never invalidate a layout.
    pub fn layout_valid(&self) -> bool {
        self.issues.is_empty()
    }
}
