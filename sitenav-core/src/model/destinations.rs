//! Destination entities for the typed search
//!
//! Buildings and their apartments are flattened into [`SearchCandidate`]s,
//! each carrying both the raw (untranslated) name and the display name.

use serde::{Deserialize, Serialize};

use crate::NodeId;

/// Building as delivered by the resident data API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: u32,
    /// Raw name or translation key
    pub name: String,
    /// Map node at the building entrance
    #[serde(default, alias = "nodeId")]
    pub node_id: Option<NodeId>,
    #[serde(default)]
    pub apartments: Vec<Apartment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub id: u32,
    /// Apartment number as shown on the door
    pub number: String,
    /// Optional label, e.g. a family name
    #[serde(default)]
    pub name: Option<String>,
}

/// Entity a search candidate points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DestinationEntity {
    Building { building_id: u32 },
    Apartment { building_id: u32, apartment_id: u32 },
}

/// Destination annotated with its raw and translated names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub entity: DestinationEntity,
    pub raw_name: String,
    pub display_name: String,
    /// Map node to route to, when known
    pub node_id: Option<NodeId>,
}

impl SearchCandidate {
    pub fn new(
        entity: DestinationEntity,
        raw_name: impl Into<String>,
        display_name: impl Into<String>,
        node_id: Option<NodeId>,
    ) -> Self {
        Self {
            entity,
            raw_name: raw_name.into(),
            display_name: display_name.into(),
            node_id,
        }
    }
}

/// Produces display names from raw names or translation keys
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

/// Leaves names as they are
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translate for Untranslated {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Flatten buildings and their apartments into search candidates.
///
/// Apartments inherit the entrance node of their building.
pub fn flatten_buildings<T: Translate + ?Sized>(
    buildings: &[Building],
    translator: &T,
) -> Vec<SearchCandidate> {
    let capacity = buildings.iter().map(|b| b.apartments.len() + 1).sum();
    let mut candidates = Vec::with_capacity(capacity);

    for building in buildings {
        let building_display = translator.translate(&building.name);

        candidates.push(SearchCandidate::new(
            DestinationEntity::Building {
                building_id: building.id,
            },
            building.name.clone(),
            building_display.clone(),
            building.node_id,
        ));

        for apartment in &building.apartments {
            let (raw_name, display_name) = match &apartment.name {
                Some(label) => (
                    format!("{} {} {}", building.name, apartment.number, label),
                    format!(
                        "{} {} {}",
                        building_display,
                        apartment.number,
                        translator.translate(label)
                    ),
                ),
                None => (
                    format!("{} {}", building.name, apartment.number),
                    format!("{} {}", building_display, apartment.number),
                ),
            };

            candidates.push(SearchCandidate::new(
                DestinationEntity::Apartment {
                    building_id: building.id,
                    apartment_id: apartment.id,
                },
                raw_name,
                display_name,
                building.node_id,
            ));
        }
    }

    candidates
}
