use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{FormationId, SlotId};

/// Coarse role of a slot. Only `Keeper` takes part in save validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Keeper,
    Defense,
    Midfield,
    Forward,
}

impl RoleCategory {
    pub fn is_keeper(&self) -> bool {
        matches!(self, RoleCategory::Keeper)
    }
}

/// Board coordinates in percent of the pitch drawing.
///
/// `x`: 0 = left touchline, 100 = right touchline.
/// `y`: 0 = opponent goal line (top), 100 = own goal line (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoardPosition {
    pub x: f32,
    pub y: f32,
}

impl BoardPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Slot {
    pub id: SlotId,
    /// Short label drawn on an empty slot (`GK`, `CB`, `ST`).
    pub label: String,
    pub role: RoleCategory,
    pub position: BoardPosition,
}

impl Slot {
    pub fn new(id: &str, label: &str, role: RoleCategory, x: f32, y: f32) -> Self {
        Self {
            id: SlotId::from(id),
            label: label.to_string(),
            role,
            position: BoardPosition::new(x, y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Formation {
    pub id: FormationId,
    pub name: String,
    pub slots: Vec<Slot>,
}

impl Formation {
    pub fn new(id: &str, name: &str, slots: Vec<Slot>) -> Self {
        Self { id: FormationId::from(id), name: name.to_string(), slots }
    }

    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slot(id).is_some()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot_ids(&self) -> impl Iterator<Item = &SlotId> {
        self.slots.iter().map(|slot| &slot.id)
    }

    pub fn keeper_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|slot| slot.role.is_keeper())
    }

    /// Returns (defenders, midfielders, forwards)
    pub fn line_counts(&self) -> (usize, usize, usize) {
        let count = |role: RoleCategory| self.slots.iter().filter(|s| s.role == role).count();
        (
            count(RoleCategory::Defense),
            count(RoleCategory::Midfield),
            count(RoleCategory::Forward),
        )
    }

    /// Structural checks the catalog runs on its own data.
    pub fn validate(&self) -> Result<(), String> {
        if self.slots.is_empty() {
            return Err(format!("Formation {} has no slots", self.id));
        }

        let mut seen = std::collections::HashSet::new();
        for slot in &self.slots {
            if !seen.insert(slot.id.as_str()) {
                return Err(format!("Formation {} repeats slot id {}", self.id, slot.id));
            }
            let BoardPosition { x, y } = slot.position;
            if !(0.0..=100.0).contains(&x) || !(0.0..=100.0).contains(&y) {
                return Err(format!("Slot {} of {} is off the board", slot.id, self.id));
            }
        }

        let keepers = self.keeper_slots().count();
        if keepers != 1 {
            return Err(format!("Formation {} must have exactly 1 keeper slot, found {}", self.id, keepers));
        }

        Ok(())
    }
}
