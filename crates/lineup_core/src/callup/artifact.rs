use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{FormationId, PlayerId, SlotId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallUpEntry {
    pub slot_id: SlotId,
    pub player_id: PlayerId,
}

/// A finished call-up, built at save time and handed to a sink.
///
/// Wire form: `{category, formationId, assignments: [{slotId, playerId}], createdAt}`.
/// `assignments` follow the formation's slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallUp {
    pub category: String,
    pub formation_id: FormationId,
    pub assignments: Vec<CallUpEntry>,
    pub created_at: DateTime<Utc>,
}

impl CallUp {
    pub fn player_for(&self, slot: &str) -> Option<&PlayerId> {
        self.assignments.iter().find(|e| e.slot_id.as_str() == slot).map(|e| &e.player_id)
    }

    pub fn assignment_map(&self) -> BTreeMap<SlotId, PlayerId> {
        self.assignments.iter().map(|e| (e.slot_id.clone(), e.player_id.clone())).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(CallUp)
    }
}

/// Row shape of the hosted `convocatorias` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCallUp {
    pub category: String,
    pub alineacion: String,
    pub convocatoria: Vec<StoredEntry>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub posicion: String,
    #[serde(rename = "jugadorId")]
    pub jugador_id: String,
}

impl From<&CallUp> for StoredCallUp {
    fn from(call_up: &CallUp) -> Self {
        Self {
            category: call_up.category.clone(),
            alineacion: call_up.formation_id.to_string(),
            convocatoria: call_up
                .assignments
                .iter()
                .map(|e| StoredEntry { posicion: e.slot_id.to_string(), jugador_id: e.player_id.to_string() })
                .collect(),
            created_at: call_up.created_at.to_rfc3339(),
        }
    }
}
