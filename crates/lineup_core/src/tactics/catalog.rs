// Static formation catalog used by the call-up board.
// Coordinates are percentages of the pitch drawing, own goal at the bottom.

use once_cell::sync::Lazy;

use super::formation::{Formation, RoleCategory, Slot};
use crate::error::{LineupError, Result};

use RoleCategory::{Defense, Forward, Keeper, Midfield};

pub const DEFAULT_FORMATION_ID: &str = "4-3-3";

static CATALOG: Lazy<Vec<Formation>> = Lazy::new(|| {
    vec![
        FormationCatalog::create_433(),
        FormationCatalog::create_442(),
        FormationCatalog::create_4231(),
        FormationCatalog::create_343(),
        FormationCatalog::create_4123(),
    ]
});

/// Read-only lookup over the built-in formations.
pub struct FormationCatalog;

impl FormationCatalog {
    pub fn all() -> &'static [Formation] {
        &CATALOG
    }

    pub fn ids() -> Vec<&'static str> {
        CATALOG.iter().map(|f| f.id.as_str()).collect()
    }

    pub fn get(id: &str) -> Option<&'static Formation> {
        CATALOG.iter().find(|f| f.id.as_str() == id)
    }

    pub fn lookup(id: &str) -> Result<&'static Formation> {
        Self::get(id).ok_or_else(|| LineupError::UnknownFormation(id.to_string()))
    }

    pub fn default_formation() -> &'static Formation {
        // The default id is part of the static table above.
        &CATALOG[0]
    }

    // ============================================================================
    // Formation Definitions
    // ============================================================================

    /// 4-3-3 Ofensivo
    fn create_433() -> Formation {
        Formation::new(
            "4-3-3",
            "4-3-3 Ofensivo",
            vec![
                Slot::new("gk", "GK", Keeper, 50.0, 88.0),
                Slot::new("lb", "LB", Defense, 15.0, 70.0),
                Slot::new("lcb", "CB", Defense, 38.0, 72.0),
                Slot::new("rcb", "CB", Defense, 62.0, 72.0),
                Slot::new("rb", "RB", Defense, 85.0, 70.0),
                Slot::new("cdm", "CDM", Midfield, 50.0, 55.0),
                Slot::new("lcm", "CM", Midfield, 30.0, 45.0),
                Slot::new("rcm", "CM", Midfield, 70.0, 45.0),
                Slot::new("lw", "LW", Forward, 15.0, 25.0),
                Slot::new("st", "ST", Forward, 50.0, 20.0),
                Slot::new("rw", "RW", Forward, 85.0, 25.0),
            ],
        )
    }

    /// 4-4-2 Clásico
    fn create_442() -> Formation {
        Formation::new(
            "4-4-2",
            "4-4-2 Clásico",
            vec![
                Slot::new("gk", "GK", Keeper, 50.0, 88.0),
                Slot::new("lb", "LB", Defense, 15.0, 70.0),
                Slot::new("lcb", "CB", Defense, 38.0, 72.0),
                Slot::new("rcb", "CB", Defense, 62.0, 72.0),
                Slot::new("rb", "RB", Defense, 85.0, 70.0),
                Slot::new("lm", "LM", Midfield, 15.0, 45.0),
                Slot::new("lcm", "CM", Midfield, 38.0, 45.0),
                Slot::new("rcm", "CM", Midfield, 62.0, 45.0),
                Slot::new("rm", "RM", Midfield, 85.0, 45.0),
                Slot::new("lst", "ST", Forward, 35.0, 20.0),
                Slot::new("rst", "ST", Forward, 65.0, 20.0),
            ],
        )
    }

    /// 4-2-3-1, double pivot behind three attacking midfielders
    fn create_4231() -> Formation {
        Formation::new(
            "4-2-3-1",
            "4-2-3-1",
            vec![
                Slot::new("gk", "GK", Keeper, 50.0, 88.0),
                Slot::new("lb", "LB", Defense, 15.0, 70.0),
                Slot::new("lcb", "CB", Defense, 38.0, 72.0),
                Slot::new("rcb", "CB", Defense, 62.0, 72.0),
                Slot::new("rb", "RB", Defense, 85.0, 70.0),
                Slot::new("ldm", "CDM", Midfield, 35.0, 55.0),
                Slot::new("rdm", "CDM", Midfield, 65.0, 55.0),
                Slot::new("lam", "LAM", Midfield, 20.0, 35.0),
                Slot::new("cam", "CAM", Midfield, 50.0, 35.0),
                Slot::new("ram", "RAM", Midfield, 80.0, 35.0),
                Slot::new("st", "ST", Forward, 50.0, 15.0),
            ],
        )
    }

    /// 3-4-3, back three with wide midfielders
    fn create_343() -> Formation {
        Formation::new(
            "3-4-3",
            "3-4-3",
            vec![
                Slot::new("gk", "GK", Keeper, 50.0, 88.0),
                Slot::new("lcb", "CB", Defense, 20.0, 75.0),
                Slot::new("cb", "CB", Defense, 50.0, 75.0),
                Slot::new("rcb", "CB", Defense, 80.0, 75.0),
                Slot::new("lm", "LM", Midfield, 10.0, 50.0),
                Slot::new("lcm", "CM", Midfield, 35.0, 50.0),
                Slot::new("rcm", "CM", Midfield, 65.0, 50.0),
                Slot::new("rm", "RM", Midfield, 90.0, 50.0),
                Slot::new("lw", "LW", Forward, 20.0, 25.0),
                Slot::new("st", "ST", Forward, 50.0, 20.0),
                Slot::new("rw", "RW", Forward, 80.0, 25.0),
            ],
        )
    }

    /// 4-1-2-3, single pivot and two advanced eights
    fn create_4123() -> Formation {
        Formation::new(
            "4-1-2-3",
            "4-1-2-3",
            vec![
                Slot::new("gk", "GK", Keeper, 50.0, 88.0),
                Slot::new("lb", "LB", Defense, 15.0, 70.0),
                Slot::new("lcb", "CB", Defense, 38.0, 75.0),
                Slot::new("rcb", "CB", Defense, 62.0, 75.0),
                Slot::new("rb", "RB", Defense, 85.0, 70.0),
                Slot::new("cdm", "CDM", Midfield, 50.0, 60.0),
                Slot::new("lam", "CAM", Midfield, 30.0, 40.0),
                Slot::new("ram", "CAM", Midfield, 70.0, 40.0),
                Slot::new("lw", "LW", Forward, 15.0, 25.0),
                Slot::new("st", "ST", Forward, 50.0, 20.0),
                Slot::new("rw", "RW", Forward, 85.0, 25.0),
            ],
        )
    }
}
