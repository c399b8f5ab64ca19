pub mod ids;
pub mod player;

pub use ids::{FormationId, PlayerId, SlotId};
pub use player::{Player, PlayerStatus, PlayerView};
