// crates/lineup_core/src/tactics/mod.rs
// Formation types and the built-in catalog

pub mod catalog;
pub mod formation;

pub use catalog::{FormationCatalog, DEFAULT_FORMATION_ID};
pub use formation::{BoardPosition, Formation, RoleCategory, Slot};
