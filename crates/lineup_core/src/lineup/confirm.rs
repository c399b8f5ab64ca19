use crate::models::FormationId;

/// A board operation that throws away placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestructiveAction {
    Reset { placed: usize, benched: usize },
    SwitchFormation { from: FormationId, to: FormationId, placed: usize, benched: usize },
}

/// Asks the user before a destructive operation. Returning `false` aborts it.
pub trait Confirm {
    fn confirm(&mut self, action: &DestructiveAction) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&DestructiveAction) -> bool,
{
    fn confirm(&mut self, action: &DestructiveAction) -> bool {
        self(action)
    }
}

/// Outcome of a confirmable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Applied,
    /// User said no; nothing changed.
    Declined,
    /// Nothing to do (same formation selected).
    Unchanged,
}
