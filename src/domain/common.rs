//! Shared traits for entities held by the expense store.

use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the list.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
