/// Identifies entities that expose a stable unique identifier.
///
/// Ids are opaque strings: generated ones are UUIDs, but legacy persisted
/// data may carry arbitrary values and they are honored verbatim.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}
