use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are facts: immutable once emitted, versioned for schema evolution,
/// and applied in the order they were produced.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.product.added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
