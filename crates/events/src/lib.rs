//! Domain events and the notification surface.

pub mod event;
pub mod notify;

pub use event::Event;
pub use notify::{NotificationSink, RecordingSink, TracingSink};
