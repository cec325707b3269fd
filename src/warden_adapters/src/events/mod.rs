pub mod recording_event_publisher;
pub mod webhook_event_publisher;
