pub mod event;

pub use event::{AppEvent, Event, EventHandler};
