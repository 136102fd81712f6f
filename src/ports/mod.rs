pub mod config_store;
pub mod dispatcher;
pub mod event;

pub use config_store::*;
pub use dispatcher::*;
pub use event::{Event, EventKind};
