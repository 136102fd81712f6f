pub mod config;
pub mod router;

pub use config::FileConfigStore;
pub use router::{EventHandler, EventRouter};
