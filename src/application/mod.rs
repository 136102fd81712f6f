pub mod user_facade;

pub use user_facade::*;
