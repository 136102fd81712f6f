pub mod user;
pub mod workspace;

pub use user::*;
pub use workspace::*;
