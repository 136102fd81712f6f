//! User and workspace facade over an injected event dispatcher.
//!
//! [`UserFacade`] builds one typed request per operation, hands it to a
//! [`Dispatcher`], and returns the dispatcher's result unchanged.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod test_support;

pub use application::{FacadeResult, UserFacade};
pub use ports::{DispatchError, DispatchResult, Dispatcher, Event, EventKind};
