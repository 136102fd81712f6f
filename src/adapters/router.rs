use crate::ports::{DispatchError, DispatchResult, Dispatcher, Event, EventKind};
use async_trait::async_trait;
use dashmap::DashMap;
use std::any::Any;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// Type-erased handler for a single event kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, input: Box<dyn Any + Send>) -> DispatchResult<Box<dyn Any + Send>>;
}

struct FnHandler<E, F> {
    handler: F,
    _event: PhantomData<fn() -> E>,
}

#[async_trait]
impl<E, F, Fut> EventHandler for FnHandler<E, F>
where
    E: Event,
    F: Fn(E::Input) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = DispatchResult<E::Output>> + Send + 'static,
{
    async fn handle(&self, input: Box<dyn Any + Send>) -> DispatchResult<Box<dyn Any + Send>> {
        let input = input
            .downcast::<E::Input>()
            .map_err(|_| DispatchError::PayloadMismatch(E::KIND))?;
        let output = (self.handler)(*input).await?;
        Ok(Box::new(output) as Box<dyn Any + Send>)
    }
}

/// In-process [`Dispatcher`] that routes each event to the handler the
/// embedding system registered for its kind.
#[derive(Default)]
pub struct EventRouter {
    handlers: DashMap<EventKind, Arc<dyn EventHandler>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<E, F, Fut>(&self, handler: F)
    where
        E: Event,
        F: Fn(E::Input) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = DispatchResult<E::Output>> + Send + 'static,
    {
        self.register_handler(
            E::KIND,
            Arc::new(FnHandler::<E, F> {
                handler,
                _event: PhantomData,
            }),
        );
    }

    /// Replaces any handler already registered for `kind`.
    pub fn register_handler(&self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        if self.handlers.insert(kind, handler).is_some() {
            tracing::debug!(event = %kind, "Replaced event handler");
        } else {
            tracing::debug!(event = %kind, "Registered event handler");
        }
    }

    pub fn is_registered(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }
}

#[async_trait]
impl Dispatcher for EventRouter {
    async fn send<E: Event>(&self, input: E::Input) -> DispatchResult<E::Output> {
        let handler = self
            .handlers
            .get(&E::KIND)
            .map(|entry| Arc::clone(entry.value()));
        let Some(handler) = handler else {
            tracing::warn!(event = %E::KIND, "No handler registered");
            return Err(DispatchError::Unhandled(E::KIND));
        };

        let output = handler.handle(Box::new(input)).await?;
        output
            .downcast::<E::Output>()
            .map(|output| *output)
            .map_err(|_| DispatchError::PayloadMismatch(E::KIND))
    }
}
