//! Scripted dispatcher double shared by the unit tests.

use crate::ports::{DispatchResult, Dispatcher, Event, EventKind};
use async_trait::async_trait;
use std::any::Any;
use std::collections::VecDeque;
use std::sync::Mutex;

pub(crate) struct SentRequest {
    pub kind: EventKind,
    input: Box<dyn Any + Send>,
}

impl SentRequest {
    pub fn input<T: 'static>(&self) -> &T {
        self.input
            .downcast_ref::<T>()
            .unwrap_or_else(|| panic!("{} was sent with a different input type", self.kind))
    }
}

/// Replays scripted results in order and records every request it receives.
#[derive(Default)]
pub(crate) struct ScriptedDispatcher {
    replies: Mutex<VecDeque<(EventKind, Box<dyn Any + Send>)>>,
    sent: Mutex<Vec<SentRequest>>,
}

impl ScriptedDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply<E: Event>(self, result: DispatchResult<E::Output>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back((E::KIND, Box::new(result)));
        self
    }

    pub fn take_sent(&self) -> Vec<SentRequest> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }
}

#[async_trait]
impl Dispatcher for ScriptedDispatcher {
    async fn send<E: Event>(&self, input: E::Input) -> DispatchResult<E::Output> {
        self.sent.lock().unwrap().push(SentRequest {
            kind: E::KIND,
            input: Box::new(input),
        });

        let (kind, reply) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply left for {}", E::KIND));
        assert_eq!(kind, E::KIND, "scripted reply is for a different event");

        *reply
            .downcast::<DispatchResult<E::Output>>()
            .unwrap_or_else(|_| panic!("scripted reply for {} has the wrong type", E::KIND))
    }
}
