use crate::domain::event::{EventArguments, EventName, GatewayEvent};
use crate::domain::message::MessageKind;
use crate::domain::ports::{EventSink, Transport, TransportRequest, TransportResponse};
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::RwLock;

/// A scripted transport answering with queued responses.
///
/// Every executed request is recorded, which lets tests assert whether the
/// gateway would have been called at all.
#[derive(Default, Clone)]
pub struct InMemoryTransport {
    responses: Arc<RwLock<VecDeque<TransportResponse>>>,
    requests: Arc<RwLock<Vec<TransportRequest>>>,
}

impl InMemoryTransport {
    /// Creates a transport with no scripted response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport answering with `responses`, in order.
    pub fn with_responses(responses: Vec<TransportResponse>) -> Self {
        Self {
            responses: Arc::new(RwLock::new(responses.into())),
            requests: Arc::default(),
        }
    }

    pub async fn push_response(&self, response: TransportResponse) {
        self.responses.write().await.push_back(response);
    }

    /// Requests executed so far.
    pub async fn requests(&self) -> Vec<TransportRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.write().await.push(request);
        self.responses
            .write()
            .await
            .pop_front()
            .ok_or_else(|| GatewayError::Transport("no scripted response left".to_string()))
    }
}

/// An event as seen by [`RecordingEventSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub name: EventName,
    pub kind: MessageKind,
    pub violation_count: usize,
    pub arguments: EventArguments,
}

/// Event sink keeping every event it receives.
#[derive(Default, Clone)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EventSink for RecordingEventSink {
    fn notify(&self, event: &mut GatewayEvent<'_>) {
        let recorded = RecordedEvent {
            name: event.name,
            kind: event.message.kind(),
            violation_count: event.message.violations().len(),
            arguments: event.arguments.clone(),
        };
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(recorded);
    }
}
