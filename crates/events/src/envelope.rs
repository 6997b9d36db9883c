use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::Event;

/// Envelope for an event, adding the metadata a subscriber needs to order and
/// correlate what it receives.
///
/// Notes:
/// - `event_version` is the payload's schema version at publication.
/// - `sequence_number` is monotonically increasing per publisher.
/// - `recorded_at` is wall-clock time at publication, for diagnostics only.
/// - `payload` is the domain event itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    event_type: String,
    event_version: u32,
    sequence_number: u64,
    recorded_at: DateTime<Utc>,
    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    /// Wrap `payload` with a fresh UUIDv7 and the current time.
    pub fn record(sequence_number: u64, payload: E) -> Self {
        Self::new(Uuid::now_v7(), sequence_number, Utc::now(), payload)
    }

    pub fn new(
        event_id: Uuid,
        sequence_number: u64,
        recorded_at: DateTime<Utc>,
        payload: E,
    ) -> Self {
        Self {
            event_id,
            event_type: payload.event_type().to_string(),
            event_version: payload.version(),
            sequence_number,
            recorded_at,
            payload,
        }
    }
}

impl<E> EventEnvelope<E> {
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn event_version(&self) -> u32 {
        self.event_version
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}
