//! In-process fan-out of tournament events to connected sessions.
//!
//! One registry per process, keyed by tournament id. Services broadcast
//! after their transaction commits so clients never observe rolled-back
//! state.

use actix::prelude::*;
use dashmap::DashMap;
use uuid::Uuid;

use crate::ws::protocol::ServerMsg;

/// Outbound event delivered to a session actor.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct LiveEvent(pub ServerMsg);

#[derive(Default)]
pub struct TournamentSessionRegistry {
    sessions: DashMap<i64, DashMap<Uuid, Recipient<LiveEvent>>>,
}

impl TournamentSessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn register(&self, tournament_id: i64, recipient: Recipient<LiveEvent>) -> Uuid {
        let token = Uuid::new_v4();
        let entry = self
            .sessions
            .entry(tournament_id)
            .or_insert_with(DashMap::new);
        entry.insert(token, recipient);
        token
    }

    pub fn unregister(&self, tournament_id: i64, token: Uuid) {
        if let Some(entry) = self.sessions.get(&tournament_id) {
            entry.remove(&token);
            if entry.is_empty() {
                drop(entry);
                self.sessions.remove_if(&tournament_id, |_, v| v.is_empty());
            }
        }
    }

    pub fn broadcast(&self, tournament_id: i64, message: ServerMsg) {
        if let Some(entry) = self.sessions.get(&tournament_id) {
            let event = LiveEvent(message);
            for recipient in entry.iter() {
                recipient.value().do_send(event.clone());
            }
        }
    }

    pub fn subscriber_count(&self, tournament_id: i64) -> usize {
        self.sessions
            .get(&tournament_id)
            .map(|entry| entry.len())
            .unwrap_or(0)
    }
}
