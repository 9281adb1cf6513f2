//! Synchronous change notification.
//!
//! Observers run inside the mutating call, after the state change and
//! before the call returns. Rejected moves notify nobody.

use crate::coordinate::Coordinate;
use crate::outcome::Outcome;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use tracing::{debug, trace};

/// A successful engine mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    MoveAccepted {
        /// Who moved.
        player: Player,
        /// Where.
        coordinate: Coordinate,
        /// Set when the move ended the game.
        outcome: Option<Outcome>,
    },
    /// Board cleared, scores kept.
    GameReset,
    /// Board cleared and scores zeroed.
    AllReset,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("subscription#{}", _0)]
pub struct SubscriptionId(u64);

enum Subscriber {
    Callback(Box<dyn FnMut(&GameEvent)>),
    Channel(mpsc::Sender<GameEvent>),
}

/// Registered observers, notified in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Box<dyn FnMut(&GameEvent)>) -> SubscriptionId {
        self.insert(Subscriber::Callback(callback))
    }

    pub(crate) fn subscribe_channel(&mut self) -> mpsc::Receiver<GameEvent> {
        let (sender, receiver) = mpsc::channel();
        self.insert(Subscriber::Channel(sender));
        receiver
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Delivers `event` to every subscriber; channels whose receiver is
    /// gone are dropped.
    pub(crate) fn notify(&mut self, event: &GameEvent) {
        trace!(?event, subscribers = self.subscribers.len(), "Notifying observers");
        self.subscribers.retain_mut(|(id, subscriber)| match subscriber {
            Subscriber::Callback(callback) => {
                callback(event);
                true
            }
            Subscriber::Channel(sender) => {
                let delivered = sender.send(*event).is_ok();
                if !delivered {
                    debug!(%id, "Dropping disconnected channel subscriber");
                }
                delivered
            }
        });
    }

    fn insert(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        debug!(%id, "Observer subscribed");
        id
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
