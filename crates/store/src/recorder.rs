//! Login event recorder
//!
//! Hooked to the host's login-success notification. The notification model is
//! non-blocking, so recording is fire-and-forget: a store failure is logged
//! and the event dropped rather than surfaced to the login flow.

use std::sync::Arc;

use crate::backend::EventStore;
use crate::clock::Clock;
use crate::event::{LoginEvent, UserId};

/// Records a login event per successful login
pub struct LoginRecorder {
    store: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
}

impl LoginRecorder {
    /// Create a recorder writing to the given store
    pub fn new(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Record a login for `user_id`
    ///
    /// The event is stamped with the clock's current instant at recording
    /// time, never a caller-supplied one. Accepts any id the host notification
    /// supplies; existence is not validated here.
    pub async fn record_login(&self, user_id: UserId) {
        let event = LoginEvent::new(user_id, self.clock.now());

        if let Err(e) = self.store.append(event).await {
            tracing::warn!(
                user_id,
                store = self.store.name(),
                error = %e,
                "dropped login event"
            );
        }
    }
}
