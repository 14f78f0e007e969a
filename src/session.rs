use std::sync::Arc;

use tokio::sync::watch;

/// In-memory holder of the current auth token.
///
/// Starts empty; the login controller is the only path that writes a token,
/// and `clear` is the logout path. Clones share the same slot, and
/// `subscribe` hands out a watch receiver so the product list can reload when
/// the token changes.
#[derive(Debug, Clone)]
pub struct Session {
    slot: Arc<watch::Sender<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { slot: Arc::new(tx) }
    }

    /// Current token, if a login has completed.
    pub fn token(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Store the token issued by a successful login.
    pub fn set_token(&self, token: impl Into<String>) {
        self.slot.send_replace(Some(token.into()));
    }

    /// Drop the token (logout).
    pub fn clear(&self) {
        self.slot.send_replace(None);
    }

    /// Observe token changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.slot.subscribe()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
