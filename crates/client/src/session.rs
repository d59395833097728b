//! Session-level signals published by the response interceptor.
//!
//! Rather than performing an ambient jump to the login page from inside
//! the client, the 401 branch publishes an explicit redirect signal on a
//! watch channel; whoever owns the session (the bin, or a test) subscribes
//! and reacts. Publishing is fire-and-forget and never fails, with or
//! without subscribers.

use tokio::sync::watch;

/// Where the session should be sent next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
}

#[derive(Clone)]
pub struct SessionEvents {
    tx: watch::Sender<Option<Redirect>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Subscribe to redirect signals. The receiver starts at `None`.
    pub fn subscribe(&self) -> watch::Receiver<Option<Redirect>> {
        self.tx.subscribe()
    }

    pub(crate) fn redirect_to_login(&self) {
        self.tx.send_replace(Some(Redirect::Login));
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let session = SessionEvents::new();
        session.redirect_to_login();
        assert_eq!(*session.subscribe().borrow(), Some(Redirect::Login));
    }

    #[tokio::test]
    async fn subscriber_observes_redirect() {
        let session = SessionEvents::new();
        let mut rx = session.subscribe();
        assert_eq!(*rx.borrow(), None);
        session.redirect_to_login();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Some(Redirect::Login));
    }
}
