//! In-process byte channels with non-blocking drain helpers.

use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Clone)]
pub struct Tx(Sender<Vec<u8>>);
pub struct Rx(Receiver<Vec<u8>>);

/// Unbounded sender/receiver pair.
#[must_use]
pub fn channel() -> (Tx, Rx) {
    let (s, r) = mpsc::channel::<Vec<u8>>();
    (Tx(s), Rx(r))
}

impl Tx {
    /// False when the receiver side is gone.
    #[must_use]
    pub fn try_send(&self, bytes: Vec<u8>) -> bool {
        self.0.send(bytes).is_ok()
    }
}

impl Rx {
    #[must_use]
    pub fn try_recv(&self) -> Option<Vec<u8>> {
        self.0.try_recv().ok()
    }

    /// Everything currently queued, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        while let Some(b) = self.try_recv() {
            out.push(b);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order() {
        let (tx, rx) = channel();
        assert!(tx.try_send(vec![1]));
        assert!(tx.try_send(vec![2]));
        assert_eq!(rx.drain(), vec![vec![1], vec![2]]);
        assert!(rx.try_recv().is_none());
    }

    #[test]
    fn send_fails_after_receiver_drop() {
        let (tx, rx) = channel();
        drop(rx);
        assert!(!tx.try_send(vec![0]));
    }
}
