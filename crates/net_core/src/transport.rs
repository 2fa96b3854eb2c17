//! Transport seam for framed message bytes.
//!
//! `LocalLoopbackTransport` is the in-process implementation used by the
//! harness and tests; a socket transport would live behind the same trait.

use crate::channel::{self, Rx, Tx};

#[derive(Debug, PartialEq, Eq)]
pub enum TrySendError {
    Disconnected,
}

pub trait Transport: Send {
    fn try_send(&self, bytes: Vec<u8>) -> Result<(), TrySendError>;
    fn try_recv(&self) -> Option<Vec<u8>>;
}

/// One endpoint of an in-process bidirectional pipe.
pub struct LocalLoopbackTransport {
    tx: Tx,
    rx: Rx,
}

impl LocalLoopbackTransport {
    /// Two connected endpoints; what one sends the other receives.
    #[must_use]
    pub fn pair() -> (Self, Self) {
        let (tx_a, rx_a) = channel::channel();
        let (tx_b, rx_b) = channel::channel();
        (Self { tx: tx_a, rx: rx_b }, Self { tx: tx_b, rx: rx_a })
    }
}

impl Transport for LocalLoopbackTransport {
    fn try_send(&self, bytes: Vec<u8>) -> Result<(), TrySendError> {
        if self.tx.try_send(bytes) {
            Ok(())
        } else {
            Err(TrySendError::Disconnected)
        }
    }

    fn try_recv(&self) -> Option<Vec<u8>> {
        self.rx.try_recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_is_bidirectional() {
        let (a, b) = LocalLoopbackTransport::pair();
        a.try_send(b"ping".to_vec()).expect("send");
        b.try_send(b"pong".to_vec()).expect("send");
        assert_eq!(b.try_recv(), Some(b"ping".to_vec()));
        assert_eq!(a.try_recv(), Some(b"pong".to_vec()));
        assert!(a.try_recv().is_none());
    }

    #[test]
    fn dropped_peer_surfaces_as_disconnected() {
        let (a, b) = LocalLoopbackTransport::pair();
        drop(b);
        assert_eq!(a.try_send(vec![0]), Err(TrySendError::Disconnected));
    }
}
