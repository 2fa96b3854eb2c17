//! server_core: the relay.
//!
//! The server owns the roster, assigns ids, fans broadcasts out, and runs
//! the respawn and round timers. It does NOT verify combat: damage reports
//! are applied as received, a deliberate, documented trust model. A
//! production deployment would run the `sim_core` combat path here as the
//! authority and demote client reports to hints.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]

pub mod hub;
pub mod session;

pub use hub::ServerHub;
pub use session::{Audience, Outgoing, ServerState};
