//! client_core: one client's view of the match.
//!
//! [`client::GameClient`] owns the local player simulation and the remote
//! mirrors, turns an input snapshot into outbound messages once per tick,
//! and applies inbound broadcasts. It is transport-free: the harness (or a
//! real socket shell) moves the bytes.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::struct_excessive_bools)]
#![allow(clippy::missing_panics_doc)]

pub mod client;
pub mod input;
pub mod mirror;
pub mod mouselook;
