//! Root shell: re-exports for workspace crates plus the loopback harness.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub use client_core as client;
pub use collision_static as collision;
pub use data_runtime as data;
pub use net_core as net;
pub use server_core as server;
pub use sim_core as sim;

pub mod harness;
