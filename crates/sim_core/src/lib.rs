//! sim_core: the combat and movement simulation.
//!
//! Everything in this crate is deterministic and clock-agnostic: callers feed
//! in millisecond timestamps and elapsed seconds, the crate never reads a
//! wall clock. The network boundary and the relay server live elsewhere;
//! this crate only produces and consumes plain values.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]

pub mod arena;
pub mod body;
pub mod combat;
pub mod hitbox;
pub mod projectiles;
pub mod tick;
pub mod types;
pub mod weapons;
