//! data_runtime: authored-data schemas and loaders for the arena shooter.
//!
//! Everything here is read once at startup: the weapon catalog, the arena
//! layout, the match rules and the input/movement tuning. Each loader falls
//! back to in-code defaults (the reference tuning) when the TOML file is
//! absent, so the workspace runs without a data directory.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod arena;
pub mod ids;
pub mod input;
pub mod rules;
pub mod weapons;

use std::path::PathBuf;

/// Workspace data root: `data/` next to the workspace `Cargo.toml`, or a
/// crate-local `data/` when the crate is consumed standalone.
pub(crate) fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}
