//! Stable identifiers for data records.

use serde::{Deserialize, Serialize};

/// Numeric weapon identifier, stable across the wire and the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponId(pub u16);

impl std::fmt::Display for WeaponId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "weapon#{}", self.0)
    }
}
