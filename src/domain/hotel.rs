use serde::{Deserialize, Serialize};

/// A single hotel entry returned by the proximity search.
///
/// Entries keep the order the backend returned them in; no dedup or
/// re-sorting happens on this side.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HotelSummary {
    pub id: String,
    pub name: String,
    pub address: String,
}

impl HotelSummary {
    #[must_use]
    pub fn new(id: String, name: String, address: String) -> Self {
        Self { id, name, address }
    }
}
