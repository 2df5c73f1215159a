use serde::{Deserialize, Serialize};

/// A single entry in the directory.
///
/// `id` is owned by the store: whatever a caller sends is replaced on create and update.
/// Fields missing from an incoming JSON object take their zero value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Query string accepted on `/contacts`.
///
/// Decoded from the raw key/value pairs so a repeated `id` resolves to its first value
/// instead of failing the request.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct ContactQuery {
    pub id: Option<String>,
}

impl From<Vec<(String, String)>> for ContactQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let id = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value));
        Self { id }
    }
}

impl ContactQuery {
    /// Resolves the `id` parameter.
    ///
    /// Returns `None` when the parameter is absent or empty. A value that does not parse
    /// as an id resolves to `0`, which is never assigned by the store.
    pub fn contact_id(&self) -> Option<u32> {
        match self.id.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse().unwrap_or(0)),
        }
    }
}
