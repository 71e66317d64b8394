//! Fields the farm API returns either as a bare identifier or as an
//! expanded object, depending on the endpoint and query parameters.

use serde::{Deserialize, Serialize};

/// Something that can be shown to the user by a single label.
pub trait Labelled {
    fn label(&self) -> &str;
}

/// A related record: either its identifier or the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Id(String),
    Expanded(T),
}

impl<T: Labelled> Reference<T> {
    /// Resolve to display text: the identifier as-is, or the expanded record's label
    pub fn label(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Expanded(value) => value.label(),
        }
    }
}
