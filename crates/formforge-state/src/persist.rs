//! Serialized session layout.
//!
//! Mirrors the builder UI's storage layout: the field list and selection
//! live under a session-scoped key, the naming configuration under a
//! separate longer-lived key. This module only defines the shapes and the
//! JSON round trip; where the bytes go is the caller's concern.

use formforge_core::{ComponentInfo, Field, FieldId};
use serde::{Deserialize, Serialize};

use crate::store::FormStore;

/// Session-scoped storage key for the field list and selection.
pub const SESSION_STORAGE_KEY: &str = "form-builder-storage";

/// Longer-lived storage key for the naming configuration.
pub const NAMING_STORAGE_KEY: &str = "form-builder-ui-storage";

/// The persisted slice of the field-list store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub fields: Vec<Field>,
    #[serde(default)]
    pub selected_field_id: Option<FieldId>,
}

impl PersistedSession {
    pub fn from_store(store: &FormStore) -> Self {
        Self {
            fields: store.fields().to_vec(),
            selected_field_id: store.selected_id(),
        }
    }

    /// Rebuild a store; history starts fresh and a dangling selection is
    /// dropped.
    pub fn into_store(self) -> FormStore {
        FormStore::from_fields(self.fields, self.selected_field_id)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// The persisted naming configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedNaming {
    pub component_info: ComponentInfo,
}

impl PersistedNaming {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
