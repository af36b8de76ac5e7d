//! Editing state for the form builder.
//!
//! The generation engine is a pure function of `(fields, naming)`; this
//! crate owns everything mutable around it: the field list, the current
//! selection, quick-add naming, a bounded undo/redo history, and the
//! serialized session layout. The store is an explicit value owned by the
//! caller; nothing here is global and nothing performs I/O.

pub mod history;
pub mod persist;
pub mod store;

pub use history::{History, HISTORY_CAP};
pub use persist::{PersistedNaming, PersistedSession, NAMING_STORAGE_KEY, SESSION_STORAGE_KEY};
pub use store::FormStore;
