//! Default-value generation.

use formforge_core::{Field, FieldKind};
use indexmap::IndexMap;

/// Map each field to the literal default-value fragment for its kind.
///
/// Checkbox and multi-select comboboxes start as empty lists, select and
/// number fields as absent, everything else as the empty string. Duplicate
/// names overwrite the earlier entry, matching the emitted object literal.
pub fn generate(fields: &[Field]) -> IndexMap<String, String> {
    let mut defaults = IndexMap::new();
    for field in fields {
        let literal = match field.kind {
            FieldKind::Checkbox => "[]",
            FieldKind::Radio => "\"\"",
            FieldKind::Select | FieldKind::Number => "undefined",
            FieldKind::Combobox if field.is_multi => "[]",
            _ => "\"\"",
        };
        defaults.insert(field.name.clone(), literal.to_string());
    }
    defaults
}
