//! The field-list store.
//!
//! Owns the ordered field list and the single selection. Every mutating
//! operation records an undo snapshot after it applies (snapshot on
//! mutation, never on read), so the history observes exactly the states
//! the user saw.

use formforge_core::{ComboboxStyle, Field, FieldId, FieldKind, SubType};
use tracing::debug;

use crate::history::History;

/// Owned editing state for one builder session.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    fields: Vec<Field>,
    selected: Option<FieldId>,
    history: History,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a persisted field list. History starts fresh.
    pub fn from_fields(fields: Vec<Field>, selected: Option<FieldId>) -> Self {
        let selected = selected.filter(|id| fields.iter().any(|f| f.id == *id));
        Self {
            fields,
            selected,
            history: History::new(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn selected_id(&self) -> Option<FieldId> {
        self.selected
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.selected
            .and_then(|id| self.fields.iter().find(|f| f.id == id))
    }

    pub fn select(&mut self, id: Option<FieldId>) {
        self.selected = id.filter(|id| self.fields.iter().any(|f| f.id == *id));
    }

    /// Append a new field of `kind` with a quick-add name and select it.
    pub fn add_field(&mut self, kind: FieldKind) -> FieldId {
        let name = self.next_field_name();
        let sub_type = if kind == FieldKind::Number {
            SubType::Number
        } else {
            SubType::Text
        };
        let style = if kind == FieldKind::Combobox {
            ComboboxStyle::BaseUi
        } else {
            ComboboxStyle::RadixUi
        };

        let field = Field::new(kind, name)
            .with_label("New Label")
            .with_sub_type(sub_type)
            .with_style(style);
        let id = field.id;

        debug!(?kind, name = %field.name, "adding field");
        self.fields.push(field);
        self.selected = Some(id);
        self.snapshot();
        id
    }

    /// Apply `update` to the field with `id`. Returns false if it is gone.
    pub fn update_field(&mut self, id: FieldId, update: impl FnOnce(&mut Field)) -> bool {
        let Some(field) = self.fields.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        update(field);
        self.snapshot();
        true
    }

    pub fn toggle_required(&mut self, id: FieldId) -> bool {
        self.update_field(id, |f| f.required = !f.required)
    }

    pub fn remove_field(&mut self, id: FieldId) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| f.id != id);
        if self.fields.len() == before {
            return false;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.snapshot();
        true
    }

    pub fn clear_all(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.fields.clear();
        self.selected = None;
        self.snapshot();
    }

    /// Copy a field under a new id and a freshly computed quick-add name,
    /// insert it right after the original, and select it.
    pub fn duplicate_field(&mut self, id: FieldId) -> Option<FieldId> {
        let index = self.fields.iter().position(|f| f.id == id)?;
        let mut copy = self.fields[index].clone();
        copy.id = FieldId::new();
        copy.name = self.next_field_name();
        let new_id = copy.id;

        debug!(source = %self.fields[index].name, copy = %copy.name, "duplicating field");
        self.fields.insert(index + 1, copy);
        self.selected = Some(new_id);
        self.snapshot();
        Some(new_id)
    }

    pub fn move_up(&mut self, id: FieldId) -> bool {
        let Some(index) = self.fields.iter().position(|f| f.id == id) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        self.fields.swap(index - 1, index);
        self.snapshot();
        true
    }

    pub fn move_down(&mut self, id: FieldId) -> bool {
        let Some(index) = self.fields.iter().position(|f| f.id == id) else {
            return false;
        };
        if index + 1 >= self.fields.len() {
            return false;
        }
        self.fields.swap(index, index + 1);
        self.snapshot();
        true
    }

    /// Move the selection to the next field, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            Some(index) => (index + 1) % self.fields.len(),
            None => 0,
        };
        self.selected = Some(self.fields[next].id);
    }

    /// Move the selection to the previous field, wrapping at the start.
    pub fn select_previous(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let previous = match self.selected_index() {
            Some(0) | None => self.fields.len() - 1,
            Some(index) => index - 1,
        };
        self.selected = Some(self.fields[previous].id);
    }

    pub fn undo(&mut self) -> bool {
        let Some(state) = self.history.undo() else {
            return false;
        };
        self.fields = state.to_vec();
        self.prune_selection();
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(state) = self.history.redo() else {
            return false;
        };
        self.fields = state.to_vec();
        self.prune_selection();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Next quick-add name: `field_{N}` where N is one past the highest
    /// numeric suffix among names matching `field_<digits>` exactly.
    /// Names outside that pattern are ignored.
    fn next_field_name(&self) -> String {
        let max = self
            .fields
            .iter()
            .filter_map(|f| {
                let suffix = f.name.strip_prefix("field_")?;
                if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                suffix.parse::<u64>().ok()
            })
            .max()
            .unwrap_or(0);
        format!("field_{}", max + 1)
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.fields.iter().position(|f| f.id == id)
    }

    fn prune_selection(&mut self) {
        if let Some(id) = self.selected {
            if !self.fields.iter().any(|f| f.id == id) {
                self.selected = None;
            }
        }
    }

    fn snapshot(&mut self) {
        self.history.record(self.fields.clone());
    }
}
