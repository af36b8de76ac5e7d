//! The renderable preview model.
//!
//! A flattened view of the field list a UI layer can draw directly,
//! covering the same kind/subtype matrix as the markup generator.

use formforge_core::{ComboboxStyle, Field, FieldKind, OptionItem, SubType, OPTION_DATA};

/// One rendered preview row.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewField {
    /// Data key, used to look up the value in `PreviewState`.
    pub name: String,
    pub label: String,
    pub required: bool,
    pub control: PreviewControl,
}

/// The control matrix the preview can render.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewControl {
    /// Single-line input typed by subtype.
    Input { input_type: SubType },
    /// Masked password input.
    PasswordInput,
    /// Multi-line text control.
    Textarea,
    /// One row per option with independent checked state.
    CheckboxGroup { options: Vec<OptionItem> },
    /// One exclusive-choice control per option.
    RadioGroup { options: Vec<OptionItem> },
    /// Dropdown over the option ids.
    Select { options: Vec<OptionItem> },
    /// Text entry with a calendar popup; the bound value stays an
    /// ISO-8601 string.
    DatePicker,
    /// Searchable selection control.
    Combobox {
        style: ComboboxStyle,
        multi: bool,
        options: Vec<OptionItem>,
    },
}

/// Interpret the field list into preview rows, in field order.
pub fn preview(fields: &[Field]) -> Vec<PreviewField> {
    fields.iter().map(preview_field).collect()
}

fn preview_field(field: &Field) -> PreviewField {
    let control = match field.kind {
        FieldKind::Text if field.is_password() => PreviewControl::PasswordInput,
        FieldKind::Textarea => PreviewControl::Textarea,
        FieldKind::Checkbox => PreviewControl::CheckboxGroup {
            options: OPTION_DATA.to_vec(),
        },
        FieldKind::Radio => PreviewControl::RadioGroup {
            options: OPTION_DATA.to_vec(),
        },
        FieldKind::Select => PreviewControl::Select {
            options: OPTION_DATA.to_vec(),
        },
        FieldKind::Datepicker => PreviewControl::DatePicker,
        FieldKind::Combobox => PreviewControl::Combobox {
            style: field.effective_style(),
            multi: field.is_multi,
            options: OPTION_DATA.to_vec(),
        },
        // Text, Number, and anything future: a typed input.
        _ => PreviewControl::Input {
            input_type: field.effective_sub_type(),
        },
    };

    PreviewField {
        name: field.name.clone(),
        label: field.label.clone(),
        required: field.required,
        control,
    }
}
