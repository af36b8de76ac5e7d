//! The form-field descriptor model.
//!
//! A `Field` is pure data: the generators and the preview interpreter match
//! on its kind and ignore attributes that are irrelevant for that kind
//! rather than requiring them to be absent. Serialized layouts match the
//! builder UI's persisted JSON (`type`/`formType` keys, camelCase).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

/// Opaque identity token for a field.
///
/// Used for list identity and selection only; never present in generated
/// code, so regenerating the same field content with fresh ids yields
/// byte-identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

/// The control/schema discriminator for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldKind {
    Text,
    Textarea,
    Checkbox,
    Select,
    Radio,
    Datepicker,
    Combobox,
    Number,
}

/// Input subtype, meaningful for `Text` fields.
///
/// `Number`-kind fields also carry `SubType::Number` for rendering, so a
/// text field with a number subtype and a dedicated number field both
/// exist. Both are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubType {
    Text,
    Email,
    Password,
    Number,
    Date,
}

impl SubType {
    /// The HTML `type` attribute value for this subtype.
    pub fn as_html_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

/// Which combobox UI idiom to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComboboxStyle {
    #[default]
    BaseUi,
    RadixUi,
}

/// Optional validation constraints attached to a field.
///
/// `min`/`max` are length or numeric bounds depending on kind; `patterns`
/// holds password complexity rule keys and applies only to password-subtype
/// text fields. Keys are free strings so stored field data can reference a
/// rule removed from a newer rule table without failing to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub patterns: SmallVec<[String; 4]>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_email: bool,
}

/// One form field descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Immutable identity token; list identity and selection only.
    #[serde(default)]
    pub id: FieldId,
    /// The emitted variable/schema key. Treated as an opaque identifier by
    /// every generator; uniqueness is not enforced, and a later field with
    /// the same name overwrites the earlier schema entry exactly as the
    /// emitted object literal would.
    pub name: String,
    /// Display label shown next to the control.
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(rename = "formType", default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<SubType>,
    pub required: bool,
    #[serde(default)]
    pub is_multi: bool,
    #[serde(default)]
    pub style_type: ComboboxStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
}

impl Field {
    /// Create a field with the given kind and data key, no constraints.
    pub fn new(kind: FieldKind, name: impl Into<String>) -> Self {
        Self {
            id: FieldId::new(),
            name: name.into(),
            label: String::new(),
            kind,
            sub_type: None,
            required: false,
            is_multi: false,
            style_type: ComboboxStyle::default(),
            validation: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_sub_type(mut self, sub_type: SubType) -> Self {
        self.sub_type = Some(sub_type);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn multi(mut self, is_multi: bool) -> Self {
        self.is_multi = is_multi;
        self
    }

    pub fn with_style(mut self, style: ComboboxStyle) -> Self {
        self.style_type = style;
        self
    }

    pub fn with_validation(mut self, validation: ValidationRules) -> Self {
        self.validation = Some(validation);
        self
    }

    /// The subtype that rendering should use: `Number`-kind fields always
    /// read as number inputs, and an unset subtype reads as plain text.
    pub fn effective_sub_type(&self) -> SubType {
        match self.kind {
            FieldKind::Number => SubType::Number,
            _ => self.sub_type.unwrap_or(SubType::Text),
        }
    }

    /// The combobox style that rendering should use. Radix-ui supports
    /// single-select only, so multi-select always behaves as base-ui.
    pub fn effective_style(&self) -> ComboboxStyle {
        if self.is_multi {
            ComboboxStyle::BaseUi
        } else {
            self.style_type
        }
    }

    /// Whether this field renders as a masked password input.
    pub fn is_password(&self) -> bool {
        self.kind == FieldKind::Text && self.sub_type == Some(SubType::Password)
    }
}

/// Naming configuration substituted verbatim into the emitted program.
///
/// The three identifiers are free text; malformed identifiers propagate
/// into the generated code unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    pub function_name: String,
    pub schema_name: String,
    pub schema_type: String,
}

impl Default for ComponentInfo {
    fn default() -> Self {
        Self {
            function_name: "MyGeneratedForm".to_string(),
            schema_name: "formSchema".to_string(),
            schema_type: "MyFormType".to_string(),
        }
    }
}

impl ComponentInfo {
    /// Derive the three identifiers from one free-text component name.
    pub fn for_component(name: &str) -> Self {
        use convert_case::{Case, Casing};
        let pascal = name.to_case(Case::Pascal);
        Self {
            function_name: pascal.clone(),
            schema_name: format!("{}Schema", name.to_case(Case::Camel)),
            schema_type: format!("{}Values", pascal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_layout_matches_builder_json() {
        let field = Field::new(FieldKind::Text, "field_1")
            .with_label("Email")
            .with_sub_type(SubType::Email)
            .required(true);

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "TEXT");
        assert_eq!(json["formType"], "email");
        assert_eq!(json["name"], "field_1");
        assert_eq!(json["required"], true);
    }

    #[test]
    fn test_round_trip_preserves_field() {
        let field = Field::new(FieldKind::Combobox, "tags")
            .with_label("Tags")
            .multi(true)
            .with_style(ComboboxStyle::RadixUi);

        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn test_multi_forces_base_ui() {
        let field = Field::new(FieldKind::Combobox, "f")
            .multi(true)
            .with_style(ComboboxStyle::RadixUi);
        assert_eq!(field.effective_style(), ComboboxStyle::BaseUi);

        let single = Field::new(FieldKind::Combobox, "f").with_style(ComboboxStyle::RadixUi);
        assert_eq!(single.effective_style(), ComboboxStyle::RadixUi);
    }

    #[test]
    fn test_number_kind_reads_as_number_input() {
        let field = Field::new(FieldKind::Number, "age");
        assert_eq!(field.effective_sub_type(), SubType::Number);

        let plain = Field::new(FieldKind::Textarea, "bio");
        assert_eq!(plain.effective_sub_type(), SubType::Text);
    }

    #[test]
    fn test_component_info_derivation() {
        let info = ComponentInfo::for_component("signup form");
        assert_eq!(info.function_name, "SignupForm");
        assert_eq!(info.schema_name, "signupFormSchema");
        assert_eq!(info.schema_type, "SignupFormValues");
    }

    #[test]
    fn test_unknown_pattern_keys_survive_deserialization() {
        let json = r#"{"patterns": ["uppercase", "retired-rule"]}"#;
        let rules: ValidationRules = serde_json::from_str(json).unwrap();
        assert_eq!(rules.patterns.len(), 2);
    }
}
