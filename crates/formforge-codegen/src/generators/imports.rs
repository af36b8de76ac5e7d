//! Import statement generation.
//!
//! Emits the minimal set of widget imports for the kinds actually present,
//! deduplicated, in first-seen order. The first occurrence of a kind
//! decides its subtype-dependent import (a later password field does not
//! add `PasswordInput` when a plain text field came first). Combobox is
//! the exception: one kind can need two disjoint import sets, so its
//! imports are computed from a scan of every combobox field in the list.

use formforge_core::{ComboboxStyle, Field, FieldKind};

const CHECKBOX_IMPORT: &str = r#"import { Checkbox } from "@/components/ui/checkbox";"#;
const INPUT_IMPORT: &str = r#"import { Input } from "@/components/ui/input";"#;
const PASSWORD_IMPORT: &str =
    r#"import { PasswordInput } from "@/components/ui/password-input";"#;
const TEXTAREA_IMPORT: &str = r#"import { Textarea } from "@/components/ui/textarea";"#;
const SELECT_IMPORT: &str = r#"import {
  Select,
  SelectContent,
  SelectItem,
  SelectTrigger,
  SelectValue,
} from "@/components/ui/select";"#;
const DATEPICKER_IMPORT: &str = r#"import { DatePickerInput } from "@/components/date-picker";"#;
const RADIO_IMPORT: &str = r#"import { RadioGroup, RadioGroupItem } from "@/components/ui/radio";"#;
const POPOVER_IMPORT: &str = r#"import {
  Popover,
  PopoverContent,
  PopoverTrigger,
} from "@/components/ui/popover";"#;
const COMMAND_IMPORT: &str = r#"import {
  Command,
  CommandEmpty,
  CommandGroup,
  CommandInput,
  CommandItem,
  CommandList,
} from "@/components/ui/command";"#;
const ICON_IMPORT: &str = r#"import { Check, ChevronsUpDown } from "lucide-react";"#;
const CN_IMPORT: &str = r#"import { cn } from "@/utils";"#;

/// Generate the deduplicated import block for the given field list.
pub fn generate(fields: &[Field]) -> Vec<String> {
    let mut imports: Vec<String> = Vec::new();
    let mut seen: Vec<FieldKind> = Vec::new();

    for field in fields {
        if seen.contains(&field.kind) {
            continue;
        }
        seen.push(field.kind);

        match field.kind {
            FieldKind::Checkbox => imports.push(CHECKBOX_IMPORT.to_string()),
            FieldKind::Text if field.is_password() => imports.push(PASSWORD_IMPORT.to_string()),
            FieldKind::Text => imports.push(INPUT_IMPORT.to_string()),
            FieldKind::Textarea => imports.push(TEXTAREA_IMPORT.to_string()),
            FieldKind::Select => imports.push(SELECT_IMPORT.to_string()),
            FieldKind::Datepicker => imports.push(DATEPICKER_IMPORT.to_string()),
            FieldKind::Radio => imports.push(RADIO_IMPORT.to_string()),
            FieldKind::Combobox => imports.extend(combobox_imports(fields)),
            // Unmatched kinds render as plain inputs, so they need one.
            _ => imports.push(INPUT_IMPORT.to_string()),
        }
    }

    // Two kinds can share an import (Number falls back to Input); keep the
    // first statement only.
    let mut block = Vec::new();
    for stmt in imports {
        if !block.contains(&stmt) {
            block.push(stmt);
        }
    }
    block
}

/// Style-aware combobox import set, computed over every combobox field.
///
/// Multi-select always counts as base-ui (radix supports single only).
fn combobox_imports(fields: &[Field]) -> Vec<String> {
    let combos: Vec<&Field> = fields
        .iter()
        .filter(|f| f.kind == FieldKind::Combobox)
        .collect();

    let any_multi = combos.iter().any(|f| f.is_multi);
    let any_base_single = combos
        .iter()
        .any(|f| !f.is_multi && f.effective_style() == ComboboxStyle::BaseUi);
    let any_radix = combos
        .iter()
        .any(|f| !f.is_multi && f.effective_style() == ComboboxStyle::RadixUi);

    let mut imports = Vec::new();

    if any_multi || any_base_single {
        let mut names = vec!["Combobox"];
        if any_multi {
            names.extend(["ComboboxChip", "ComboboxChips", "ComboboxChipsInput"]);
        }
        names.extend(["ComboboxContent", "ComboboxEmpty"]);
        if any_base_single {
            names.push("ComboboxInput");
        }
        names.extend(["ComboboxItem", "ComboboxList"]);
        if any_multi {
            names.extend(["ComboboxValue", "useComboboxAnchor"]);
        }
        imports.push(format!(
            "import {{\n  {},\n}} from \"@/components/ui/combobox\";",
            names.join(",\n  ")
        ));
    }

    if any_radix {
        imports.push(POPOVER_IMPORT.to_string());
        imports.push(COMMAND_IMPORT.to_string());
        imports.push(ICON_IMPORT.to_string());
        imports.push(CN_IMPORT.to_string());
    }

    imports
}
