//! Assembles the four generator outputs into the final program text.
//!
//! Pure string composition: schema, defaults, imports and markup are
//! rendered into a fixed component skeleton together with the caller's
//! naming configuration. Naming identifiers are interpolated verbatim, so
//! a malformed identifier propagates into the generated code unchanged.

use formforge_core::{ComponentInfo, Field, OPTION_DATA};
use serde_json::json;
use tracing::debug;

use crate::error::Result;
use crate::generators::{defaults, imports, markup, schema};
use crate::templates::TemplateEngine;

/// The fixed program skeleton. Every slot is triple-stash: fragments are
/// escaped (or deliberately verbatim) before they get here.
const PROGRAM_TEMPLATE: &str = r#""use client"

import { useForm } from "react-hook-form"
import { zodResolver } from "@hookform/resolvers/zod"
import * as z from "zod"
import { Button } from "@/components/ui/button"
import {
  Form,
  FormControl,
  FormField,
  FormItem,
  FormLabel,
  FormMessage,
} from "@/components/ui/form"

{{{imports}}}

const {{{schemaName}}} = z.object({
{{{schema}}}
})

export type {{{schemaType}}} = z.infer<typeof {{{schemaName}}}>

const data: { id: number; name: string }[] = [
{{{optionData}}}
];

export default function {{{functionName}}}() {
  const form = useForm<{{{schemaType}}}>({
    resolver: zodResolver({{{schemaName}}}),
    defaultValues: {
{{{defaultValues}}}
    },
  })

  function onSubmit(values: {{{schemaType}}}) {
    console.log(values)
  }

  return (
    <Form {...form}>
      <form onSubmit={form.handleSubmit(onSubmit)} className="space-y-8">
{{{fields}}}
        <Button type="submit">Submit</Button>
      </form>
    </Form>
  )
}
"#;

/// Orchestrates the four generators and the program skeleton.
pub struct CodeAssembler<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> CodeAssembler<'a> {
    /// Create an assembler with the program skeleton registered.
    pub fn new() -> Result<Self> {
        let mut engine = TemplateEngine::new();
        engine.register_template("program", PROGRAM_TEMPLATE)?;
        Ok(Self { engine })
    }

    /// Compose the complete program text for `fields` under `naming`.
    pub fn assemble(&self, fields: &[Field], naming: &ComponentInfo) -> Result<String> {
        let schema_map = schema::generate(fields);
        let defaults_map = defaults::generate(fields);
        let import_block = imports::generate(fields).join("\n");
        let field_markup = markup::generate(fields);

        let schema_block = schema_map
            .iter()
            .map(|(name, expr)| format!("  {}: {}", name, expr))
            .collect::<Vec<_>>()
            .join(",\n");
        let defaults_block = defaults_map
            .iter()
            .map(|(name, literal)| format!("      {}: {}", name, literal))
            .collect::<Vec<_>>()
            .join(",\n");
        let option_rows = OPTION_DATA
            .iter()
            .map(|item| format!("  {{ id: {}, name: \"{}\" }},", item.id, item.name))
            .collect::<Vec<_>>()
            .join("\n");

        debug!(
            fields = fields.len(),
            component = %naming.function_name,
            "assembling form component"
        );

        self.engine.render(
            "program",
            &json!({
                "imports": import_block,
                "schema": schema_block,
                "defaultValues": defaults_block,
                "optionData": option_rows,
                "fields": field_markup,
                "functionName": naming.function_name,
                "schemaName": naming.schema_name,
                "schemaType": naming.schema_type,
            }),
        )
    }
}

/// Generate the complete program text in one call.
pub fn generate_code(fields: &[Field], naming: &ComponentInfo) -> Result<String> {
    CodeAssembler::new()?.assemble(fields, naming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formforge_core::{FieldKind, SubType};

    fn email_and_bio() -> Vec<Field> {
        vec![
            Field::new(FieldKind::Text, "email")
                .with_label("Email")
                .with_sub_type(SubType::Email)
                .required(true),
            Field::new(FieldKind::Textarea, "bio").with_label("Bio"),
        ]
    }

    fn naming() -> ComponentInfo {
        ComponentInfo {
            function_name: "Fn".to_string(),
            schema_name: "s".to_string(),
            schema_type: "T".to_string(),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let code = generate_code(&email_and_bio(), &naming()).unwrap();

        assert!(code.starts_with("\"use client\""));
        assert!(code.contains("const s = z.object({"));
        assert!(code.contains("  email: z.string().email(\"Email is required\")"));
        assert!(code.contains("  bio: z.string().optional()"));
        assert!(code.contains("export type T = z.infer<typeof s>"));
        assert!(code.contains("import { Input } from \"@/components/ui/input\";"));
        assert!(code.contains("import { Textarea } from \"@/components/ui/textarea\";"));
        assert!(code.contains("      email: \"\""));
        assert!(code.contains("      bio: \"\""));
        assert!(code.contains("export default function Fn() {"));
        assert!(code.contains("resolver: zodResolver(s)"));

        let email_fragment = code.find("name=\"email\"").unwrap();
        let bio_fragment = code.find("name=\"bio\"").unwrap();
        assert!(email_fragment < bio_fragment);
    }

    #[test]
    fn test_deterministic_output() {
        let fields = email_and_bio();
        let first = generate_code(&fields, &naming()).unwrap();
        let second = generate_code(&fields, &naming()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fresh_ids_do_not_change_output() {
        let first = generate_code(&email_and_bio(), &naming()).unwrap();
        // Rebuilding the same content allocates entirely new ids.
        let second = generate_code(&email_and_bio(), &naming()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reordering_fields_reorders_output_only() {
        let forward = email_and_bio();
        let mut reverse = email_and_bio();
        reverse.reverse();

        let forward_code = generate_code(&forward, &naming()).unwrap();
        let reverse_code = generate_code(&reverse, &naming()).unwrap();

        assert!(forward_code.contains("email: z.string().email(\"Email is required\")"));
        assert!(reverse_code.contains("email: z.string().email(\"Email is required\")"));
        let fwd_email = forward_code.find("name=\"email\"").unwrap();
        let fwd_bio = forward_code.find("name=\"bio\"").unwrap();
        let rev_email = reverse_code.find("name=\"email\"").unwrap();
        let rev_bio = reverse_code.find("name=\"bio\"").unwrap();
        assert!(fwd_email < fwd_bio);
        assert!(rev_bio < rev_email);
    }

    #[test]
    fn test_naming_is_interpolated_verbatim() {
        let custom = ComponentInfo {
            function_name: "SignupForm".to_string(),
            schema_name: "signupSchema".to_string(),
            schema_type: "SignupValues".to_string(),
        };
        let code = generate_code(&email_and_bio(), &custom).unwrap();
        assert!(code.contains("export default function SignupForm() {"));
        assert!(code.contains("const signupSchema = z.object({"));
        assert!(code.contains("useForm<SignupValues>"));
    }

    #[test]
    fn test_option_data_declaration_is_present() {
        let code = generate_code(&[Field::new(FieldKind::Select, "s").with_label("S")], &naming())
            .unwrap();
        assert!(code.contains("const data: { id: number; name: string }[] = ["));
        assert!(code.contains("{ id: 1, name: \"Option 1\" },"));
        assert!(code.contains("{ id: 3, name: \"Option 3\" },"));
    }

    #[test]
    fn test_default_literals_fit_their_optional_schemas() {
        let kinds = [
            FieldKind::Text,
            FieldKind::Textarea,
            FieldKind::Checkbox,
            FieldKind::Select,
            FieldKind::Radio,
            FieldKind::Datepicker,
            FieldKind::Combobox,
            FieldKind::Number,
        ];
        for kind in kinds {
            for multi in [false, true] {
                let field = Field::new(kind, "f").with_label("F").multi(multi);
                let fields = std::slice::from_ref(&field);
                let default = defaults::generate(fields)["f"].clone();
                let expr = schema::generate(fields)["f"].clone();

                match default.as_str() {
                    // An empty list must feed a list schema.
                    "[]" => assert!(expr.starts_with("z.array"), "{kind:?}: {expr}"),
                    // Absent must be accepted by an optional schema.
                    "undefined" => assert!(expr.contains(".optional()"), "{kind:?}: {expr}"),
                    // The empty string must feed a string schema.
                    "\"\"" => assert!(expr.contains("z.string"), "{kind:?}: {expr}"),
                    other => panic!("unexpected default literal {other} for {kind:?}"),
                }
            }
        }
    }

    #[test]
    fn test_empty_field_list_still_assembles() {
        let code = generate_code(&[], &naming()).unwrap();
        assert!(code.contains("const s = z.object({"));
        assert!(code.contains("<Button type=\"submit\">Submit</Button>"));
    }
}
