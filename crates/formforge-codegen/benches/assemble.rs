//! Assembler benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formforge_codegen::CodeAssembler;
use formforge_core::{ComponentInfo, Field, FieldKind, SubType, ValidationRules};

fn sample_fields() -> Vec<Field> {
    vec![
        Field::new(FieldKind::Text, "email")
            .with_label("Email")
            .with_sub_type(SubType::Email)
            .required(true),
        Field::new(FieldKind::Text, "password")
            .with_label("Password")
            .with_sub_type(SubType::Password)
            .required(true)
            .with_validation(ValidationRules {
                min: Some(8),
                patterns: ["uppercase", "number", "special"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                ..Default::default()
            }),
        Field::new(FieldKind::Checkbox, "interests").with_label("Interests"),
        Field::new(FieldKind::Select, "plan").with_label("Plan").required(true),
        Field::new(FieldKind::Combobox, "tags").with_label("Tags").multi(true),
        Field::new(FieldKind::Datepicker, "start").with_label("Start Date"),
    ]
}

fn assemble_form(c: &mut Criterion) {
    let assembler = CodeAssembler::new().unwrap();
    let fields = sample_fields();
    let naming = ComponentInfo::default();

    c.bench_function("assemble_form", |b| {
        b.iter(|| assembler.assemble(black_box(&fields), black_box(&naming)))
    });
}

criterion_group!(benches, assemble_form);
criterion_main!(benches);
