//! Field markup generation.
//!
//! One react-hook-form `<FormField>` fragment per field, in field order.
//! Every fragment binds the field's data key, shows the label (with a
//! required marker when set), and renders the kind-appropriate control
//! over the static option data. Labels and names are escaped for their
//! sink before interpolation.

use formforge_core::{ComboboxStyle, Field, FieldKind};

use crate::emit;

/// Generate the concatenated markup block for the field list.
pub fn generate(fields: &[Field]) -> String {
    fields
        .iter()
        .map(field_markup)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The markup fragment for one field.
pub fn field_markup(field: &Field) -> String {
    match field.kind {
        FieldKind::Checkbox => checkbox(field),
        FieldKind::Textarea => textarea(field),
        FieldKind::Text if field.is_password() => password(field),
        FieldKind::Select => select(field),
        FieldKind::Radio => radio(field),
        FieldKind::Datepicker => datepicker(field),
        FieldKind::Combobox if field.is_multi => combobox_multi(field),
        FieldKind::Combobox if field.effective_style() == ComboboxStyle::RadixUi => {
            combobox_radix(field)
        }
        FieldKind::Combobox => combobox_base(field),
        // Text, Number, and anything future render as a typed input.
        _ => input(field),
    }
}

/// The label contents, with the required marker appended when set.
fn label_jsx(field: &Field) -> String {
    let label = emit::jsx_text(&field.label);
    if field.required {
        format!("{label} <span className=\"text-red-500\">*</span>")
    } else {
        label
    }
}

/// The label escaped for a placeholder attribute.
fn placeholder(field: &Field) -> String {
    emit::jsx_attr(&field.label)
}

/// Shared `<FormField>` opening: control wiring plus the name binding.
fn push_header(lines: &mut Vec<String>, field: &Field) {
    lines.push("        <FormField".to_string());
    lines.push("          control={form.control}".to_string());
    lines.push(format!("          name=\"{}\"", emit::jsx_attr(&field.name)));
}

fn input(field: &Field) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, field);
    lines.push("          render={({ field }) => (".to_string());
    lines.push("            <FormItem>".to_string());
    lines.push(format!("              <FormLabel>{}</FormLabel>", label_jsx(field)));
    lines.push("              <FormControl>".to_string());
    lines.push(format!(
        "                <Input placeholder=\"{}...\" type=\"{}\" {{...field}} />",
        placeholder(field),
        field.effective_sub_type().as_html_type()
    ));
    lines.push("              </FormControl>".to_string());
    lines.push("              <FormMessage />".to_string());
    lines.push("            </FormItem>".to_string());
    lines.push("          )}".to_string());
    lines.push("        />".to_string());
    lines.join("\n")
}

fn password(field: &Field) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, field);
    lines.push("          render={({ field }) => (".to_string());
    lines.push("            <FormItem className=\"gap-3\">".to_string());
    lines.push(format!("              <FormLabel>{}</FormLabel>", label_jsx(field)));
    lines.push("              <FormControl>".to_string());
    lines.push("                <PasswordInput".to_string());
    lines.push("                  autoComplete=\"off\"".to_string());
    lines.push(format!(
        "                  placeholder=\"{}...\"",
        placeholder(field)
    ));
    lines.push("                  {...field}".to_string());
    lines.push("                />".to_string());
    lines.push("              </FormControl>".to_string());
    lines.push("              <FormMessage />".to_string());
    lines.push("            </FormItem>".to_string());
    lines.push("          )}".to_string());
    lines.push("        />".to_string());
    lines.join("\n")
}

fn textarea(field: &Field) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, field);
    lines.push("          render={({ field }) => (".to_string());
    lines.push("            <FormItem>".to_string());
    lines.push(format!("              <FormLabel>{}</FormLabel>", label_jsx(field)));
    lines.push("              <FormControl>".to_string());
    lines.push(format!(
        "                <Textarea placeholder=\"{}...\" className=\"resize-none\" {{...field}} />",
        placeholder(field)
    ));
    lines.push("              </FormControl>".to_string());
    lines.push("              <FormMessage />".to_string());
    lines.push("            </FormItem>".to_string());
    lines.push("          )}".to_string());
    lines.push("        />".to_string());
    lines.join("\n")
}

fn checkbox(field: &Field) -> String {
    // Optional checkboxes may see an absent value, so the emitted handlers
    // guard with optional chaining; required ones bind the array directly.
    let (checked, spread, filter) = if field.required {
        (
            "field.value.includes(item.id)",
            "...field.value",
            "field.value.filter((id: number) => id !== item.id)",
        )
    } else {
        (
            "field.value?.includes(item.id)",
            "...(field.value ?? [])",
            "field.value?.filter((id: number) => id !== item.id)",
        )
    };

    let mut lines = Vec::new();
    push_header(&mut lines, field);
    lines.push("          render={({ field }) => (".to_string());
    lines.push("            <FormItem>".to_string());
    lines.push(format!("              <FormLabel>{}</FormLabel>", label_jsx(field)));
    lines.push("              {data.map((item) => (".to_string());
    lines.push("                <div key={item.id} className=\"flex items-center gap-2\">".to_string());
    lines.push("                  <FormControl>".to_string());
    lines.push("                    <Checkbox".to_string());
    lines.push("                      id={`checkbox-${item.id}`}".to_string());
    lines.push(format!("                      checked={{{checked}}}"));
    lines.push("                      onCheckedChange={(checked) =>".to_string());
    lines.push("                        field.onChange(".to_string());
    lines.push("                          checked".to_string());
    lines.push(format!("                            ? [{spread}, item.id]"));
    lines.push(format!("                            : {filter}"));
    lines.push("                        )".to_string());
    lines.push("                      }".to_string());
    lines.push("                    />".to_string());
    lines.push("                  </FormControl>".to_string());
    lines.push("                  <label htmlFor={`checkbox-${item.id}`} className=\"cursor-pointer\">".to_string());
    lines.push("                    {item.name}".to_string());
    lines.push("                  </label>".to_string());
    lines.push("                </div>".to_string());
    lines.push("              ))}".to_string());
    lines.push("              <FormMessage />".to_string());
    lines.push("            </FormItem>".to_string());
    lines.push("          )}".to_string());
    lines.push("        />".to_string());
    lines.join("\n")
}

fn select(field: &Field) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, field);
    lines.push("          render={({ field }) => (".to_string());
    lines.push("            <FormItem>".to_string());
    lines.push(format!("              <FormLabel>{}</FormLabel>", label_jsx(field)));
    lines.push("              <Select".to_string());
    lines.push("                onValueChange={(value) =>".to_string());
    lines.push("                  field.onChange(value ? Number(value) : undefined)".to_string());
    lines.push("                }".to_string());
    lines.push("                value={field.value?.toString()}".to_string());
    lines.push("              >".to_string());
    lines.push("                <FormControl>".to_string());
    lines.push("                  <SelectTrigger className=\"w-full\">".to_string());
    lines.push(format!(
        "                    <SelectValue placeholder=\"{}...\" />",
        placeholder(field)
    ));
    lines.push("                  </SelectTrigger>".to_string());
    lines.push("                </FormControl>".to_string());
    lines.push("                <SelectContent align=\"start\" position=\"popper\">".to_string());
    lines.push("                  {data.map((item) => (".to_string());
    lines.push("                    <SelectItem value={item.id.toString()} key={item.id}>".to_string());
    lines.push("                      {item.name}".to_string());
    lines.push("                    </SelectItem>".to_string());
    lines.push("                  ))}".to_string());
    lines.push("                </SelectContent>".to_string());
    lines.push("              </Select>".to_string());
    lines.push("              <FormMessage />".to_string());
    lines.push("            </FormItem>".to_string());
    lines.push("          )}".to_string());
    lines.push("        />".to_string());
    lines.join("\n")
}

fn radio(field: &Field) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, field);
    lines.push("          render={({ field }) => (".to_string());
    lines.push("            <FormItem>".to_string());
    lines.push(format!("              <FormLabel>{}</FormLabel>", label_jsx(field)));
    lines.push("              <FormControl>".to_string());
    lines.push("                <RadioGroup onValueChange={field.onChange} value={field.value ?? \"\"}>".to_string());
    lines.push("                  {data.map((item) => (".to_string());
    lines.push("                    <div key={item.id} className=\"flex items-center gap-2\">".to_string());
    lines.push("                      <RadioGroupItem value={item.id.toString()} id={`radio-${item.id}`} />".to_string());
    lines.push("                      <label htmlFor={`radio-${item.id}`} className=\"cursor-pointer text-sm\">".to_string());
    lines.push("                        {item.name}".to_string());
    lines.push("                      </label>".to_string());
    lines.push("                    </div>".to_string());
    lines.push("                  ))}".to_string());
    lines.push("                </RadioGroup>".to_string());
    lines.push("              </FormControl>".to_string());
    lines.push("              <FormMessage />".to_string());
    lines.push("            </FormItem>".to_string());
    lines.push("          )}".to_string());
    lines.push("        />".to_string());
    lines.join("\n")
}

fn datepicker(field: &Field) -> String {
    // The bound value stays an ISO-8601 string; the Date object exists
    // only at the picker boundary.
    let mut lines = Vec::new();
    push_header(&mut lines, field);
    lines.push("          render={({ field }) => {".to_string());
    lines.push("            const { value, onChange, ...rest } = field;".to_string());
    lines.push("            return (".to_string());
    lines.push("              <FormItem className=\"flex flex-col\">".to_string());
    lines.push(format!("                <FormLabel>{}</FormLabel>", label_jsx(field)));
    lines.push("                <FormControl>".to_string());
    lines.push("                  <DatePickerInput".to_string());
    lines.push("                    value={value ? new Date(value) : undefined}".to_string());
    lines.push("                    onChange={(date) => onChange(date ? date.toISOString() : undefined)}".to_string());
    lines.push(format!(
        "                    placeholder=\"{}...\"",
        placeholder(field)
    ));
    lines.push("                    {...rest}".to_string());
    lines.push("                  />".to_string());
    lines.push("                </FormControl>".to_string());
    lines.push("                <FormMessage />".to_string());
    lines.push("              </FormItem>".to_string());
    lines.push("            );".to_string());
    lines.push("          }}".to_string());
    lines.push("        />".to_string());
    lines.join("\n")
}

fn combobox_multi(field: &Field) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, field);
    lines.push("          render={({ field }) => {".to_string());
    lines.push("            const selectedItems = data.filter((item) =>".to_string());
    lines.push("              field.value?.includes(item.id.toString()),".to_string());
    lines.push("            );".to_string());
    lines.push("            return (".to_string());
    lines.push("              <FormItem className=\"flex flex-col\">".to_string());
    lines.push(format!("                <FormLabel>{}</FormLabel>", label_jsx(field)));
    lines.push("                <FormControl>".to_string());
    lines.push("                  <div ref={anchorRef} className=\"w-full\">".to_string());
    lines.push("                    <Combobox".to_string());
    lines.push("                      items={data}".to_string());
    lines.push("                      multiple".to_string());
    lines.push("                      autoHighlight".to_string());
    lines.push("                      itemToStringLabel={(item) => item.name}".to_string());
    lines.push("                      onValueChange={(selected: Item[]) =>".to_string());
    lines.push("                        field.onChange(selected.map((obj) => obj.id.toString()))".to_string());
    lines.push("                      }".to_string());
    lines.push("                    >".to_string());
    lines.push("                      <ComboboxChips className=\"flex flex-wrap gap-2 p-2 w-full border rounded-md\">".to_string());
    lines.push("                        <ComboboxValue>".to_string());
    lines.push("                          {selectedItems.map((item) => (".to_string());
    lines.push("                            <ComboboxChip key={item.id} className=\"max-w-fit\">".to_string());
    lines.push("                              {item.name}".to_string());
    lines.push("                            </ComboboxChip>".to_string());
    lines.push("                          ))}".to_string());
    lines.push("                        </ComboboxValue>".to_string());
    lines.push(format!(
        "                        <ComboboxChipsInput className=\"flex-1 min-w-30\" placeholder=\"{}...\" />",
        placeholder(field)
    ));
    lines.push("                      </ComboboxChips>".to_string());
    lines.push("                      <ComboboxContent anchor={anchorRef} align=\"start\">".to_string());
    lines.push("                        <ComboboxEmpty>No items found.</ComboboxEmpty>".to_string());
    lines.push("                        <ComboboxList>".to_string());
    lines.push("                          {(item) => (".to_string());
    lines.push("                            <ComboboxItem key={item.id} value={item}>".to_string());
    lines.push("                              {item.name}".to_string());
    lines.push("                            </ComboboxItem>".to_string());
    lines.push("                          )}".to_string());
    lines.push("                        </ComboboxList>".to_string());
    lines.push("                      </ComboboxContent>".to_string());
    lines.push("                    </Combobox>".to_string());
    lines.push("                  </div>".to_string());
    lines.push("                </FormControl>".to_string());
    lines.push("                <FormMessage />".to_string());
    lines.push("              </FormItem>".to_string());
    lines.push("            );".to_string());
    lines.push("          }}".to_string());
    lines.push("        />".to_string());
    lines.join("\n")
}

fn combobox_radix(field: &Field) -> String {
    // Reselecting the current option clears the value.
    let mut lines = Vec::new();
    push_header(&mut lines, field);
    lines.push("          render={({ field }) => {".to_string());
    lines.push("            const selectedItem = data.find((item) => item.id.toString() === field.value);".to_string());
    lines.push("            return (".to_string());
    lines.push("              <FormItem className=\"flex flex-col\">".to_string());
    lines.push(format!("                <FormLabel>{}</FormLabel>", label_jsx(field)));
    lines.push("                <Popover modal>".to_string());
    lines.push("                  <PopoverTrigger asChild>".to_string());
    lines.push("                    <FormControl>".to_string());
    lines.push("                      <Button".to_string());
    lines.push("                        variant=\"outline\"".to_string());
    lines.push("                        role=\"combobox\"".to_string());
    lines.push("                        type=\"button\"".to_string());
    lines.push("                        className={cn(".to_string());
    lines.push("                          \"h-9 w-full justify-between truncate\",".to_string());
    lines.push("                          !field.value && \"text-muted-foreground\"".to_string());
    lines.push("                        )}".to_string());
    lines.push("                      >".to_string());
    lines.push(format!(
        "                        {{field.value ? selectedItem?.name : \"{}\"}}",
        emit::js_string(&field.label)
    ));
    lines.push("                        <ChevronsUpDown className=\"ml-2 h-4 w-4 shrink-0 opacity-50\" />".to_string());
    lines.push("                      </Button>".to_string());
    lines.push("                    </FormControl>".to_string());
    lines.push("                  </PopoverTrigger>".to_string());
    lines.push("                  <PopoverContent className=\"w-(--radix-popover-trigger-width) p-0\">".to_string());
    lines.push("                    <Command>".to_string());
    lines.push("                      <CommandInput placeholder=\"Search...\" />".to_string());
    lines.push("                      <CommandList>".to_string());
    lines.push("                        <CommandEmpty>No items found.</CommandEmpty>".to_string());
    lines.push("                        <CommandGroup>".to_string());
    lines.push("                          {data.map((item) => (".to_string());
    lines.push("                            <CommandItem".to_string());
    lines.push("                              value={item.id.toString()}".to_string());
    lines.push("                              key={item.id}".to_string());
    lines.push("                              onSelect={() => {".to_string());
    lines.push("                                if (item.id.toString() === field.value) {".to_string());
    lines.push("                                  field.onChange(undefined);".to_string());
    lines.push("                                } else {".to_string());
    lines.push("                                  field.onChange(item.id.toString());".to_string());
    lines.push("                                }".to_string());
    lines.push("                              }}".to_string());
    lines.push("                            >".to_string());
    lines.push("                              <Check".to_string());
    lines.push("                                className={cn(".to_string());
    lines.push("                                  \"mr-2 h-4 w-4\",".to_string());
    lines.push("                                  item.id.toString() === field.value".to_string());
    lines.push("                                    ? \"opacity-100\"".to_string());
    lines.push("                                    : \"opacity-0\"".to_string());
    lines.push("                                )}".to_string());
    lines.push("                              />".to_string());
    lines.push("                              {item.name}".to_string());
    lines.push("                            </CommandItem>".to_string());
    lines.push("                          ))}".to_string());
    lines.push("                        </CommandGroup>".to_string());
    lines.push("                      </CommandList>".to_string());
    lines.push("                    </Command>".to_string());
    lines.push("                  </PopoverContent>".to_string());
    lines.push("                </Popover>".to_string());
    lines.push("                <FormMessage />".to_string());
    lines.push("              </FormItem>".to_string());
    lines.push("            );".to_string());
    lines.push("          }}".to_string());
    lines.push("        />".to_string());
    lines.join("\n")
}

fn combobox_base(field: &Field) -> String {
    let mut lines = Vec::new();
    push_header(&mut lines, field);
    lines.push("          render={({ field }) => (".to_string());
    lines.push("            <FormItem className=\"flex flex-col\">".to_string());
    lines.push(format!("              <FormLabel>{}</FormLabel>", label_jsx(field)));
    lines.push("              <FormControl>".to_string());
    lines.push("                <Combobox".to_string());
    lines.push("                  items={data}".to_string());
    lines.push("                  itemToStringValue={(item) => item.id.toString()}".to_string());
    lines.push("                  itemToStringLabel={(item: Item) => item.name}".to_string());
    lines.push("                  onValueChange={(value) =>".to_string());
    lines.push("                    field.onChange(value ? value.id.toString() : undefined)".to_string());
    lines.push("                  }".to_string());
    lines.push("                >".to_string());
    lines.push(format!(
        "                  <ComboboxInput placeholder=\"{}\" ref={{field.ref}} showClear />",
        placeholder(field)
    ));
    lines.push("                  <ComboboxContent>".to_string());
    lines.push("                    <ComboboxEmpty>No items found.</ComboboxEmpty>".to_string());
    lines.push("                    <ComboboxList>".to_string());
    lines.push("                      {(item) => (".to_string());
    lines.push("                        <ComboboxItem key={item.id} value={item}>".to_string());
    lines.push("                          {item.name}".to_string());
    lines.push("                        </ComboboxItem>".to_string());
    lines.push("                      )}".to_string());
    lines.push("                    </ComboboxList>".to_string());
    lines.push("                  </ComboboxContent>".to_string());
    lines.push("                </Combobox>".to_string());
    lines.push("              </FormControl>".to_string());
    lines.push("              <FormMessage />".to_string());
    lines.push("            </FormItem>".to_string());
    lines.push("          )}".to_string());
    lines.push("        />".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use formforge_core::SubType;

    fn field(kind: FieldKind, name: &str, label: &str) -> Field {
        Field::new(kind, name).with_label(label)
    }

    #[test]
    fn test_fragment_binds_name_and_label() {
        let f = field(FieldKind::Text, "first_name", "First Name");
        let jsx = field_markup(&f);
        assert!(jsx.contains("name=\"first_name\""));
        assert!(jsx.contains("<FormLabel>First Name</FormLabel>"));
        assert!(jsx.contains("type=\"text\""));
    }

    #[test]
    fn test_required_marker() {
        let f = field(FieldKind::Text, "f", "Name").required(true);
        assert!(field_markup(&f)
            .contains("<FormLabel>Name <span className=\"text-red-500\">*</span></FormLabel>"));
    }

    #[test]
    fn test_password_uses_masked_input() {
        let f = field(FieldKind::Text, "pw", "Password").with_sub_type(SubType::Password);
        let jsx = field_markup(&f);
        assert!(jsx.contains("<PasswordInput"));
        assert!(jsx.contains("autoComplete=\"off\""));
    }

    #[test]
    fn test_checkbox_optional_guards_value() {
        let optional = field_markup(&field(FieldKind::Checkbox, "c", "C"));
        assert!(optional.contains("field.value?.includes(item.id)"));
        assert!(optional.contains("...(field.value ?? [])"));

        let required = field_markup(&field(FieldKind::Checkbox, "c", "C").required(true));
        assert!(required.contains("field.value.includes(item.id)"));
        assert!(required.contains("[...field.value, item.id]"));
    }

    #[test]
    fn test_radio_renders_exclusive_group() {
        let jsx = field_markup(&field(FieldKind::Radio, "r", "Pick"));
        assert!(jsx.contains("<RadioGroup"));
        assert!(jsx.contains("<RadioGroupItem"));
    }

    #[test]
    fn test_datepicker_converts_at_the_boundary() {
        let jsx = field_markup(&field(FieldKind::Datepicker, "d", "Date"));
        assert!(jsx.contains("value ? new Date(value) : undefined"));
        assert!(jsx.contains("date.toISOString()"));
    }

    #[test]
    fn test_combobox_style_matrix_is_distinct() {
        let base = field_markup(&field(FieldKind::Combobox, "c", "C"));
        let radix = field_markup(
            &field(FieldKind::Combobox, "c", "C").with_style(ComboboxStyle::RadixUi),
        );
        let multi_base = field_markup(&field(FieldKind::Combobox, "c", "C").multi(true));
        let multi_radix = field_markup(
            &field(FieldKind::Combobox, "c", "C")
                .multi(true)
                .with_style(ComboboxStyle::RadixUi),
        );

        assert!(base.contains("<ComboboxInput"));
        assert!(radix.contains("<Popover modal>"));
        assert!(radix.contains("field.onChange(undefined);"));
        assert!(multi_base.contains("<ComboboxChips"));
        // Multi always renders the chip pattern, whatever the style says.
        assert_eq!(multi_base, multi_radix);
        assert_ne!(base, radix);
        assert_ne!(base, multi_base);
    }

    #[test]
    fn test_number_kind_renders_as_number_input() {
        let jsx = field_markup(&field(FieldKind::Number, "n", "Age"));
        assert!(jsx.contains("<Input"));
        assert!(jsx.contains("type=\"number\""));
    }

    #[test]
    fn test_hostile_label_is_escaped() {
        let f = field(FieldKind::Text, "f", "<script>{x}</script>");
        let jsx = field_markup(&f);
        assert!(!jsx.contains("<script>"));
        assert!(jsx.contains("&lt;script&gt;&#123;x&#125;&lt;/script&gt;"));
    }

    #[test]
    fn test_fragments_in_field_order() {
        let fields = vec![
            field(FieldKind::Text, "one", "One"),
            field(FieldKind::Textarea, "two", "Two"),
        ];
        let block = generate(&fields);
        let one = block.find("name=\"one\"").unwrap();
        let two = block.find("name=\"two\"").unwrap();
        assert!(one < two);
    }
}
