//! Template engine for code assembly.
//!
//! Thin wrapper over Handlebars with casing helpers registered. Fragments
//! interpolated into templates are escaped upstream (see `emit`), so
//! templates use triple-stash slots and the engine never HTML-escapes
//! generated code.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine using Handlebars.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        Self::register_helpers(&mut handlebars);
        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if self.handlebars.get_template(name).is_none() {
            return Err(CodegenError::TemplateNotFound(name.to_string()));
        }
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Register custom helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        // Pascal case helper
        handlebars.register_helper(
            "pascal_case",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
                    out.write(&to_pascal_case(param))?;
                    Ok(())
                },
            ),
        );

        // Camel case helper
        handlebars.register_helper(
            "camel_case",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
                    out.write(&to_camel_case(param))?;
                    Ok(())
                },
            ),
        );

        // Indent helper
        handlebars.register_helper(
            "indent",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let content = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
                    let spaces = h.param(1).and_then(|v| v.value().as_u64()).unwrap_or(4) as usize;
                    out.write(&crate::emit::indent(content, spaces))?;
                    Ok(())
                },
            ),
        );
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert to PascalCase.
fn to_pascal_case(s: &str) -> String {
    use convert_case::{Case, Casing};
    s.to_case(Case::Pascal)
}

/// Convert to camelCase.
fn to_camel_case(s: &str) -> String {
    use convert_case::{Case, Casing};
    s.to_case(Case::Camel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_simple() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("hello", "Hello, {{name}}!")
            .unwrap();

        let result = engine.render("hello", &json!({"name": "World"})).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let engine = TemplateEngine::new();
        assert!(engine.render("nope", &json!({})).is_err());
    }

    #[test]
    fn test_triple_stash_does_not_escape() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("{{{code}}}", &json!({"code": "<div className=\"x\" />"}))
            .unwrap();
        assert_eq!(result, "<div className=\"x\" />");
    }

    #[test]
    fn test_pascal_case_helper() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("{{pascal_case name}}", &json!({"name": "my_component"}))
            .unwrap();
        assert_eq!(result, "MyComponent");
    }
}
