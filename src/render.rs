// Page body rendering
//
// Wraps Tera with the embedded RST templates. Pure text production: no
// filesystem access and no knowledge of the walk or output paths.

use crate::error::Result;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

/// Template engine wrapping Tera with the embedded page templates
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create a new template engine with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("module.rst", include_str!("../templates/module.rst.tera")),
            ("class.rst", include_str!("../templates/class.rst.tera")),
            ("function.rst", include_str!("../templates/function.rst.tera")),
            (
                "package_index.rst",
                include_str!("../templates/package_index.rst.tera"),
            ),
        ])?;

        tera.register_filter("underline", underline);

        Ok(Self { tera })
    }

    /// Render the heading block for a module page
    pub fn render_module(
        &self,
        heading: &str,
        qualname: &str,
        show_private: bool,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("heading", heading);
        context.insert("qualname", qualname);
        context.insert("show_private", &show_private);
        Ok(self.tera.render("module.rst", &context)?)
    }

    /// Render the directive block for a class
    pub fn render_class(
        &self,
        heading: &str,
        qualname: &str,
        show_private: bool,
        show_inherited: bool,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("heading", heading);
        context.insert("qualname", qualname);
        context.insert("show_private", &show_private);
        context.insert("show_inherited", &show_inherited);
        Ok(self.tera.render("class.rst", &context)?)
    }

    /// Render the directive block for a function
    pub fn render_function(&self, heading: &str, qualname: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("heading", heading);
        context.insert("qualname", qualname);
        Ok(self.tera.render("function.rst", &context)?)
    }

    /// Render the index page for a package level
    ///
    /// Entries are toctree lines relative to the index's own directory,
    /// already ordered by the caller.
    pub fn render_package_index(
        &self,
        heading: &str,
        doc: Option<&str>,
        entries: &[String],
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("heading", heading);
        context.insert("doc", &doc);
        context.insert("entries", entries);
        Ok(self.tera.render("package_index.rst", &context)?)
    }
}

/// Repeat an underline character to the length of the filtered text
fn underline(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value.as_str().unwrap_or("");
    let ch = args.get("ch").and_then(|v| v.as_str()).unwrap_or("=");
    Ok(Value::String(ch.repeat(s.chars().count())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TemplateEngine {
        TemplateEngine::new().expect("failed to build template engine")
    }

    #[test]
    fn test_underline_filter() {
        let value = Value::String("Heading".to_string());
        let mut args = HashMap::new();
        args.insert("ch".to_string(), Value::String("-".to_string()));
        let result = underline(&value, &args).unwrap();
        assert_eq!(result.as_str().unwrap(), "-------");
    }

    #[test]
    fn test_underline_filter_defaults_to_equals() {
        let value = Value::String("ab".to_string());
        let result = underline(&value, &HashMap::new()).unwrap();
        assert_eq!(result.as_str().unwrap(), "==");
    }

    #[test]
    fn test_render_module() {
        let text = engine()
            .render_module("Top Level Module", "dummypkg.module", false)
            .unwrap();
        assert_eq!(
            text,
            "Top Level Module\n================\n\n.. automodule:: dummypkg.module\n"
        );
    }

    #[test]
    fn test_render_module_private() {
        let text = engine()
            .render_module("Top Level Module", "dummypkg.module", true)
            .unwrap();
        assert_eq!(
            text,
            "Top Level Module\n================\n\n.. automodule:: dummypkg.module\n    :private-members:\n"
        );
    }

    #[test]
    fn test_render_class() {
        let text = engine()
            .render_class("foo", "dummypkg.module.foo", false, false)
            .unwrap();
        assert_eq!(
            text,
            "foo\n---\n\n.. autoclass:: dummypkg.module.foo\n    :show-inheritance:\n    :members:\n    :undoc-members:\n"
        );
    }

    #[test]
    fn test_render_class_private_and_inherited() {
        let text = engine()
            .render_class("foo", "dummypkg.module.foo", true, true)
            .unwrap();
        assert_eq!(
            text,
            "foo\n---\n\n.. autoclass:: dummypkg.module.foo\n    :show-inheritance:\n    :members:\n    :undoc-members:\n    :private-members:\n    :inherited-members:\n"
        );
    }

    #[test]
    fn test_render_function() {
        let text = engine()
            .render_function("raiseErr", "dummypkg.subpkg.goop.raiseErr")
            .unwrap();
        assert_eq!(
            text,
            "raiseErr\n--------\n\n.. autofunction:: dummypkg.subpkg.goop.raiseErr\n"
        );
    }

    #[test]
    fn test_render_package_index() {
        let entries = vec!["goop.rst".to_string()];
        let text = engine()
            .render_package_index("Sub-Package", None, &entries)
            .unwrap();
        assert_eq!(
            text,
            "Sub-Package\n***********\n\n.. toctree::\n   :maxdepth: 5\n   :hidden:\n\n   goop.rst\n"
        );
    }

    #[test]
    fn test_render_package_index_with_doc() {
        let entries = vec!["inner/index.rst".to_string(), "goop.rst".to_string()];
        let text = engine()
            .render_package_index("Sub-Package", Some("Subpackage docs."), &entries)
            .unwrap();
        assert!(text.starts_with("Subpackage docs.\n\nSub-Package\n***********\n"));
        let inner = text.find("inner/index.rst").unwrap();
        let goop = text.find("goop.rst").unwrap();
        assert!(inner < goop);
    }

    #[test]
    fn test_render_module_unicode_heading_width() {
        let text = engine().render_module("héading", "pkg.mod", false).unwrap();
        // Underline counts characters, not bytes
        assert!(text.contains("héading\n=======\n"));
    }
}
