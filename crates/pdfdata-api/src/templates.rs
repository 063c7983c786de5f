//! HTML page rendering
//!
//! Templates are compiled into the binary and registered once in a global
//! minijinja environment. Files ending in `.html` are auto-escaped.

use minijinja::{Environment, Error};
use once_cell::sync::Lazy;
use pdfdata_core::AppError;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("pdfs/index.html", include_str!("../templates/pdfs/index.html")),
    ("pdfs/detail.html", include_str!("../templates/pdfs/detail.html")),
    ("error.html", include_str!("../templates/error.html")),
];

static RENDERER: Lazy<PageRenderer> = Lazy::new(PageRenderer::with_embedded_templates);

/// Shared renderer holding every embedded page template.
pub fn renderer() -> &'static PageRenderer {
    &RENDERER
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    fn with_embedded_templates() -> Self {
        let mut renderer = Self::new();
        for (name, source) in TEMPLATES {
            // A broken template surfaces as a render error for that page only.
            if let Err(err) = renderer.add_template(name, source) {
                tracing::error!(template = name, error = %err, "Failed to compile template");
            }
        }
        renderer
    }

    /// Registers a named template, compiling it immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Render a page, mapping template failures to an internal error.
    pub fn render_page<T: Serialize>(&self, name: &str, data: &T) -> Result<String, AppError> {
        self.render(name, data).map_err(|err| {
            let source = anyhow::Error::new(err);
            AppError::InternalWithSource {
                message: format!("Failed to render template {}", name),
                source,
            }
        })
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_embedded_templates_compile() {
        let mut renderer = PageRenderer::new();
        for (name, source) in TEMPLATES {
            renderer
                .add_template(name, source)
                .unwrap_or_else(|err| panic!("{} failed to compile: {}", name, err));
        }
    }

    #[test]
    fn test_html_templates_are_escaped() {
        let mut renderer = PageRenderer::new();
        renderer.add_template("t.html", "<p>{{ v }}</p>").unwrap();
        let html = renderer
            .render("t.html", &json!({ "v": "<script>x</script>" }))
            .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_unknown_template_is_internal_error() {
        let err = renderer().render_page("missing.html", &json!({})).unwrap_err();
        assert_eq!(err.error_type(), "Internal");
    }
}
