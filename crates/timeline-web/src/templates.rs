//! Page templates rendered with `minijinja`.
//!
//! Templates are compiled into the binary so the server has no runtime
//! file dependencies. Names ending in `.html` are auto-escaped.

use minijinja::Environment;
use serde::Serialize;

use crate::error::SiteError;

/// Every template, by name.
const TEMPLATES: [(&str, &str); 9] = [
    ("layout.html", include_str!("../templates/layout.html")),
    ("admin_layout.html", include_str!("../templates/admin_layout.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("history.html", include_str!("../templates/history.html")),
    ("map.html", include_str!("../templates/map.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("register.html", include_str!("../templates/register.html")),
    ("dashboard.html", include_str!("../templates/dashboard.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

/// Compiled page templates.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compile the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Template`] if any template has a syntax error.
    pub fn new() -> Result<Self, SiteError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| SiteError::Template(format!("failed to add {name}: {e}")))?;
        }
        Ok(Self { env })
    }

    /// Render `name` with `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Template`] if the template is unknown or
    /// rendering fails.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, SiteError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| SiteError::Template(format!("missing template {name}: {e}")))?;
        template
            .render(ctx)
            .map_err(|e| SiteError::Template(format!("{name} render failed: {e}")))
    }

    /// Names of all loaded templates.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.env.templates().map(|(name, _)| name)
    }
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates")
            .field("count", &self.env.templates().count())
            .finish()
    }
}

/// Serialize `value` as JSON that is safe to embed inside a `<script>`
/// element.
///
/// # Errors
///
/// Returns [`SiteError::Serialization`] if `value` cannot be serialized.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<minijinja::Value, SiteError> {
    let json = serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026");
    Ok(minijinja::Value::from_safe_string(json))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use minijinja::context;

    use super::*;

    #[test]
    fn all_templates_compile() {
        let templates = Templates::new().unwrap();
        assert_eq!(templates.names().count(), TEMPLATES.len());
    }

    #[test]
    fn not_found_renders_inside_layout() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render("not_found.html", context! { path => "/nowhere" })
            .unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Trang không tồn tại"));
    }

    #[test]
    fn html_is_escaped() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render("not_found.html", context! { path => "<script>alert(1)</script>" })
            .unwrap();
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn script_json_cannot_close_the_script_element() {
        let value = script_json(&["</script><b>"]).unwrap();
        let rendered = value.to_string();
        assert!(!rendered.contains("</script>"));
        assert!(rendered.contains("\\u003c/script\\u003e"));
    }
}
