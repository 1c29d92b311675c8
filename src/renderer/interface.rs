use crate::error::Result;

/// Trait for template rendering engines.
///
/// Implementations substitute named fields from `context` into the template
/// text. Rendering must be pure: the same template and context always give
/// the same output, and nothing touches the filesystem.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Logical template name, used in error messages
    /// * `template` - Template source
    /// * `context` - Values available to the template
    ///
    /// # Returns
    /// * `Err(Error::Template)` - If the template is malformed or refers to a
    ///   field the context does not provide
    fn render(&self, name: &str, template: &str, context: &serde_json::Value)
        -> Result<String>;
}
