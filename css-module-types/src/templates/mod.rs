//! Declaration file template rendering

use handlebars::Handlebars;
use serde_json::json;

use crate::error::{Result, TypegenError};

/// Declaration file template
///
/// `members` is the pre-joined list of `readonly <name>: string;` lines, so an
/// empty class list leaves a single blank line inside the interface body.
pub const DECLARATION_TEMPLATE: &str = r"// Auto-generated CSS Module type definitions
export interface {{interface_name}} {
{{members}}
}

declare const styles: {{interface_name}};
export default styles;
";

const TEMPLATE_NAME: &str = "declaration";

/// Renderer for CSS Module declaration files
pub struct DeclarationTemplate {
    handlebars: Handlebars<'static>,
}

impl DeclarationTemplate {
    /// Create a renderer with the declaration template registered
    ///
    /// # Errors
    ///
    /// Returns [`TypegenError::Template`] if the template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .register_template_string(TEMPLATE_NAME, DECLARATION_TEMPLATE)
            .map_err(|e| TypegenError::Template(e.to_string()))?;

        Ok(Self { handlebars })
    }

    /// Render the declaration text for one stylesheet
    ///
    /// # Errors
    ///
    /// Returns [`TypegenError::Template`] if rendering fails.
    pub fn render(&self, interface_name: &str, class_names: &[String]) -> Result<String> {
        let members = class_names
            .iter()
            .map(|name| format!("  readonly {name}: string;"))
            .collect::<Vec<_>>()
            .join("\n");

        let context = json!({
            "interface_name": interface_name,
            "members": members,
        });

        self.handlebars
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| TypegenError::Template(e.to_string()))
    }
}
