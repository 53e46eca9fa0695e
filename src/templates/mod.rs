mod prompt;

pub use prompt::*;

use crate::error::{Error, Result};
use crate::model::ModelFormat;
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::json;

/// Every format's template, registered under the format name
static REGISTRY: Lazy<std::result::Result<Handlebars<'static>, String>> = Lazy::new(build_registry);

fn build_registry() -> std::result::Result<Handlebars<'static>, String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    // Prompts are plain text, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);

    for format in ModelFormat::ALL {
        handlebars
            .register_template_string(format.name(), format.template())
            .map_err(|e| format!("{} template: {}", format.name(), e))?;
    }

    Ok(handlebars)
}

/// Render `format`'s template with `text` inserted verbatim
pub fn render(format: ModelFormat, text: &str) -> Result<String> {
    let handlebars = REGISTRY.as_ref().map_err(|reason| Error::Template {
        reason: reason.clone(),
    })?;

    let data = json!({ "text": text });
    let prompt = handlebars.render(format.name(), &data)?;

    Ok(prompt)
}
