//! Embedded tera templates
//!
//! Templates are compiled into the binary so the portal has nothing to read
//! from disk at runtime.

use anyhow::Context;
use rust_embed::RustEmbed;
use tera::Tera;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

/// Compile every embedded template into one Tera instance
pub fn build() -> anyhow::Result<Tera> {
    let mut raw = Vec::new();
    for path in Templates::iter() {
        let file = Templates::get(&path)
            .ok_or_else(|| anyhow::anyhow!("missing embedded template {path}"))?;
        let content = String::from_utf8(file.data.into_owned())
            .with_context(|| format!("template {path} is not valid UTF-8"))?;
        raw.push((path.to_string(), content));
    }
    let mut tera = Tera::default();
    // add_raw_templates resolves {% extends %} ordering across the set
    tera.add_raw_templates(raw).context("compile portal templates")?;
    Ok(tera)
}
