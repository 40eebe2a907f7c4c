//! BRFC id generation and spec list checking.

use anyhow::{Context, Result};
use pm_01_brfc::{BrfcIdScheme, BrfcRegistry, BrfcSpec};

/// Generate the id for one descriptor.
pub fn generate(title: &str, author: &str, version: &str, scheme: BrfcIdScheme) -> Result<String> {
    let mut spec = BrfcSpec::new(title, author, version);
    let id = spec
        .generate_with(scheme)
        .with_context(|| format!("cannot generate id for {title:?}"))?;
    Ok(id.to_string())
}

/// Load a JSON spec list and describe every entry, one line each.
pub fn check(json: &str, scheme: BrfcIdScheme) -> Result<Vec<String>> {
    let registry = BrfcRegistry::from_json_with(json, scheme).context("invalid BRFC spec list")?;

    Ok(registry
        .iter()
        .map(|(id, spec)| {
            let mut line = format!("{id}  {} v{}", spec.title(), spec.version());
            if let Some(alias) = &spec.alias {
                line.push_str(&format!(" ({alias})"));
            }
            line
        })
        .collect())
}
