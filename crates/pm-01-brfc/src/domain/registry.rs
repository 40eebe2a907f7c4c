//! # Spec Lists
//!
//! Capability documents ship lists of known BRFCs as JSON. Entries without an
//! id get one generated; entries with an id must match their fields.

use super::entities::{BrfcId, BrfcSpec};
use super::errors::BrfcError;
use super::generator::{generate_id, BrfcIdScheme};
use std::collections::BTreeMap;

/// Parse a JSON array of specs, generating or checking every id.
pub fn load_specs(json: &str, scheme: BrfcIdScheme) -> Result<Vec<BrfcSpec>, BrfcError> {
    let mut specs: Vec<BrfcSpec> =
        serde_json::from_str(json).map_err(|e| BrfcError::Parse(e.to_string()))?;

    for spec in &mut specs {
        let derived = generate_id(spec.title(), spec.author(), spec.version(), scheme)?;
        match spec.id() {
            Some(published) if *published != derived => {
                return Err(BrfcError::IdMismatch {
                    title: spec.title().to_string(),
                    expected: derived.to_string(),
                    actual: published.to_string(),
                });
            }
            Some(_) => {}
            None => spec.set_published_id(derived),
        }
    }

    tracing::debug!(count = specs.len(), "BRFC specs loaded");
    Ok(specs)
}

/// Lookup table of validated specs keyed by id.
#[derive(Clone, Debug, Default)]
pub struct BrfcRegistry {
    specs: BTreeMap<BrfcId, BrfcSpec>,
}

impl BrfcRegistry {
    /// Build from a JSON spec list with the default scheme.
    pub fn from_json(json: &str) -> Result<Self, BrfcError> {
        Self::from_json_with(json, BrfcIdScheme::default())
    }

    /// Build from a JSON spec list with an explicit scheme.
    pub fn from_json_with(json: &str, scheme: BrfcIdScheme) -> Result<Self, BrfcError> {
        let mut registry = Self::default();
        for spec in load_specs(json, scheme)? {
            registry.insert(spec)?;
        }
        Ok(registry)
    }

    /// Add a spec, generating its id if it has none.
    pub fn insert(&mut self, mut spec: BrfcSpec) -> Result<BrfcId, BrfcError> {
        let id = match spec.id() {
            Some(id) => id.clone(),
            None => spec.generate()?.clone(),
        };
        self.specs.insert(id.clone(), spec);
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Option<&BrfcSpec> {
        self.specs.get(&BrfcId::new(id.to_string()))
    }

    /// Find a spec by its published alias.
    pub fn find_by_alias(&self, alias: &str) -> Option<&BrfcSpec> {
        self.specs
            .values()
            .find(|spec| spec.alias.as_deref() == Some(alias))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BrfcId, &BrfcSpec)> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
