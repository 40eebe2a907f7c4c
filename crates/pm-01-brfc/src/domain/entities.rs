//! # Domain Entities
//!
//! The descriptor owns its identifier. Changing any hashed field drops the
//! stored id, so an id is never left pointing at fields it was not derived
//! from.

use super::errors::BrfcError;
use super::generator::{generate_id, BrfcIdScheme};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Derived BRFC identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrfcId(String);

impl BrfcId {
    pub(crate) fn new(id: String) -> Self {
        Self(id)
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrfcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BrfcId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A capability specification descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrfcSpec {
    #[serde(default)]
    author: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    version: String,
    #[serde(
        default,
        deserialize_with = "empty_id_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    id: Option<BrfcId>,
    /// Short name capability documents may use instead of the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Where the specification text is published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Ids of specifications this one replaces
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supersedes: Vec<String>,
}

impl BrfcSpec {
    /// Create a descriptor without an id.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Set the published alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the published url.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The generated id, if any.
    pub fn id(&self) -> Option<&BrfcId> {
        self.id.as_ref()
    }

    /// Replace the title. Clears any generated id.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.id = None;
    }

    /// Replace the author. Clears any generated id.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
        self.id = None;
    }

    /// Replace the version. Clears any generated id.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
        self.id = None;
    }

    /// Generate and store the id with the default scheme.
    pub fn generate(&mut self) -> Result<&BrfcId, BrfcError> {
        self.generate_with(BrfcIdScheme::default())
    }

    /// Generate and store the id with an explicit scheme.
    ///
    /// On error any stored id is cleared.
    pub fn generate_with(&mut self, scheme: BrfcIdScheme) -> Result<&BrfcId, BrfcError> {
        let id = match generate_id(&self.title, &self.author, &self.version, scheme) {
            Ok(id) => id,
            Err(e) => {
                self.id = None;
                return Err(e);
            }
        };
        tracing::debug!(title = %self.title, version = %self.version, id = %id, "BRFC id generated");
        Ok(self.id.insert(id))
    }

    /// Regenerate the id and compare it with the stored one.
    ///
    /// Returns whether they match, along with the regenerated id.
    pub fn validate(&self) -> Result<(bool, BrfcId), BrfcError> {
        self.validate_with(BrfcIdScheme::default())
    }

    /// [`BrfcSpec::validate`] with an explicit scheme.
    pub fn validate_with(&self, scheme: BrfcIdScheme) -> Result<(bool, BrfcId), BrfcError> {
        let stored = self
            .id
            .as_ref()
            .ok_or_else(|| BrfcError::InvalidSpec("no id to validate".into()))?;
        let regenerated = generate_id(&self.title, &self.author, &self.version, scheme)?;
        Ok((*stored == regenerated, regenerated))
    }

    pub(crate) fn set_published_id(&mut self, id: BrfcId) {
        self.id = Some(id);
    }
}

fn empty_id_as_none<'de, D>(deserializer: D) -> Result<Option<BrfcId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .map(BrfcId))
}
