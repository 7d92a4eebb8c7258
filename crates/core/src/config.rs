//! Domain configuration loading.
//! The *shape* of the document is core's concern (`DomainConfig`, in
//! `domain::inference`); *where* it lives is a CLI concern, but parsing the
//! bytes it finds belongs here since it's the same `serde` shape the
//! resolver/domain-inference pass consumes either way.

use crate::domain::DomainConfig;
use crate::error::CoreError;
use std::path::Path;

/// Parses a domain configuration document from its TOML text. A malformed
/// document is a [`CoreError::Config`], never a panic — callers fall back
/// to pure inference.
pub fn parse_domain_config(text: &str) -> Result<DomainConfig, CoreError> {
    toml::from_str(text).map_err(|e| CoreError::Config(e.to_string()))
}

/// Loads and parses a domain configuration file from disk. Returns `Ok(None)`
/// if the path doesn't exist — an absent config is not an error, it simply
/// means "infer everything".
pub fn load_domain_config(path: &Path) -> Result<Option<DomainConfig>, CoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)?;
    parse_domain_config(&text).map(Some)
}
