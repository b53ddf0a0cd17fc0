// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime message bundles.
//!
//! The upstream web front end loads compiled per-locale message modules as
//! JSON at page load and merges them into its formatter. This is the
//! library counterpart: a flat `key → template` map deserialized from
//! JSON, layered over the embedded catalog by
//! [`CatalogFormatter::with_bundle`](super::CatalogFormatter::with_bundle).
//!
//! Bundle keys use the same naming as the embedded catalog, including the
//! `.one`/`.other` plural suffixes, e.g.:
//!
//! ```json
//! {
//!   "yearPeriod.one": "Annually",
//!   "yearPeriod.other": "Every {count} years"
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A set of message templates loaded at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {
    /// Parses a bundle from a JSON object of `key → template` strings.
    pub fn from_json(json: &str) -> Result<MessageBundle> {
        serde_json::from_str(json).context("parsing message bundle JSON")
    }

    /// Reads and parses a bundle file.
    pub fn from_path(path: &Path) -> Result<MessageBundle> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading message bundle {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Merges another bundle into this one; entries from `other` win on
    /// key collisions, matching last-module-wins load order upstream.
    pub fn merge(&mut self, other: MessageBundle) {
        self.messages.extend(other.messages);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_object() {
        let bundle =
            MessageBundle::from_json(r#"{"yearPeriod.one": "Annually"}"#).expect("should parse");
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.get("yearPeriod.one"), Some("Annually"));
        assert_eq!(bundle.get("missing"), None);
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(MessageBundle::from_json("[1, 2]").is_err());
        assert!(MessageBundle::from_json("not json").is_err());
    }

    #[test]
    fn merge_prefers_newer_entries() {
        let mut base = MessageBundle::from_json(r#"{"a": "old", "b": "kept"}"#).unwrap();
        let patch = MessageBundle::from_json(r#"{"a": "new"}"#).unwrap();
        base.merge(patch);
        assert_eq!(base.get("a"), Some("new"));
        assert_eq!(base.get("b"), Some("kept"));
    }
}
