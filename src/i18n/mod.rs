// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for periodicity.
//!
//! Provides the message-formatting capability the humanizer renders
//! through. The humanizer never produces display text itself; it asks an
//! injected [`MessageFormatter`] for every phrase, so the same rendering
//! logic serves every locale.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | es   | Spanish  | Español     |
//! | fr   | French   | Français    |
//! | de   | German   | Deutsch     |
//!
//! ## Design
//!
//! Message keys mirror the upstream web catalog: one `<unit>Period` key
//! per unit for single-unit rate phrases ("Yearly"), one `<unit>PeriodUnit`
//! key for list items ("2 years"), and four list-composition keys
//! (`listTwo`, `listComma`, `listMoreThanTwo`, `multiplePeriod`).
//! Plural-sensitive keys carry `.one`/`.other` variants selected by a
//! per-language plural rule. Lookups fall back to English when a key is
//! missing in the requested language; if the key is missing in English
//! too, the key string itself is returned (fail-open, never panics).
//!
//! The built-in catalog is embedded at compile time as static data. A
//! [`MessageBundle`] loaded from JSON at runtime can override or extend
//! it without recompiling.

mod bundle;
mod catalog;

pub use bundle::MessageBundle;
pub use catalog::{CatalogFormatter, Lang};

/// Arguments passed alongside a message key.
///
/// `count` drives plural-form selection in the formatter and is available
/// to templates as `{count}`. `vars` are named interpolation values for
/// the list-composition templates (`{0}`, `{1}`, `{items}`, `{lastItem}`,
/// `{units}`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageArgs<'a> {
    pub count: Option<u64>,
    pub vars: &'a [(&'a str, &'a str)],
}

impl<'a> MessageArgs<'a> {
    /// No arguments.
    pub fn none() -> Self {
        Self::default()
    }

    /// A bare count, for plural-sensitive unit messages.
    pub fn count(count: u64) -> Self {
        MessageArgs {
            count: Some(count),
            vars: &[],
        }
    }

    /// Named interpolation values, for list-composition messages.
    pub fn vars(vars: &'a [(&'a str, &'a str)]) -> Self {
        MessageArgs { count: None, vars }
    }
}

/// The localization seam: resolves a message key plus arguments to
/// display text.
///
/// Implementations own pluralization and interpolation. The humanizer's
/// only obligation is to call with the right key and arguments in the
/// right order; it never inspects the returned text.
pub trait MessageFormatter {
    fn format(&self, key: &str, args: &MessageArgs<'_>) -> String;
}
