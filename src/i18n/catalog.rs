// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for periodicity phrases.
//!
//! Embeds all display strings for supported languages as compile-time
//! static tables. Lookup is O(n) on the key list per language, which is
//! fine for the 32 keys each catalog carries — humanization runs once per
//! displayed facet, not in a hot loop.
//!
//! Plural-sensitive keys are stored as `<key>.one` / `<key>.other` pairs;
//! [`CatalogFormatter`] selects the variant from the `count` argument
//! using a per-language plural rule, then interpolates `{name}`
//! placeholders.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add a `Lang::Xx => "xx"` arm to `Lang::code()`
//! 3. Add a `"xx" => Some(Lang::Xx)` arm to `Lang::from_code()`
//! 4. Create a `const XX: &[(&str, &str)]` table below
//! 5. Add `Lang::Xx => XX` to the match in `catalog_for()`
//! 6. Extend `plural_rule()` if the language does not use the
//!    "exactly one is singular" rule
//!
//! Alternatively ship translations at runtime as a [`MessageBundle`]
//! without touching this file.

use serde::{Deserialize, Serialize};

use super::{MessageArgs, MessageBundle, MessageFormatter};

/// Supported display languages for humanized periodicities.
///
/// Each variant maps to an ISO 639-1 two-letter code, matching the `hl`
/// locale parameter the upstream pages carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lang {
    En,
    Es,
    Fr,
    De,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::De => "de",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            "fr" => Some(Lang::Fr),
            "de" => Some(Lang::De),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Es, Lang::Fr, Lang::De]
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Plural category for a count in a given language.
///
/// CLDR cardinal rules, reduced to the two categories these catalogs
/// distinguish: French treats 0 and 1 as singular, the others only 1.
fn plural_suffix(lang: Lang, count: u64) -> &'static str {
    let one = match lang {
        Lang::Fr => count < 2,
        _ => count == 1,
    };
    if one {
        "one"
    } else {
        "other"
    }
}

/// A [`MessageFormatter`] backed by the embedded catalogs, with optional
/// runtime overrides from a [`MessageBundle`].
///
/// Resolution order: bundle override → requested language → English →
/// the key itself (fail-open design — never panics, never returns empty).
///
/// # Examples
///
/// ```
/// use periodicity::{CatalogFormatter, Lang, MessageArgs, MessageFormatter};
/// let en = CatalogFormatter::new(Lang::En);
/// assert_eq!(en.format("yearPeriod", &MessageArgs::count(1)), "Yearly");
/// assert_eq!(en.format("yearPeriod", &MessageArgs::count(4)), "Every 4 years");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogFormatter {
    lang: Lang,
    bundle: Option<MessageBundle>,
}

impl CatalogFormatter {
    pub fn new(lang: Lang) -> Self {
        CatalogFormatter { lang, bundle: None }
    }

    /// A formatter whose bundle entries take precedence over the embedded
    /// catalog, so callers can ship or patch translations at runtime.
    pub fn with_bundle(lang: Lang, bundle: MessageBundle) -> Self {
        CatalogFormatter {
            lang,
            bundle: Some(bundle),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    fn resolve(&self, key: &str) -> Option<&str> {
        if let Some(bundle) = &self.bundle {
            if let Some(template) = bundle.get(key) {
                return Some(template);
            }
        }
        if let Some(template) = lookup(catalog_for(self.lang), key) {
            return Some(template);
        }
        if self.lang != Lang::En {
            if let Some(template) = lookup(EN, key) {
                return Some(template);
            }
        }
        None
    }
}

impl MessageFormatter for CatalogFormatter {
    fn format(&self, key: &str, args: &MessageArgs<'_>) -> String {
        let template = match args.count {
            Some(count) => {
                let plural_key = format!("{key}.{}", plural_suffix(self.lang, count));
                self.resolve(&plural_key)
                    .or_else(|| self.resolve(key))
                    .map(str::to_string)
            }
            None => self.resolve(key).map(str::to_string),
        };
        let Some(template) = template else {
            // Fail-open: echo the key so a missing translation degrades to
            // something traceable instead of panicking.
            return key.to_string();
        };
        interpolate(&template, args)
    }
}

fn interpolate(template: &str, args: &MessageArgs<'_>) -> String {
    let mut out = template.to_string();
    if let Some(count) = args.count {
        out = out.replace("{count}", &count.to_string());
    }
    for &(name, value) in args.vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Es => ES,
        Lang::Fr => FR,
        Lang::De => DE,
    }
}

// ─── English (source language — all keys defined here) ──────────────

const EN: &[(&str, &str)] = &[
    // Single-unit rate phrases
    ("yearPeriod.one", "Yearly"),
    ("yearPeriod.other", "Every {count} years"),
    ("monthPeriod.one", "Monthly"),
    ("monthPeriod.other", "Every {count} months"),
    ("weekPeriod.one", "Weekly"),
    ("weekPeriod.other", "Every {count} weeks"),
    ("dayPeriod.one", "Daily"),
    ("dayPeriod.other", "Every {count} days"),
    ("hourPeriod.one", "Hourly"),
    ("hourPeriod.other", "Every {count} hours"),
    ("minutePeriod.one", "Every minute"),
    ("minutePeriod.other", "Every {count} minutes"),
    ("secondPeriod.one", "Every second"),
    ("secondPeriod.other", "Every {count} seconds"),
    // List-item phrases for multi-unit durations
    ("yearPeriodUnit.one", "{count} year"),
    ("yearPeriodUnit.other", "{count} years"),
    ("monthPeriodUnit.one", "{count} month"),
    ("monthPeriodUnit.other", "{count} months"),
    ("weekPeriodUnit.one", "{count} week"),
    ("weekPeriodUnit.other", "{count} weeks"),
    ("dayPeriodUnit.one", "{count} day"),
    ("dayPeriodUnit.other", "{count} days"),
    ("hourPeriodUnit.one", "{count} hour"),
    ("hourPeriodUnit.other", "{count} hours"),
    ("minutePeriodUnit.one", "{count} minute"),
    ("minutePeriodUnit.other", "{count} minutes"),
    ("secondPeriodUnit.one", "{count} second"),
    ("secondPeriodUnit.other", "{count} seconds"),
    // List composition
    ("listTwo", "{0} and {1}"),
    ("listComma", "{0}, {1}"),
    ("listMoreThanTwo", "{items} and {lastItem}"),
    ("multiplePeriod", "Every {units}"),
];

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(&str, &str)] = &[
    ("yearPeriod.one", "Anual"),
    ("yearPeriod.other", "Cada {count} años"),
    ("monthPeriod.one", "Mensual"),
    ("monthPeriod.other", "Cada {count} meses"),
    ("weekPeriod.one", "Semanal"),
    ("weekPeriod.other", "Cada {count} semanas"),
    ("dayPeriod.one", "Diario"),
    ("dayPeriod.other", "Cada {count} días"),
    ("hourPeriod.one", "Cada hora"),
    ("hourPeriod.other", "Cada {count} horas"),
    ("minutePeriod.one", "Cada minuto"),
    ("minutePeriod.other", "Cada {count} minutos"),
    ("secondPeriod.one", "Cada segundo"),
    ("secondPeriod.other", "Cada {count} segundos"),
    ("yearPeriodUnit.one", "{count} año"),
    ("yearPeriodUnit.other", "{count} años"),
    ("monthPeriodUnit.one", "{count} mes"),
    ("monthPeriodUnit.other", "{count} meses"),
    ("weekPeriodUnit.one", "{count} semana"),
    ("weekPeriodUnit.other", "{count} semanas"),
    ("dayPeriodUnit.one", "{count} día"),
    ("dayPeriodUnit.other", "{count} días"),
    ("hourPeriodUnit.one", "{count} hora"),
    ("hourPeriodUnit.other", "{count} horas"),
    ("minutePeriodUnit.one", "{count} minuto"),
    ("minutePeriodUnit.other", "{count} minutos"),
    ("secondPeriodUnit.one", "{count} segundo"),
    ("secondPeriodUnit.other", "{count} segundos"),
    ("listTwo", "{0} y {1}"),
    ("listComma", "{0}, {1}"),
    ("listMoreThanTwo", "{items} y {lastItem}"),
    ("multiplePeriod", "Cada {units}"),
];

// ─── French ─────────────────────────────────────────────────────────

const FR: &[(&str, &str)] = &[
    ("yearPeriod.one", "Annuel"),
    ("yearPeriod.other", "Tous les {count} ans"),
    ("monthPeriod.one", "Mensuel"),
    ("monthPeriod.other", "Tous les {count} mois"),
    ("weekPeriod.one", "Hebdomadaire"),
    ("weekPeriod.other", "Toutes les {count} semaines"),
    ("dayPeriod.one", "Quotidien"),
    ("dayPeriod.other", "Tous les {count} jours"),
    ("hourPeriod.one", "Toutes les heures"),
    ("hourPeriod.other", "Toutes les {count} heures"),
    ("minutePeriod.one", "Chaque minute"),
    ("minutePeriod.other", "Toutes les {count} minutes"),
    ("secondPeriod.one", "Chaque seconde"),
    ("secondPeriod.other", "Toutes les {count} secondes"),
    ("yearPeriodUnit.one", "{count} an"),
    ("yearPeriodUnit.other", "{count} ans"),
    ("monthPeriodUnit.one", "{count} mois"),
    ("monthPeriodUnit.other", "{count} mois"),
    ("weekPeriodUnit.one", "{count} semaine"),
    ("weekPeriodUnit.other", "{count} semaines"),
    ("dayPeriodUnit.one", "{count} jour"),
    ("dayPeriodUnit.other", "{count} jours"),
    ("hourPeriodUnit.one", "{count} heure"),
    ("hourPeriodUnit.other", "{count} heures"),
    ("minutePeriodUnit.one", "{count} minute"),
    ("minutePeriodUnit.other", "{count} minutes"),
    ("secondPeriodUnit.one", "{count} seconde"),
    ("secondPeriodUnit.other", "{count} secondes"),
    ("listTwo", "{0} et {1}"),
    ("listComma", "{0}, {1}"),
    ("listMoreThanTwo", "{items} et {lastItem}"),
    ("multiplePeriod", "Tous les {units}"),
];

// ─── German ─────────────────────────────────────────────────────────

const DE: &[(&str, &str)] = &[
    ("yearPeriod.one", "Jährlich"),
    ("yearPeriod.other", "Alle {count} Jahre"),
    ("monthPeriod.one", "Monatlich"),
    ("monthPeriod.other", "Alle {count} Monate"),
    ("weekPeriod.one", "Wöchentlich"),
    ("weekPeriod.other", "Alle {count} Wochen"),
    ("dayPeriod.one", "Täglich"),
    ("dayPeriod.other", "Alle {count} Tage"),
    ("hourPeriod.one", "Stündlich"),
    ("hourPeriod.other", "Alle {count} Stunden"),
    ("minutePeriod.one", "Jede Minute"),
    ("minutePeriod.other", "Alle {count} Minuten"),
    ("secondPeriod.one", "Jede Sekunde"),
    ("secondPeriod.other", "Alle {count} Sekunden"),
    ("yearPeriodUnit.one", "{count} Jahr"),
    ("yearPeriodUnit.other", "{count} Jahre"),
    ("monthPeriodUnit.one", "{count} Monat"),
    ("monthPeriodUnit.other", "{count} Monate"),
    ("weekPeriodUnit.one", "{count} Woche"),
    ("weekPeriodUnit.other", "{count} Wochen"),
    ("dayPeriodUnit.one", "{count} Tag"),
    ("dayPeriodUnit.other", "{count} Tage"),
    ("hourPeriodUnit.one", "{count} Stunde"),
    ("hourPeriodUnit.other", "{count} Stunden"),
    ("minutePeriodUnit.one", "{count} Minute"),
    ("minutePeriodUnit.other", "{count} Minuten"),
    ("secondPeriodUnit.one", "{count} Sekunde"),
    ("secondPeriodUnit.other", "{count} Sekunden"),
    ("listTwo", "{0} und {1}"),
    ("listComma", "{0}, {1}"),
    ("listMoreThanTwo", "{items} und {lastItem}"),
    ("multiplePeriod", "Alle {units}"),
];
