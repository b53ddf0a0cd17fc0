// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO-8601 duration humanization.
//!
//! Turns a periodicity like `"P1Y"` or `"PT30M"` into a localized phrase
//! ("Yearly", "Every 30 minutes"). All display text comes from the
//! injected [`MessageFormatter`]; this module only decides which keys to
//! call with which arguments.
//!
//! There is exactly one failure mode — input that is unparsable or carries
//! no non-zero component — and its behavior is to echo the input verbatim.
//! The function is total over all string inputs and never panics.

use crate::duration::IsoDuration;
use crate::i18n::{CatalogFormatter, Lang, MessageArgs, MessageFormatter};

/// Humanizes an ISO-8601 duration string in the formatter's locale.
///
/// - Unparsable or all-zero input (`"P"`, `"PT"`, `"invalid"`) is returned
///   unchanged.
/// - A single active unit renders through its `<unit>Period` key with the
///   magnitude as `count` ("Yearly", "Every 2 years").
/// - Multiple active units render as `<unit>PeriodUnit` fragments joined
///   into a list and wrapped in `multiplePeriod` ("Every 1 year and
///   2 months"), always ordered largest unit first.
///
/// # Examples
/// ```
/// use periodicity::{humanize_iso_duration, CatalogFormatter, Lang};
/// let en = CatalogFormatter::new(Lang::En);
/// assert_eq!(humanize_iso_duration("P1Y", &en), "Yearly");
/// assert_eq!(humanize_iso_duration("P2Y3M", &en), "Every 2 years and 3 months");
/// assert_eq!(humanize_iso_duration("not-a-duration", &en), "not-a-duration");
/// ```
pub fn humanize_iso_duration(iso: &str, formatter: &dyn MessageFormatter) -> String {
    let Some(duration) = IsoDuration::parse(iso) else {
        return iso.to_string();
    };
    let active = duration.active_units();
    match active.as_slice() {
        [] => iso.to_string(),
        [(unit, count)] => formatter.format(unit.period_key(), &MessageArgs::count(*count)),
        parts => {
            let fragments: Vec<String> = parts
                .iter()
                .map(|&(unit, count)| formatter.format(unit.unit_key(), &MessageArgs::count(count)))
                .collect();
            let joined = join_fragments(&fragments, formatter);
            formatter.format("multiplePeriod", &MessageArgs::vars(&[("units", &joined)]))
        }
    }
}

/// Humanizes with the embedded catalog for `lang`.
///
/// Convenience for callers that do not inject their own formatter.
pub fn humanize_iso_duration_in(iso: &str, lang: Lang) -> String {
    humanize_iso_duration(iso, &CatalogFormatter::new(lang))
}

/// Joins two or more rendered unit fragments into one list phrase.
///
/// Two fragments use `listTwo`. Three or more fold all but the last
/// left-associatively through `listComma`, then attach the last via
/// `listMoreThanTwo` for the Oxford-comma-style "A, B and C".
fn join_fragments(fragments: &[String], formatter: &dyn MessageFormatter) -> String {
    if let [first, second] = fragments {
        return formatter.format("listTwo", &MessageArgs::vars(&[("0", first), ("1", second)]));
    }
    let Some((last, rest)) = fragments.split_last() else {
        return String::new();
    };
    let Some((head, tail)) = rest.split_first() else {
        return last.clone();
    };
    let mut items = head.clone();
    for fragment in tail {
        items = formatter.format("listComma", &MessageArgs::vars(&[("0", &items), ("1", fragment)]));
    }
    formatter.format(
        "listMoreThanTwo",
        &MessageArgs::vars(&[("items", &items), ("lastItem", last)]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every (key, count) call so tests can assert the core
    /// drives the capability with the right keys in the right order.
    #[derive(Default)]
    struct RecordingFormatter {
        calls: RefCell<Vec<(String, Option<u64>)>>,
    }

    impl MessageFormatter for RecordingFormatter {
        fn format(&self, key: &str, args: &MessageArgs<'_>) -> String {
            self.calls.borrow_mut().push((key.to_string(), args.count));
            format!("<{key}>")
        }
    }

    #[test]
    fn single_unit_uses_period_key_with_count() {
        let recorder = RecordingFormatter::default();
        humanize_iso_duration("P4Y", &recorder);
        assert_eq!(
            recorder.calls.into_inner(),
            vec![("yearPeriod".to_string(), Some(4))]
        );
    }

    #[test]
    fn multi_unit_call_sequence() {
        let recorder = RecordingFormatter::default();
        humanize_iso_duration("P1Y2M3D", &recorder);
        let keys: Vec<String> = recorder.calls.into_inner().into_iter().map(|c| c.0).collect();
        assert_eq!(
            keys,
            vec![
                "yearPeriodUnit",
                "monthPeriodUnit",
                "dayPeriodUnit",
                "listComma",
                "listMoreThanTwo",
                "multiplePeriod"
            ]
        );
    }

    #[test]
    fn two_unit_call_sequence() {
        let recorder = RecordingFormatter::default();
        humanize_iso_duration("PT1H30M", &recorder);
        let keys: Vec<String> = recorder.calls.into_inner().into_iter().map(|c| c.0).collect();
        assert_eq!(
            keys,
            vec!["hourPeriodUnit", "minutePeriodUnit", "listTwo", "multiplePeriod"]
        );
    }

    #[test]
    fn fallback_never_touches_formatter() {
        let recorder = RecordingFormatter::default();
        assert_eq!(humanize_iso_duration("invalid", &recorder), "invalid");
        assert_eq!(humanize_iso_duration("P", &recorder), "P");
        assert_eq!(humanize_iso_duration("PT", &recorder), "PT");
        assert!(recorder.calls.into_inner().is_empty());
    }

    #[test]
    fn zero_components_filtered_before_rendering() {
        let recorder = RecordingFormatter::default();
        humanize_iso_duration("P0Y5D", &recorder);
        assert_eq!(
            recorder.calls.into_inner(),
            vec![("dayPeriod".to_string(), Some(5))]
        );
    }
}
