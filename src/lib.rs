// SPDX-License-Identifier: PMPL-1.0-or-later

//! Periodicity — ISO-8601 duration humanization.
//!
//! This crate renders the periodicity of a statistical data source (how
//! often it publishes or observes a value, expressed as an ISO-8601
//! duration such as `"P1Y"` or `"PT30M"`) as a localized human-readable
//! phrase ("Yearly", "Every 30 minutes", "Every 2 years and 3 months").
//!
//! CORE PIECES:
//! 1. **Duration**: a strict integer-only ISO-8601 duration parser with a
//!    fixed largest-to-smallest unit order.
//! 2. **Humanize**: the rendering logic — rate phrase for a single unit,
//!    grammatically joined list for several, verbatim echo for anything
//!    unparsable or all-zero.
//! 3. **I18n**: the injected message-formatting capability, with embedded
//!    catalogs for en/es/fr/de and runtime JSON bundles for everything
//!    else.
//!
//! ```
//! use periodicity::{humanize_iso_duration, CatalogFormatter, Lang};
//!
//! let en = CatalogFormatter::new(Lang::En);
//! assert_eq!(humanize_iso_duration("P1Y", &en), "Yearly");
//! assert_eq!(humanize_iso_duration("PT30M", &en), "Every 30 minutes");
//! assert_eq!(
//!     humanize_iso_duration("P2Y3M", &en),
//!     "Every 2 years and 3 months"
//! );
//! // Unparsable input is echoed, never an error.
//! assert_eq!(humanize_iso_duration("P1Y2W-bad", &en), "P1Y2W-bad");
//! ```

pub mod duration;
pub mod humanize;
pub mod i18n;

pub use duration::{IsoDuration, Unit};
pub use humanize::{humanize_iso_duration, humanize_iso_duration_in};
pub use i18n::{CatalogFormatter, Lang, MessageArgs, MessageBundle, MessageFormatter};
