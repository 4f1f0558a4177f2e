// SPDX-License-Identifier: MPL-2.0
//! Host locale providers.
//!
//! The resolver asks its [`HostLocale`] for the environment's active
//! language and country whenever no override is set. [`SystemLocale`] is
//! the production implementation; [`FixedLocale`] makes tests deterministic.

use sys_locale::get_locale;
use unic_langid::LanguageIdentifier;

/// Read-only view of the platform's active locale.
///
/// Treated as infallible: implementations must always answer, falling back
/// to a sensible default rather than erroring.
pub trait HostLocale {
    /// Primary language subtag, e.g. `"en"`.
    fn language(&self) -> String;

    /// Country/region subtag, e.g. `"US"`. Empty when the host reports none.
    fn country(&self) -> String;
}

/// The operating system's active locale, queried at call time.
///
/// Re-queried on every call so a system-settings change is picked up
/// without restarting the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocale;

impl SystemLocale {
    pub fn new() -> Self {
        Self
    }

    fn identifier(&self) -> LanguageIdentifier {
        get_locale()
            .and_then(|raw| raw.parse::<LanguageIdentifier>().ok())
            .unwrap_or_else(|| "en-US".parse().expect("en-US is a valid identifier"))
    }
}

impl HostLocale for SystemLocale {
    fn language(&self) -> String {
        self.identifier().language.to_string()
    }

    fn country(&self) -> String {
        self.identifier()
            .region
            .map(|region| region.to_string())
            .unwrap_or_default()
    }
}

/// A host locale pinned to fixed values.
#[derive(Debug, Clone)]
pub struct FixedLocale {
    language: String,
    country: String,
}

impl FixedLocale {
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
        }
    }
}

impl HostLocale for FixedLocale {
    fn language(&self) -> String {
        self.language.clone()
    }

    fn country(&self) -> String {
        self.country.clone()
    }
}
