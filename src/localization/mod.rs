// SPDX-License-Identifier: MPL-2.0
//! Locale resolution with override precedence.
//!
//! [`Localization`] answers two questions - "what language should the app
//! use?" and "what region is the user in?" - by checking a persisted
//! override first and falling back to the host locale:
//!
//! 1. A value the user (or the app on their behalf) explicitly set, stored
//!    under `locale_override` / `region_override`.
//! 2. The host environment's active locale, queried at call time.
//!
//! Override values are trusted verbatim: no normalization, no validation.
//! Whatever string was written (including an empty one) is what reads
//! return. This layer is a deliberate pass-through; anything that cares
//! about well-formed BCP-47 tags sits above it.
//!
//! # Examples
//!
//! ```
//! use locale_bridge::host::FixedLocale;
//! use locale_bridge::localization::Localization;
//! use locale_bridge::store::MemoryStore;
//!
//! let mut localization =
//!     Localization::new(MemoryStore::new(), Box::new(FixedLocale::new("en", "US")));
//!
//! assert_eq!(localization.current_language(), "en-US");
//! assert_eq!(localization.current_region(), "US");
//!
//! localization.set_app_language("fr-CA").expect("commit failed");
//! assert_eq!(localization.current_language(), "fr-CA");
//! ```

use crate::error::Result;
use crate::host::HostLocale;
use crate::store::PreferenceStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Store key holding the language override.
pub const LOCALE_OVERRIDE: &str = "locale_override";

/// Store key holding the region override.
pub const REGION_OVERRIDE: &str = "region_override";

/// Effective language/region captured at one point in time.
///
/// Plain data, safe to hand across a bridge boundary. A snapshot is never
/// refreshed: the copy taken at construction keeps its values even after a
/// later override write. Consumers wanting fresh values call the getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSnapshot {
    pub language: String,
    pub region: String,
}

/// Locale resolver over an injected preference store and host locale.
pub struct Localization<S: PreferenceStore> {
    store: S,
    host: Box<dyn HostLocale>,
    constants: LocaleSnapshot,
}

impl<S: PreferenceStore> Localization<S> {
    /// Builds the resolver and eagerly captures the constants snapshot.
    pub fn new(store: S, host: Box<dyn HostLocale>) -> Self {
        let constants = LocaleSnapshot {
            language: resolve_language(&store, host.as_ref()),
            region: resolve_region(&store, host.as_ref()),
        };
        Self {
            store,
            host,
            constants,
        }
    }

    /// The effective language: override verbatim, else `"<lang>-<country>"`
    /// from the host locale.
    pub fn current_language(&self) -> String {
        resolve_language(&self.store, self.host.as_ref())
    }

    /// The effective region: override verbatim, else the host country code.
    pub fn current_region(&self) -> String {
        resolve_region(&self.store, self.host.as_ref())
    }

    /// The raw language override, `None` when never set.
    pub fn user_locale(&self) -> Option<String> {
        self.store.get(LOCALE_OVERRIDE)
    }

    /// The raw region override, `None` when never set.
    pub fn user_region(&self) -> Option<String> {
        self.store.get(REGION_OVERRIDE)
    }

    /// Persists `code` as the language override and returns it.
    ///
    /// The code is stored as-is, with no validation (see the module docs).
    /// Errors only when the store commit fails; in that case the override
    /// is not confirmed and no success diagnostic is emitted.
    pub fn set_app_language(&mut self, code: &str) -> Result<String> {
        self.store.set(LOCALE_OVERRIDE, code);
        self.store.commit()?;
        debug!("committed {LOCALE_OVERRIDE} preference of {code}");
        Ok(code.to_string())
    }

    /// Persists `code` as the region override and returns it.
    pub fn set_app_region(&mut self, code: &str) -> Result<String> {
        self.store.set(REGION_OVERRIDE, code);
        self.store.commit()?;
        debug!("committed {REGION_OVERRIDE} preference of {code}");
        Ok(code.to_string())
    }

    /// The snapshot captured at construction time.
    pub fn constants(&self) -> &LocaleSnapshot {
        &self.constants
    }
}

fn resolve_language(store: &impl PreferenceStore, host: &dyn HostLocale) -> String {
    // user locale takes precedence
    if let Some(user_locale) = store.get(LOCALE_OVERRIDE) {
        return user_locale;
    }
    format!("{}-{}", host.language(), host.country())
}

fn resolve_region(store: &impl PreferenceStore, host: &dyn HostLocale) -> String {
    // user region takes precedence
    if let Some(user_region) = store.get(REGION_OVERRIDE) {
        return user_region;
    }
    host.country()
}
