// SPDX-License-Identifier: MPL-2.0
//! Inbound call surface for a host bridge.
//!
//! [`Bridge`] wraps a [`Localization`] behind a single request/response
//! dispatch so every capability shares one `Result` convention. A boundary
//! adapter (outside this crate) translates to whatever calling style the
//! host environment wants - callbacks, promises, channels.
//!
//! The constants block the consuming layer reads at module load is exposed
//! via [`Bridge::constants`]; it is the eager snapshot from construction
//! and is intentionally never refreshed.

use crate::error::Result;
use crate::localization::{LocaleSnapshot, Localization};
use crate::store::PreferenceStore;
use tracing::debug;

/// A call arriving from the consuming layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    GetLanguage,
    GetRegion,
    SetAppLanguage(String),
    SetAppRegion(String),
}

/// The successful outcome of a [`Request`].
///
/// Setters answer with the code that was written, so `SetAppLanguage`
/// resolves to [`Response::Language`] and `SetAppRegion` to
/// [`Response::Region`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Language(String),
    Region(String),
}

/// Request dispatcher over a [`Localization`] resolver.
pub struct Bridge<S: PreferenceStore> {
    localization: Localization<S>,
}

impl<S: PreferenceStore> Bridge<S> {
    pub fn new(localization: Localization<S>) -> Self {
        Self { localization }
    }

    /// The `{language, region}` block exposed at module load.
    pub fn constants(&self) -> &LocaleSnapshot {
        self.localization.constants()
    }

    /// Handles one inbound request.
    ///
    /// Reads are infallible; only the setters can fail, when the underlying
    /// store commit does.
    pub fn handle(&mut self, request: Request) -> Result<Response> {
        match request {
            Request::GetLanguage => {
                let language = self.localization.current_language();
                debug!("the current language is {language}");
                Ok(Response::Language(language))
            }
            Request::GetRegion => {
                let region = self.localization.current_region();
                debug!("the current region is {region}");
                Ok(Response::Region(region))
            }
            Request::SetAppLanguage(code) => {
                let written = self.localization.set_app_language(&code)?;
                Ok(Response::Language(written))
            }
            Request::SetAppRegion(code) => {
                let written = self.localization.set_app_region(&code)?;
                Ok(Response::Region(written))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FixedLocale;
    use crate::store::MemoryStore;

    fn bridge() -> Bridge<MemoryStore> {
        Bridge::new(Localization::new(
            MemoryStore::new(),
            Box::new(FixedLocale::new("en", "US")),
        ))
    }

    #[test]
    fn get_language_answers_effective_language() {
        let mut bridge = bridge();
        let response = bridge.handle(Request::GetLanguage).expect("read failed");
        assert_eq!(response, Response::Language("en-US".to_string()));
    }

    #[test]
    fn get_region_answers_effective_region() {
        let mut bridge = bridge();
        let response = bridge.handle(Request::GetRegion).expect("read failed");
        assert_eq!(response, Response::Region("US".to_string()));
    }

    #[test]
    fn set_app_language_resolves_with_written_code() {
        let mut bridge = bridge();
        let response = bridge
            .handle(Request::SetAppLanguage("fr-CA".to_string()))
            .expect("set failed");
        assert_eq!(response, Response::Language("fr-CA".to_string()));

        let response = bridge.handle(Request::GetLanguage).expect("read failed");
        assert_eq!(response, Response::Language("fr-CA".to_string()));
    }

    #[test]
    fn set_app_region_does_not_change_language() {
        let mut bridge = bridge();
        bridge
            .handle(Request::SetAppRegion("GB".to_string()))
            .expect("set failed");

        assert_eq!(
            bridge.handle(Request::GetRegion).expect("read failed"),
            Response::Region("GB".to_string())
        );
        assert_eq!(
            bridge.handle(Request::GetLanguage).expect("read failed"),
            Response::Language("en-US".to_string())
        );
    }

    #[test]
    fn constants_block_is_stable_across_writes() {
        let mut bridge = bridge();
        let before = bridge.constants().clone();

        bridge
            .handle(Request::SetAppLanguage("fr-CA".to_string()))
            .expect("set failed");

        assert_eq!(bridge.constants(), &before);
    }

    #[test]
    fn commit_failure_propagates_through_dispatch() {
        let mut bridge = Bridge::new(Localization::new(
            MemoryStore::failing(),
            Box::new(FixedLocale::new("en", "US")),
        ));
        let result = bridge.handle(Request::SetAppLanguage("fr-CA".to_string()));
        assert!(result.is_err());
    }
}
