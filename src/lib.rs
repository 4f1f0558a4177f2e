// SPDX-License-Identifier: MPL-2.0
//! `locale-bridge` resolves the effective language and region for an
//! application: a persisted user override wins, the host locale is the
//! fallback. It also persists those overrides through a small injected
//! key-value store, so the whole thing is testable without touching the
//! real platform.
//!
//! # Examples
//!
//! ```no_run
//! use locale_bridge::bridge::{Bridge, Request, Response};
//! use locale_bridge::host::SystemLocale;
//! use locale_bridge::localization::Localization;
//! use locale_bridge::store::FileStore;
//!
//! let store = FileStore::open_default().expect("no config directory");
//! let mut bridge = Bridge::new(Localization::new(store, Box::new(SystemLocale::new())));
//!
//! // Constants block for the consuming layer's module load.
//! let constants = bridge.constants().clone();
//!
//! // Unified request/response surface.
//! let language = bridge.handle(Request::GetLanguage).expect("read failed");
//! bridge
//!     .handle(Request::SetAppRegion("GB".to_string()))
//!     .expect("commit failed");
//! ```

#![doc(html_root_url = "https://docs.rs/locale-bridge/0.1.0")]

pub mod bridge;
pub mod error;
pub mod host;
pub mod localization;
pub mod paths;
pub mod store;

pub use bridge::{Bridge, Request, Response};
pub use error::{Error, Result};
pub use host::{FixedLocale, HostLocale, SystemLocale};
pub use localization::{LocaleSnapshot, Localization, LOCALE_OVERRIDE, REGION_OVERRIDE};
pub use store::{FileStore, MemoryStore, PreferenceStore};
