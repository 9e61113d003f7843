//! Dynamically loaded VOICEVOX core library.
//!
//! The synthesis engine itself ships as a prebuilt shared library. This
//! module opens it with `libloading`, resolves the entry points the bridge
//! forwards to, and describes the C types that cross the boundary.
//!
//! # Entry Points
//!
//! | Symbol | Signature |
//! |---|---|
//! | `voicevox_get_supported_devices_json` | `() -> *const c_char` |
//! | `voicevox_get_version` | `() -> *const c_char` |
//! | `voicevox_get_metas_json` | `() -> *const c_char` |
//! | `voicevox_error_result_to_message` | `(VoicevoxResultCode) -> *const c_char` |
//! | `voicevox_make_default_initialize_options` | `() -> VoicevoxInitializeOptions` |
//! | `voicevox_initialize` | `(VoicevoxInitializeOptions) -> VoicevoxResultCode` |
//!
//! Every returned string is owned by the library and is copied before use.
//!
//! # Examples
//!
//! ```rust,no_run
//! use voicevox_core_bridge::native::{LoaderConfig, VoicevoxCore};
//! use voicevox_core_bridge::CoreApi;
//!
//! let core = VoicevoxCore::load(&LoaderConfig::default())?;
//! println!("core {}", core.version()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod library;
pub mod metas;
pub mod options;

pub use config::{LoaderConfig, LoaderConfigBuilder};
pub use library::{CoreError, VoicevoxCore};
pub use metas::{Speaker, Style, SupportedDevices};
pub use options::{AccelerationMode, InitializeOptions, RawInitializeOptions, ResultCode};
