//! # voicevox-core-bridge
//!
//! A JNI bridge that exposes the prebuilt VOICEVOX core speech synthesis
//! library to the Android app.
//!
//! ## Features
//!
//! - **Dynamic loading**: the core library is opened at runtime with `libloading`
//! - **Guarded handle**: one process-wide handle; calls made before loading fail cleanly
//! - **JNI entry points**: `jni` feature (default) exports the `VoicevoxCore` natives
//!
//! ## Quick Start
//!
//! ```ignore
//! use voicevox_core_bridge::{bridge, native::LoaderConfig};
//!
//! let bridge = bridge::global();
//! bridge.load(&LoaderConfig::from_env())?;
//!
//! println!("core {}", bridge.version()?);
//! let status = bridge.initialize("/data/user/0/jp.hiroshiba.voicevox/files/openjtalk_dict")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bridge;
#[cfg(feature = "jni")]
pub mod java;
pub mod logging;
pub mod native;

use native::{CoreError, InitializeOptions, ResultCode};

/// Calls the bridge forwards to a loaded core library.
///
/// [`native::VoicevoxCore`] implements this over the real shared library.
/// The trait is the seam [`bridge::Bridge`] is generic over.
pub trait CoreApi {
    /// JSON object describing which devices the library supports.
    fn supported_devices_json(&self) -> Result<String, CoreError>;

    /// Version string of the library.
    fn version(&self) -> Result<String, CoreError>;

    /// JSON array of speakers and their styles.
    fn metas_json(&self) -> Result<String, CoreError>;

    /// Human readable message for a status code.
    fn error_result_to_message(&self, code: ResultCode) -> Result<String, CoreError>;

    /// The library's own default initialize options.
    fn default_initialize_options(&self) -> Result<InitializeOptions, CoreError>;

    /// Initialize the library. The returned code is passed through unchanged.
    fn initialize(&self, options: &InitializeOptions) -> Result<ResultCode, CoreError>;
}
