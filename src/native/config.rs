use std::path::PathBuf;

use derive_builder::Builder;

/// File name the Android build packages the core library under.
pub const DEFAULT_LIBRARY_NAME: &str = "libvoicevox_core.so";

/// Environment variable that overrides [`DEFAULT_LIBRARY_NAME`].
pub const LIBRARY_PATH_ENV: &str = "VOICEVOX_CORE_LIBRARY";

/// Where to find the core library.
///
/// A bare file name is resolved by the platform loader's search path, which
/// on Android includes the app's native library directory.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), default)]
pub struct LoaderConfig {
    pub library_path: PathBuf,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY_NAME),
        }
    }
}

impl LoaderConfig {
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::default()
    }

    pub fn with_library_path(library_path: impl Into<PathBuf>) -> Self {
        Self {
            library_path: library_path.into(),
        }
    }

    /// Default config, unless `VOICEVOX_CORE_LIBRARY` names another library.
    pub fn from_env() -> Self {
        match std::env::var_os(LIBRARY_PATH_ENV) {
            Some(path) if !path.is_empty() => {
                log::debug!("Using {LIBRARY_PATH_ENV}={}", path.to_string_lossy());
                Self::with_library_path(path)
            }
            _ => Self::default(),
        }
    }
}
