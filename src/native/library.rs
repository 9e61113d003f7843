use std::ffi::{c_char, CStr};

use libloading::Library;

use super::config::LoaderConfig;
use super::options::{InitializeOptions, RawInitializeOptions, ResultCode};
use crate::CoreApi;

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("loadLibrary failed: {0}")]
    Load(#[from] libloading::Error),
    #[error("voicevoxCore is not loaded")]
    NotLoaded,
    #[error("{0} returned a null string")]
    NullString(&'static str),
    #[error("{symbol} returned invalid UTF-8: {source}")]
    Utf8 {
        symbol: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("String contains an interior nul byte: {0}")]
    Nul(#[from] std::ffi::NulError),
    #[error("Invalid JSON from core library: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "jni")]
    #[error("JNI error: {0}")]
    Jni(#[from] jni::errors::Error),
}

type StringGetterFn = unsafe extern "C" fn() -> *const c_char;
type ErrorResultToMessageFn = unsafe extern "C" fn(ResultCode) -> *const c_char;
type MakeDefaultInitializeOptionsFn = unsafe extern "C" fn() -> RawInitializeOptions;
type InitializeFn = unsafe extern "C" fn(RawInitializeOptions) -> ResultCode;

const GET_SUPPORTED_DEVICES_JSON: &str = "voicevox_get_supported_devices_json";
const GET_VERSION: &str = "voicevox_get_version";
const GET_METAS_JSON: &str = "voicevox_get_metas_json";
const ERROR_RESULT_TO_MESSAGE: &str = "voicevox_error_result_to_message";
const MAKE_DEFAULT_INITIALIZE_OPTIONS: &str = "voicevox_make_default_initialize_options";
const INITIALIZE: &str = "voicevox_initialize";

/// The dynamically loaded core library and its resolved entry points.
///
/// The function pointers are only valid while `_library` is alive.
pub struct VoicevoxCore {
    get_supported_devices_json: StringGetterFn,
    get_version: StringGetterFn,
    get_metas_json: StringGetterFn,
    error_result_to_message: ErrorResultToMessageFn,
    make_default_initialize_options: MakeDefaultInitializeOptionsFn,
    initialize: InitializeFn,
    _library: Library,
}

impl VoicevoxCore {
    /// Open the shared library named by `config` and resolve every entry point.
    pub fn load(config: &LoaderConfig) -> Result<Self, CoreError> {
        log::info!("Loading core library from {}", config.library_path.display());

        // SAFETY: the core library's load-time initializers need no setup from us.
        let library = unsafe { Library::new(&config.library_path)? };

        // SAFETY: each type alias matches the C declaration of its symbol.
        let core = unsafe {
            Self {
                get_supported_devices_json: resolve(&library, GET_SUPPORTED_DEVICES_JSON)?,
                get_version: resolve(&library, GET_VERSION)?,
                get_metas_json: resolve(&library, GET_METAS_JSON)?,
                error_result_to_message: resolve(&library, ERROR_RESULT_TO_MESSAGE)?,
                make_default_initialize_options: resolve(
                    &library,
                    MAKE_DEFAULT_INITIALIZE_OPTIONS,
                )?,
                initialize: resolve(&library, INITIALIZE)?,
                _library: library,
            }
        };

        Ok(core)
    }
}

/// Look up `name` and copy the function pointer out of the borrowed symbol.
unsafe fn resolve<T: Copy>(library: &Library, name: &str) -> Result<T, libloading::Error> {
    log::debug!("Resolving {name}");
    let symbol = library.get::<T>(name.as_bytes())?;
    Ok(*symbol)
}

/// Copy a library-owned C string into an owned `String`.
///
/// The core library keeps ownership of the buffer; it is never freed here.
unsafe fn copy_c_str(ptr: *const c_char, symbol: &'static str) -> Result<String, CoreError> {
    if ptr.is_null() {
        return Err(CoreError::NullString(symbol));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(str::to_owned)
        .map_err(|source| CoreError::Utf8 { symbol, source })
}

impl CoreApi for VoicevoxCore {
    fn supported_devices_json(&self) -> Result<String, CoreError> {
        unsafe { copy_c_str((self.get_supported_devices_json)(), GET_SUPPORTED_DEVICES_JSON) }
    }

    fn version(&self) -> Result<String, CoreError> {
        unsafe { copy_c_str((self.get_version)(), GET_VERSION) }
    }

    fn metas_json(&self) -> Result<String, CoreError> {
        unsafe { copy_c_str((self.get_metas_json)(), GET_METAS_JSON) }
    }

    fn error_result_to_message(&self, code: ResultCode) -> Result<String, CoreError> {
        unsafe { copy_c_str((self.error_result_to_message)(code), ERROR_RESULT_TO_MESSAGE) }
    }

    fn default_initialize_options(&self) -> Result<InitializeOptions, CoreError> {
        // SAFETY: the library returns either a null or a static dictionary path.
        unsafe { InitializeOptions::from_raw((self.make_default_initialize_options)()) }
            .map_err(|source| CoreError::Utf8 {
                symbol: MAKE_DEFAULT_INITIALIZE_OPTIONS,
                source,
            })
    }

    fn initialize(&self, options: &InitializeOptions) -> Result<ResultCode, CoreError> {
        options.with_raw(|raw| unsafe { (self.initialize)(raw) })
    }
}
