use std::ffi::{c_char, CStr, CString};
use std::fmt;
use std::ptr;
use std::str::Utf8Error;

use super::library::CoreError;

/// Status code returned by the core library.
///
/// Kept as a transparent `i32` so that any value coming from Java can be
/// handed to the library unchanged, including codes this crate has no name for.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultCode(pub i32);

impl ResultCode {
    pub const OK: Self = Self(0);
    pub const NOT_LOADED_OPENJTALK_DICT_ERROR: Self = Self(1);
    pub const LOAD_MODEL_ERROR: Self = Self(2);
    pub const GET_SUPPORTED_DEVICES_ERROR: Self = Self(3);
    pub const GPU_SUPPORT_ERROR: Self = Self(4);
    pub const LOAD_METAS_ERROR: Self = Self(5);
    pub const UNINITIALIZED_STATUS_ERROR: Self = Self(6);
    pub const INVALID_SPEAKER_ID_ERROR: Self = Self(7);
    pub const INVALID_MODEL_INDEX_ERROR: Self = Self(8);
    pub const INFERENCE_ERROR: Self = Self(9);
    pub const EXTRACT_FULL_CONTEXT_LABEL_ERROR: Self = Self(10);
    pub const INVALID_UTF8_INPUT_ERROR: Self = Self(11);
    pub const PARSE_KANA_ERROR: Self = Self(12);
    pub const INVALID_AUDIO_QUERY_ERROR: Self = Self(13);

    pub fn raw(self) -> i32 {
        self.0
    }

    pub fn is_ok(self) -> bool {
        self == Self::OK
    }
}

impl From<i32> for ResultCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hardware acceleration mode, as understood by the core library.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AccelerationMode(pub i32);

impl AccelerationMode {
    pub const AUTO: Self = Self(0);
    pub const CPU: Self = Self(1);
    pub const GPU: Self = Self(2);
}

/// C layout of `VoicevoxInitializeOptions`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawInitializeOptions {
    pub acceleration_mode: AccelerationMode,
    /// `0` lets the library pick.
    pub cpu_num_threads: u16,
    pub load_all_models: bool,
    /// Null when no dictionary is configured.
    pub open_jtalk_dict_dir: *const c_char,
}

/// Owned form of the initialize options.
///
/// Obtained from the library defaults, adjusted in Rust, and lowered back
/// into [`RawInitializeOptions`] only for the duration of the native call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitializeOptions {
    pub acceleration_mode: AccelerationMode,
    pub cpu_num_threads: u16,
    pub load_all_models: bool,
    pub open_jtalk_dict_dir: Option<String>,
}

impl InitializeOptions {
    /// Copy options returned by the library.
    ///
    /// # Safety
    ///
    /// `raw.open_jtalk_dict_dir` must be null or point to a nul-terminated string.
    pub unsafe fn from_raw(raw: RawInitializeOptions) -> Result<Self, Utf8Error> {
        let open_jtalk_dict_dir = if raw.open_jtalk_dict_dir.is_null() {
            None
        } else {
            Some(CStr::from_ptr(raw.open_jtalk_dict_dir).to_str()?.to_owned())
        };

        Ok(Self {
            acceleration_mode: raw.acceleration_mode,
            cpu_num_threads: raw.cpu_num_threads,
            load_all_models: raw.load_all_models,
            open_jtalk_dict_dir,
        })
    }

    /// Same options with the dictionary directory replaced.
    pub fn with_open_jtalk_dict_dir(self, dict_dir: impl Into<String>) -> Self {
        Self {
            open_jtalk_dict_dir: Some(dict_dir.into()),
            ..self
        }
    }

    /// Lower into C layout and run `f` with it.
    ///
    /// The dictionary path buffer only lives until `f` returns.
    pub fn with_raw<T>(&self, f: impl FnOnce(RawInitializeOptions) -> T) -> Result<T, CoreError> {
        let dict_dir = self
            .open_jtalk_dict_dir
            .as_deref()
            .map(CString::new)
            .transpose()?;

        let raw = RawInitializeOptions {
            acceleration_mode: self.acceleration_mode,
            cpu_num_threads: self.cpu_num_threads,
            load_all_models: self.load_all_models,
            open_jtalk_dict_dir: dict_dir.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
        };

        Ok(f(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_code_keeps_unknown_values() {
        let code = ResultCode::from(-42);
        assert_eq!(code.raw(), -42);
        assert!(!code.is_ok());
        assert!(ResultCode::from(0).is_ok());
        assert_eq!(code.to_string(), "-42");
    }

    #[test]
    fn from_raw_treats_null_dict_dir_as_unset() {
        let raw = RawInitializeOptions {
            acceleration_mode: AccelerationMode::CPU,
            cpu_num_threads: 4,
            load_all_models: true,
            open_jtalk_dict_dir: ptr::null(),
        };

        let options = unsafe { InitializeOptions::from_raw(raw) }.unwrap();
        assert_eq!(
            options,
            InitializeOptions {
                acceleration_mode: AccelerationMode::CPU,
                cpu_num_threads: 4,
                load_all_models: true,
                open_jtalk_dict_dir: None,
            }
        );
    }

    #[test]
    fn acceleration_mode_defaults_to_auto() {
        assert_eq!(AccelerationMode::default(), AccelerationMode::AUTO);
    }

    #[test]
    fn from_raw_rejects_invalid_utf8_dict_dir() {
        let dict_dir = CString::new(b"/data/\xfe".to_vec()).unwrap();
        let raw = RawInitializeOptions {
            acceleration_mode: AccelerationMode::AUTO,
            cpu_num_threads: 0,
            load_all_models: false,
            open_jtalk_dict_dir: dict_dir.as_ptr(),
        };

        assert!(unsafe { InitializeOptions::from_raw(raw) }.is_err());
    }

    #[test]
    fn with_raw_passes_dict_dir_as_c_string() {
        let options = InitializeOptions::default().with_open_jtalk_dict_dir("/data/dict");

        let seen = options
            .with_raw(|raw| {
                assert_eq!(raw.acceleration_mode, AccelerationMode::AUTO);
                assert_eq!(raw.cpu_num_threads, 0);
                assert!(!raw.load_all_models);
                unsafe { CStr::from_ptr(raw.open_jtalk_dict_dir) }
                    .to_str()
                    .map(str::to_owned)
            })
            .unwrap()
            .unwrap();

        assert_eq!(seen, "/data/dict");
    }

    #[test]
    fn with_raw_uses_null_without_dict_dir() {
        let is_null = InitializeOptions::default()
            .with_raw(|raw| raw.open_jtalk_dict_dir.is_null())
            .unwrap();
        assert!(is_null);
    }

    #[test]
    fn with_raw_rejects_interior_nul() {
        let options = InitializeOptions::default().with_open_jtalk_dict_dir("/data\0/dict");
        let err = options.with_raw(|_| ()).unwrap_err();
        assert!(matches!(err, CoreError::Nul(_)));
    }
}
