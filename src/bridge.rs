//! Process-wide handle to the core library and the guarded calls made through it.

use once_cell::sync::OnceCell;

use crate::native::metas::{self, Speaker, SupportedDevices};
use crate::native::{CoreError, LoaderConfig, ResultCode, VoicevoxCore};
use crate::CoreApi;

static CORE: Bridge<VoicevoxCore> = Bridge::new();

/// The bridge the JNI entry points share.
pub fn global() -> &'static Bridge<VoicevoxCore> {
    &CORE
}

/// Holds at most one loaded core and forwards calls to it.
///
/// The slot is filled once by a successful load and never replaced or
/// released afterwards. Every call made before that fails with
/// [`CoreError::NotLoaded`] without touching the library.
pub struct Bridge<C> {
    core: OnceCell<C>,
}

impl<C> Default for Bridge<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl Bridge<VoicevoxCore> {
    /// Open the core library described by `config`.
    pub fn load(&self, config: &LoaderConfig) -> Result<(), CoreError> {
        self.load_with(|| VoicevoxCore::load(config))
    }
}

impl<C> Bridge<C> {
    pub const fn new() -> Self {
        Self {
            core: OnceCell::new(),
        }
    }

    /// Fill the slot with whatever `loader` produces.
    ///
    /// An existing core is kept and `loader` is not called. A failed load
    /// leaves the slot empty.
    pub fn load_with<F>(&self, loader: F) -> Result<(), CoreError>
    where
        F: FnOnce() -> Result<C, CoreError>,
    {
        if self.core.get().is_some() {
            log::info!("Core library already loaded, keeping existing handle");
            return Ok(());
        }
        self.core.get_or_try_init(loader)?;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.core.get().is_some()
    }

    /// The loaded core, or [`CoreError::NotLoaded`].
    pub fn core(&self) -> Result<&C, CoreError> {
        self.core.get().ok_or(CoreError::NotLoaded)
    }
}

impl<C: CoreApi> Bridge<C> {
    pub fn supported_devices_json(&self) -> Result<String, CoreError> {
        self.core()?.supported_devices_json()
    }

    pub fn version(&self) -> Result<String, CoreError> {
        self.core()?.version()
    }

    pub fn metas_json(&self) -> Result<String, CoreError> {
        self.core()?.metas_json()
    }

    pub fn error_result_to_message(&self, code: i32) -> Result<String, CoreError> {
        self.core()?.error_result_to_message(ResultCode::from(code))
    }

    /// Initialize the core with its default options and `open_jtalk_dict_dir`.
    ///
    /// The status code is returned as the library reports it; a non-zero
    /// code is not an error at this level.
    pub fn initialize(&self, open_jtalk_dict_dir: &str) -> Result<ResultCode, CoreError> {
        let core = self.core()?;
        let options = core
            .default_initialize_options()?
            .with_open_jtalk_dict_dir(open_jtalk_dict_dir);

        let result = core.initialize(&options)?;
        log::info!("voicevoxInitialize: {result}");
        Ok(result)
    }

    pub fn supported_devices(&self) -> Result<SupportedDevices, CoreError> {
        Ok(metas::parse_supported_devices(&self.supported_devices_json()?)?)
    }

    pub fn metas(&self) -> Result<Vec<Speaker>, CoreError> {
        Ok(metas::parse_metas(&self.metas_json()?)?)
    }
}
