//! Logger setup for the bridge.
//!
//! On Android records go to logcat under [`LOG_TAG`]; elsewhere they go to
//! stderr through `env_logger` (`RUST_LOG` applies).

pub const LOG_TAG: &str = "voicevox_core_wrapper";

/// Install the logger. Calling this more than once is harmless.
pub fn init() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(LOG_TAG),
    );

    #[cfg(not(target_os = "android"))]
    {
        let env = env_logger::Env::default().default_filter_or("info");
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
