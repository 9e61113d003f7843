//! JNI entry points for `jp.hiroshiba.voicevox.VoicevoxCore`.
//!
//! Every native method goes through [`bridge::global`]. Errors become a
//! `java.lang.RuntimeException` thrown at the call site; the method then
//! returns `null` (or `-1` for `voicevoxInitialize`).

use std::ptr;

use jni::objects::{JObject, JString};
use jni::sys::{jint, jstring};
use jni::JNIEnv;

use crate::bridge::{self, Bridge};
use crate::logging;
use crate::native::{CoreError, LoaderConfig, ResultCode};
use crate::CoreApi;

const RUNTIME_EXCEPTION: &str = "java/lang/RuntimeException";

/// Returned by `voicevoxInitialize` when the call never reached the library.
const INITIALIZE_FAILED: jint = -1;

/// False when a Java exception is already pending; that one takes precedence.
fn should_throw(err: &CoreError) -> bool {
    !matches!(err, CoreError::Jni(jni::errors::Error::JavaException))
}

fn throw_runtime_exception(env: &mut JNIEnv, err: &CoreError) {
    // Guarded calls can arrive before loadLibrary installed the logger.
    logging::init();
    log::error!("{err}");

    if !should_throw(err) {
        return;
    }

    if let Err(e) = env.throw_new(RUNTIME_EXCEPTION, err.to_string()) {
        log::error!("Failed to throw {RUNTIME_EXCEPTION}: {e}");
    }
}

/// Body of `voicevoxInitialize`.
///
/// The handle is checked before `read_path` runs, so an unloaded bridge never
/// touches the Java string.
fn initialize_entry<C: CoreApi>(
    bridge: &Bridge<C>,
    read_path: impl FnOnce() -> Result<String, CoreError>,
) -> Result<ResultCode, CoreError> {
    bridge.core()?;
    let dict_path = read_path()?;
    bridge.initialize(&dict_path)
}

/// Hand a bridge result back to Java as a new string, or throw.
fn to_java_string(env: &mut JNIEnv, result: Result<String, CoreError>) -> jstring {
    let converted = match result {
        Ok(value) => env.new_string(value).map_err(CoreError::from),
        Err(err) => Err(err),
    };

    match converted {
        Ok(value) => value.into_raw(),
        Err(err) => {
            throw_runtime_exception(env, &err);
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "system" fn Java_jp_hiroshiba_voicevox_VoicevoxCore_loadLibrary(
    mut env: JNIEnv,
    _this: JObject,
) {
    logging::init();
    log::info!("loadLibrary");

    match bridge::global().load(&LoaderConfig::from_env()) {
        Ok(()) => log::info!("loadLibrary success"),
        Err(err) => throw_runtime_exception(&mut env, &err),
    }
}

#[no_mangle]
pub extern "system" fn Java_jp_hiroshiba_voicevox_VoicevoxCore_voicevoxGetSupportedDevicesJson(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    let result = bridge::global().supported_devices_json();
    to_java_string(&mut env, result)
}

#[no_mangle]
pub extern "system" fn Java_jp_hiroshiba_voicevox_VoicevoxCore_voicevoxGetVersion(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    let result = bridge::global().version();
    to_java_string(&mut env, result)
}

#[no_mangle]
pub extern "system" fn Java_jp_hiroshiba_voicevox_VoicevoxCore_voicevoxGetMetasJson(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    let result = bridge::global().metas_json();
    to_java_string(&mut env, result)
}

#[no_mangle]
pub extern "system" fn Java_jp_hiroshiba_voicevox_VoicevoxCore_voicevoxErrorResultToMessage(
    mut env: JNIEnv,
    _this: JObject,
    status_code: jint,
) -> jstring {
    let result = bridge::global().error_result_to_message(status_code);
    to_java_string(&mut env, result)
}

#[no_mangle]
pub extern "system" fn Java_jp_hiroshiba_voicevox_VoicevoxCore_voicevoxInitialize(
    mut env: JNIEnv,
    _this: JObject,
    open_jtalk_dict_path: JString,
) -> jint {
    let result = initialize_entry(bridge::global(), || {
        Ok(env.get_string(&open_jtalk_dict_path)?.into())
    });

    match result {
        Ok(code) => code.raw(),
        Err(err) => {
            throw_runtime_exception(&mut env, &err);
            INITIALIZE_FAILED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::mock::{calls, loaded, Call, MockCore};
    use std::cell::Cell;

    #[test]
    fn initialize_checks_handle_before_reading_path() {
        let bridge: Bridge<MockCore> = Bridge::new();
        let reads = Cell::new(0);

        let err = initialize_entry(&bridge, || {
            reads.set(reads.get() + 1);
            Ok("/dict".to_string())
        })
        .unwrap_err();

        assert!(matches!(err, CoreError::NotLoaded));
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn initialize_forwards_path_once_loaded() {
        let bridge = loaded(MockCore::new());

        let code = initialize_entry(&bridge, || Ok("/data/openjtalk_dict".to_string())).unwrap();

        assert_eq!(code, ResultCode::OK);
        match calls(&bridge).last() {
            Some(Call::Initialize(options)) => assert_eq!(
                options.open_jtalk_dict_dir.as_deref(),
                Some("/data/openjtalk_dict")
            ),
            other => panic!("unexpected last call: {other:?}"),
        }
    }

    #[test]
    fn path_read_failure_skips_library() {
        let bridge = loaded(MockCore::new());

        let err = initialize_entry(&bridge, || Err(jni::errors::Error::NullPtr("string").into()))
            .unwrap_err();

        assert!(matches!(err, CoreError::Jni(_)));
        assert!(calls(&bridge).is_empty());
    }

    #[test]
    fn pending_java_exception_is_not_rethrown() {
        assert!(!should_throw(&CoreError::Jni(jni::errors::Error::JavaException)));
        assert!(should_throw(&CoreError::NotLoaded));
        assert!(should_throw(&CoreError::Jni(jni::errors::Error::NullPtr("string"))));
    }
}
