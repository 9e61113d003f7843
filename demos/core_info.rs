use std::path::PathBuf;
use std::time::Instant;

use voicevox_core_bridge::{bridge, native::LoaderConfig};

/// Usage: `core_info [path/to/libvoicevox_core.so] [path/to/open_jtalk_dict]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => LoaderConfig::builder()
            .library_path(PathBuf::from(path))
            .build()?,
        None => LoaderConfig::from_env(),
    };

    let bridge = bridge::global();
    let load_start = Instant::now();
    bridge.load(&config)?;
    println!("Core library loaded in {:.2?}", load_start.elapsed());

    println!("Version: {}", bridge.version()?);
    println!("Supported devices: {:?}", bridge.supported_devices()?);

    for speaker in bridge.metas()? {
        let styles: Vec<String> = speaker
            .styles
            .iter()
            .map(|s| format!("{} ({})", s.name, s.id))
            .collect();
        println!("{}: {}", speaker.name, styles.join(", "));
    }

    if let Some(dict_dir) = args.next() {
        let init_start = Instant::now();
        let status = bridge.initialize(&dict_dir)?;
        println!(
            "initialize returned {} in {:.2?}: {}",
            status,
            init_start.elapsed(),
            bridge.error_result_to_message(status.raw())?
        );
    }

    Ok(())
}
