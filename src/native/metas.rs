use serde::Deserialize;

/// Devices the core library was built to run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SupportedDevices {
    pub cpu: bool,
    pub cuda: bool,
    pub dml: bool,
}

/// One speaker from the metas document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub speaker_uuid: String,
    pub styles: Vec<Style>,
    #[serde(default)]
    pub version: String,
}

/// A speaking style. `id` is what the library calls the speaker id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Style {
    pub name: String,
    pub id: u32,
}

pub fn parse_supported_devices(json: &str) -> Result<SupportedDevices, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn parse_metas(json: &str) -> Result<Vec<Speaker>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_devices() {
        let devices = parse_supported_devices(r#"{"cpu":true,"cuda":false,"dml":false}"#).unwrap();
        assert_eq!(
            devices,
            SupportedDevices {
                cpu: true,
                cuda: false,
                dml: false,
            }
        );
    }

    #[test]
    fn parses_metas() {
        let json = r#"[
            {
                "name": "四国めたん",
                "styles": [
                    {"name": "ノーマル", "id": 2},
                    {"name": "あまあま", "id": 0}
                ],
                "speaker_uuid": "7ffcb7ce-00ec-4bdc-82cd-45a8889e43ff",
                "version": "0.14.4"
            }
        ]"#;

        let speakers = parse_metas(json).unwrap();
        assert_eq!(speakers.len(), 1);
        assert_eq!(speakers[0].name, "四国めたん");
        assert_eq!(speakers[0].styles[1], Style { name: "あまあま".into(), id: 0 });
        assert_eq!(speakers[0].version, "0.14.4");
    }

    #[test]
    fn rejects_non_array_metas() {
        assert!(parse_metas(r#"{"name":"x"}"#).is_err());
    }
}
