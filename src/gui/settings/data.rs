use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub zoom: f32,
    /// Folder the file picker opens in.
    pub last_directory: Option<PathBuf>,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true, zoom: 1.0, last_directory: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: SettingsData = serde_json::from_str(r#"{"dark_mode": false}"#).unwrap();
        assert_eq!(
            settings,
            SettingsData { dark_mode: false, zoom: 1.0, last_directory: None }
        );
    }
}
