//! 설정 진단 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::SettingsInspector;
use crate::domain::settings::Settings;
use crate::infrastructure::settings;

/// JSON 진단 출력 어댑터.
pub struct JsonSettingsInspector;

impl SettingsInspector for JsonSettingsInspector {
    fn inspect_pretty_json(&self, settings: &Settings, settings_file: &str) -> Result<String> {
        settings::inspect_pretty_json(settings, settings_file)
    }
}
