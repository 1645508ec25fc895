//! 사용자 설정(JSON) 파일 입출력 모듈.
//! 경로 결정, 기본값 부트스트랩, 토큰 해석, 실행 진단용 정보를 제공한다.

mod inspection;
mod loader;
mod resolve;

use anyhow::Result;

use crate::domain::settings::Settings;

pub use inspection::{ProviderInspection, SettingsInspection};
pub use loader::{
    SETTINGS_DIR_NAME, SETTINGS_FILE_NAME, SETTINGS_PATH_ENV, bootstrap_defaults,
    default_settings_path, read_settings, write_settings,
};
pub use resolve::{TokenResolution, auth_header, resolve_auth_token};

/// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
pub fn inspect_pretty_json(settings: &Settings, settings_file: &str) -> Result<String> {
    let inspection = SettingsInspection::from_settings(settings, settings_file);
    Ok(serde_json::to_string_pretty(&inspection)?)
}
