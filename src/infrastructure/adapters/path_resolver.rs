//! 설정 파일 경로 포트 구현 어댑터.

use std::path::PathBuf;

use crate::application::error::StorageError;
use crate::application::ports::SettingsPathResolver;
use crate::infrastructure::settings;

/// OS 사용자 설정 폴더(또는 `TEXTPILOT_SETTINGS`)를 사용하는 어댑터.
pub struct ConfigDirPathResolver;

impl SettingsPathResolver for ConfigDirPathResolver {
    fn settings_file_path(&self) -> Result<PathBuf, StorageError> {
        settings::default_settings_path()
    }
}

/// 고정 경로 어댑터(CLI `--settings` 지정 시).
pub struct FixedPathResolver {
    path: PathBuf,
}

impl FixedPathResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsPathResolver for FixedPathResolver {
    fn settings_file_path(&self) -> Result<PathBuf, StorageError> {
        Ok(self.path.clone())
    }
}
