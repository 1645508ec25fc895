//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::error::StorageError;
use crate::domain::settings::Settings;

/// 설정 파일 위치를 결정하는 포트.
pub trait SettingsPathResolver: Send + Sync {
    fn settings_file_path(&self) -> Result<PathBuf, StorageError>;

    /// 설정 파일이 놓이는 폴더. 파일 이름만 주어지면 현재 폴더(`.`)다.
    fn settings_folder_path(&self) -> Result<PathBuf, StorageError> {
        let file = self.settings_file_path()?;
        match file.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Ok(PathBuf::from(".")),
            Some(parent) => Ok(parent.to_path_buf()),
            None => Err(StorageError::PathResolution(format!(
                "settings file {} has no parent folder",
                file.display()
            ))),
        }
    }
}

/// 설정 집합의 저장/캐시를 담당하는 저장소 포트.
/// 유효성 검사는 수행하지 않는다(서비스 책임).
pub trait SettingsRepository: Send + Sync {
    /// 파일이 없을 때만 기본 설정을 기록한다.
    fn init_defaults_if_absent(&self) -> Result<(), StorageError>;
    /// 캐시가 있으면 캐시를, 없으면 파일을 읽어 반환한다.
    fn get_settings(&self) -> Result<Settings, StorageError>;
    /// 전체 문서를 덮어쓰고 캐시를 교체한다.
    fn save_settings(&self, settings: Settings) -> Result<Settings, StorageError>;
    /// 다음 조회 시 파일을 다시 읽도록 캐시를 비운다.
    fn invalidate_cache(&self);
}

/// 적용 설정 진단 출력 포트.
pub trait SettingsInspector: Send + Sync {
    fn inspect_pretty_json(&self, settings: &Settings, settings_file: &str) -> Result<String>;
}
