//! 설정 CRUD와 필드 간 비즈니스 규칙을 담당하는 서비스.
//!
//! 모든 변경은 동일한 순서를 따른다:
//! 현재 설정 조회 -> 새 설정 값 계산 -> 유효성 검사 -> 저장.
//! 검사에 실패하면 캐시와 파일 모두 이전 상태로 남는다.

mod languages;
mod providers;
mod tuning;

use tracing::{debug, info};

use crate::application::error::SettingsError;
use crate::application::ports::{SettingsPathResolver, SettingsRepository};
use crate::domain::settings::{AppSettingsMetadata, AuthKind, ProviderKind, Settings};
use crate::domain::validation::validate_settings;

pub type SettingsResult<T> = Result<T, SettingsError>;

/// 저장소/경로 포트를 빌려 쓰는 설정 서비스.
pub struct SettingsService<'a> {
    pub repo: &'a dyn SettingsRepository,
    pub paths: &'a dyn SettingsPathResolver,
}

impl<'a> SettingsService<'a> {
    pub fn new(repo: &'a dyn SettingsRepository, paths: &'a dyn SettingsPathResolver) -> Self {
        Self { repo, paths }
    }

    pub fn get_settings(&self) -> SettingsResult<Settings> {
        Ok(self.repo.get_settings()?)
    }

    /// 캐시를 버리고 파일에서 다시 읽는다.
    pub fn reload(&self) -> SettingsResult<Settings> {
        self.repo.invalidate_cache();
        self.get_settings()
    }

    /// 전체 설정을 기본값으로 덮어쓴다(검사 생략: 기본값은 항상 유효).
    pub fn reset_to_default(&self) -> SettingsResult<Settings> {
        info!("resetting settings to defaults");
        Ok(self.repo.save_settings(Settings::default())?)
    }

    /// UI 선택지용 메타데이터를 계산한다.
    pub fn get_metadata(&self) -> SettingsResult<AppSettingsMetadata> {
        let file = self.paths.settings_file_path()?;
        let folder = self.paths.settings_folder_path()?;
        Ok(AppSettingsMetadata {
            auth_kinds: AuthKind::ALL.to_vec(),
            provider_kinds: ProviderKind::ALL.to_vec(),
            settings_folder: folder.display().to_string(),
            settings_file: file.display().to_string(),
        })
    }

    /// 새 설정 값을 검사한 뒤 저장한다.
    fn commit(&self, next: Settings) -> SettingsResult<Settings> {
        validate_settings(&next)?;
        let saved = self.repo.save_settings(next)?;
        debug!("settings committed");
        Ok(saved)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use crate::application::error::StorageError;
    use crate::application::ports::{SettingsPathResolver, SettingsRepository};
    use crate::domain::settings::Settings;

    /// 파일 대신 메모리에 저장하는 테스트용 저장소.
    #[derive(Default)]
    pub struct MemoryRepository {
        pub stored: Mutex<Option<Settings>>,
        pub saves: Mutex<usize>,
    }

    impl MemoryRepository {
        pub fn save_count(&self) -> usize {
            *self.saves.lock().unwrap()
        }
    }

    impl SettingsRepository for MemoryRepository {
        fn init_defaults_if_absent(&self) -> Result<(), StorageError> {
            let mut stored = self.stored.lock().unwrap();
            if stored.is_none() {
                *stored = Some(Settings::default());
            }
            Ok(())
        }

        fn get_settings(&self) -> Result<Settings, StorageError> {
            self.init_defaults_if_absent()?;
            Ok(self.stored.lock().unwrap().clone().unwrap_or_default())
        }

        fn save_settings(&self, settings: Settings) -> Result<Settings, StorageError> {
            *self.stored.lock().unwrap() = Some(settings.clone());
            *self.saves.lock().unwrap() += 1;
            Ok(settings)
        }

        fn invalidate_cache(&self) {}
    }

    pub struct FixedPaths(pub PathBuf);

    impl SettingsPathResolver for FixedPaths {
        fn settings_file_path(&self) -> Result<PathBuf, StorageError> {
            Ok(self.0.clone())
        }
    }

    pub fn paths() -> FixedPaths {
        FixedPaths(PathBuf::from("/tmp/textpilot/settings.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{MemoryRepository, paths};
    use super::*;

    #[test]
    fn metadata_lists_all_kinds_and_paths() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        let meta = service.get_metadata().unwrap();
        assert_eq!(meta.auth_kinds.len(), 3);
        assert_eq!(meta.provider_kinds.len(), 2);
        assert_eq!(meta.settings_file, "/tmp/textpilot/settings.json");
        assert_eq!(meta.settings_folder, "/tmp/textpilot");
    }

    #[test]
    fn reset_restores_defaults_after_mutation() {
        let repo = MemoryRepository::default();
        let paths = paths();
        let service = SettingsService::new(&repo, &paths);

        service.add_language("Esperanto").unwrap();
        service.delete_provider("openrouter").unwrap();
        assert_ne!(service.get_settings().unwrap(), Settings::default());

        let reset = service.reset_to_default().unwrap();
        assert_eq!(reset, Settings::default());
        assert_eq!(service.get_settings().unwrap(), Settings::default());
    }
}
