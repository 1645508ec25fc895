//! 설정 저장소 포트 구현 어댑터.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::application::error::StorageError;
use crate::application::ports::{SettingsPathResolver, SettingsRepository};
use crate::domain::settings::Settings;
use crate::infrastructure::settings;

/// JSON 파일 기반 설정 저장소 어댑터.
/// 마지막으로 읽거나 저장한 설정을 인스턴스 단위로 캐시한다.
pub struct JsonSettingsRepository {
    paths: Arc<dyn SettingsPathResolver>,
    cache: Mutex<Option<Settings>>,
}

impl JsonSettingsRepository {
    pub fn new(paths: Arc<dyn SettingsPathResolver>) -> Self {
        Self {
            paths,
            cache: Mutex::new(None),
        }
    }

    fn cache(&self) -> MutexGuard<'_, Option<Settings>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SettingsRepository for JsonSettingsRepository {
    fn init_defaults_if_absent(&self) -> Result<(), StorageError> {
        let path = self.paths.settings_file_path()?;
        settings::bootstrap_defaults(&path)?;
        Ok(())
    }

    fn get_settings(&self) -> Result<Settings, StorageError> {
        if let Some(cached) = self.cache().as_ref() {
            debug!("settings served from cache");
            return Ok(cached.clone());
        }

        self.init_defaults_if_absent()?;
        let path = self.paths.settings_file_path()?;
        let loaded = settings::read_settings(&path)?;
        *self.cache() = Some(loaded.clone());
        Ok(loaded)
    }

    fn save_settings(&self, next: Settings) -> Result<Settings, StorageError> {
        let path = self.paths.settings_file_path()?;
        settings::write_settings(&path, &next)?;
        // 기록이 성공한 뒤에만 캐시를 교체한다.
        *self.cache() = Some(next.clone());
        info!(path = %path.display(), "settings saved");
        Ok(next)
    }

    fn invalidate_cache(&self) {
        *self.cache() = None;
    }
}
