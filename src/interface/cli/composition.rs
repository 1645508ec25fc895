//! 애플리케이션 조립(composition root) 모듈.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::SettingsPathResolver;
use crate::application::usecases::inspect_settings::InspectSettingsUseCase;
use crate::application::usecases::settings::SettingsService;
use crate::infrastructure::adapters::{
    ConfigDirPathResolver, FixedPathResolver, JsonSettingsInspector, JsonSettingsRepository,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
/// 설정 캐시는 여기서 만든 저장소 인스턴스 하나가 소유한다.
pub struct AppComposition {
    paths: Arc<dyn SettingsPathResolver>,
    settings_repo: JsonSettingsRepository,
    inspector: JsonSettingsInspector,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_paths(Arc::new(ConfigDirPathResolver))
    }
}

impl AppComposition {
    /// 경로가 주어지면 고정 경로를, 아니면 OS 설정 폴더를 사용한다.
    pub fn new(settings_path: Option<PathBuf>) -> Self {
        match settings_path {
            Some(path) => Self::with_paths(Arc::new(FixedPathResolver::new(path))),
            None => Self::default(),
        }
    }

    /// 경로 어댑터를 외부에서 주입한다.
    pub fn with_paths(paths: Arc<dyn SettingsPathResolver>) -> Self {
        Self {
            settings_repo: JsonSettingsRepository::new(Arc::clone(&paths)),
            paths,
            inspector: JsonSettingsInspector,
        }
    }

    /// 설정 서비스를 생성한다.
    pub fn settings_service(&self) -> SettingsService<'_> {
        SettingsService::new(&self.settings_repo, self.paths.as_ref())
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_settings_usecase(&self) -> InspectSettingsUseCase<'_> {
        InspectSettingsUseCase {
            repo: &self.settings_repo,
            paths: self.paths.as_ref(),
            inspector: &self.inspector,
        }
    }
}
