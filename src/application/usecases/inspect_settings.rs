//! 적용 중인 설정과 해석 결과를 확인하는 유스케이스.

use anyhow::Result;

use crate::application::ports::{SettingsInspector, SettingsPathResolver, SettingsRepository};

/// 현재 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
pub struct InspectSettingsUseCase<'a> {
    pub repo: &'a dyn SettingsRepository,
    pub paths: &'a dyn SettingsPathResolver,
    pub inspector: &'a dyn SettingsInspector,
}

impl<'a> InspectSettingsUseCase<'a> {
    /// 설정 점검 결과 문자열을 생성한다.
    pub fn execute(&self) -> Result<String> {
        let settings = self.repo.get_settings()?;
        let file = self.paths.settings_file_path()?;
        self.inspector
            .inspect_pretty_json(&settings, &file.display().to_string())
    }
}
